//! `Display` and `Debug` formatting for [`Matrix`].

use core::fmt;

use super::Matrix;

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "matrix([")?;
        for r in 0..self.rows {
            write!(f, "  [")?;
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[r * self.cols + c])?;
            }
            if r < self.rows - 1 {
                writeln!(f, "],")?;
            } else {
                writeln!(f, "]")?;
            }
        }
        write!(f, "])")
    }
}

// Manual impl so the memoized decomposition cells stay out of the
// debug output.
impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("data", &self.data)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2).unwrap();
        let s = format!("{a}");
        assert!(s.starts_with("matrix(["));
        assert!(s.contains("[1, 2],"));
        assert!(s.contains("[3, 4]"));
    }

    #[test]
    fn test_display_single_row() {
        let a = Matrix::from_vec(vec![1.5, -2.0], 2).unwrap();
        assert_eq!(format!("{a}"), "matrix([\n  [1.5, -2]\n])");
    }

    #[test]
    fn test_debug_omits_caches() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2).unwrap();
        let _ = a.determinant().unwrap();
        let s = format!("{a:?}");
        assert!(s.contains("rows: 2"));
        assert!(!s.contains("OnceLock"));
    }
}
