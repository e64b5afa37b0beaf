//! Element, row, and sub-matrix access.

use crate::error::{MatrixError, Result};

use super::Matrix;

impl Matrix {
    /// Read the element at (`row`, `col`).
    ///
    /// Bounds are the caller's responsibility on this hot path;
    /// out-of-range indices panic. Use [`row`](Self::row) or
    /// [`sub_matrix`](Self::sub_matrix) for checked access.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// A copy of row `index`.
    pub fn row(&self, index: usize) -> Result<Vec<f64>> {
        if index >= self.rows {
            return Err(MatrixError::RowOutOfBounds {
                row: index,
                rows: self.rows,
            });
        }
        Ok(self.data[index * self.cols..(index + 1) * self.cols].to_vec())
    }

    /// The rectangular slice `[row_start, row_end) x [col_start, col_end)`
    /// as a new matrix.
    ///
    /// Both end indices are exclusive and must be strictly greater than
    /// their start indices.
    ///
    /// ```
    /// # use matra_core::matrix::Matrix;
    /// let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0], 3).unwrap();
    /// let s = a.sub_matrix(0, 2, 1, 3).unwrap();
    /// assert_eq!(s.as_slice(), &[2.0, 3.0, 5.0, 6.0]);
    /// ```
    pub fn sub_matrix(
        &self,
        row_start: usize,
        row_end: usize,
        col_start: usize,
        col_end: usize,
    ) -> Result<Matrix> {
        if row_end <= row_start || col_end <= col_start {
            return Err(MatrixError::InvalidArgument {
                reason: "end indices must be strictly greater than start indices",
            });
        }
        if row_end > self.rows || col_end > self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row: row_end - 1,
                col: col_end - 1,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut data = Vec::with_capacity((row_end - row_start) * (col_end - col_start));
        for i in row_start..row_end {
            data.extend_from_slice(&self.data[i * self.cols + col_start..i * self.cols + col_end]);
        }
        Ok(Matrix::from_parts(
            data,
            row_end - row_start,
            col_end - col_start,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_at() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3).unwrap();
        assert_eq!(a.at(0, 0), 1.0);
        assert_eq!(a.at(0, 2), 3.0);
        assert_eq!(a.at(1, 1), 5.0);
    }

    #[test]
    #[should_panic]
    fn test_at_out_of_bounds_panics() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2).unwrap();
        let _ = a.at(2, 0);
    }

    #[test]
    fn test_row() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3).unwrap();
        assert_eq!(a.row(1).unwrap(), vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_row_out_of_bounds() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2).unwrap();
        assert_eq!(
            a.row(2).unwrap_err(),
            MatrixError::RowOutOfBounds { row: 2, rows: 2 }
        );
    }

    #[test]
    fn test_sub_matrix() {
        let a =
            Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0], 3).unwrap();
        let s = a.sub_matrix(1, 3, 0, 2).unwrap();
        assert_eq!((s.rows(), s.cols()), (2, 2));
        assert_eq!(s.as_slice(), &[4.0, 5.0, 7.0, 8.0]);
    }

    #[test]
    fn test_sub_matrix_single_element() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2).unwrap();
        let s = a.sub_matrix(1, 2, 1, 2).unwrap();
        assert_eq!(s.as_slice(), &[4.0]);
    }

    #[test]
    fn test_sub_matrix_empty_range() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2).unwrap();
        assert!(matches!(
            a.sub_matrix(1, 1, 0, 2).unwrap_err(),
            MatrixError::InvalidArgument { .. }
        ));
        assert!(matches!(
            a.sub_matrix(0, 2, 2, 1).unwrap_err(),
            MatrixError::InvalidArgument { .. }
        ));
    }

    #[test]
    fn test_sub_matrix_out_of_bounds() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2).unwrap();
        assert!(matches!(
            a.sub_matrix(0, 3, 0, 2).unwrap_err(),
            MatrixError::IndexOutOfBounds { .. }
        ));
    }
}
