//! Matrix construction functions.

use crate::error::{MatrixError, Result};

use super::Matrix;

impl Matrix {
    /// Create a matrix from a flat row-major value vector and a column
    /// count; the row count is derived.
    ///
    /// Fails unless `cols >= 1`, the vector is non-empty, and its
    /// length is a multiple of `cols`.
    ///
    /// ```
    /// # use matra_core::matrix::Matrix;
    /// let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3).unwrap();
    /// assert_eq!(a.rows(), 2);
    ///
    /// // Length 3 is not a multiple of 2.
    /// assert!(Matrix::from_vec(vec![1.0, 2.0, 3.0], 2).is_err());
    /// ```
    pub fn from_vec(data: Vec<f64>, cols: usize) -> Result<Self> {
        if cols == 0 {
            return Err(MatrixError::InvalidShape {
                reason: "column dimension must be at least 1",
            });
        }
        if data.is_empty() {
            return Err(MatrixError::InvalidShape {
                reason: "matrix must contain at least one row",
            });
        }
        if data.len() % cols != 0 {
            return Err(MatrixError::InvalidShape {
                reason: "value count is not a multiple of the column dimension",
            });
        }
        let rows = data.len() / cols;
        Ok(Self::from_parts(data, rows, cols))
    }

    /// Create a matrix from a list of equal-length rows.
    ///
    /// ```
    /// # use matra_core::matrix::Matrix;
    /// let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(MatrixError::InvalidShape {
                reason: "matrix must contain at least one row",
            });
        };
        let cols = first.len();
        if cols == 0 {
            return Err(MatrixError::InvalidShape {
                reason: "rows must contain at least one value",
            });
        }
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(MatrixError::InvalidShape {
                    reason: "rows must all have the same length",
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self::from_parts(data, rows.len(), cols))
    }

    /// Create a matrix filled with a constant value.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn full(rows: usize, cols: usize, value: f64) -> Self {
        assert!(
            rows >= 1 && cols >= 1,
            "matrix dimensions must be at least 1x1, got {rows}x{cols}",
        );
        Self::from_parts(vec![value; rows * cols], rows, cols)
    }

    /// Create a matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::full(rows, cols, 0.0)
    }

    /// Create the `n x n` identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    ///
    /// ```
    /// # use matra_core::matrix::Matrix;
    /// let eye = Matrix::identity(3);
    /// assert_eq!(eye.at(0, 0), 1.0);
    /// assert_eq!(eye.at(0, 1), 0.0);
    /// ```
    pub fn identity(n: usize) -> Self {
        assert!(n >= 1, "identity dimension must be at least 1, got {n}");
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self::from_parts(data, n, n)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2).unwrap();
        assert_eq!(a.rows(), 3);
        assert_eq!(a.cols(), 2);
        assert_eq!(a.at(2, 1), 6.0);
    }

    #[test]
    fn test_from_vec_length_not_multiple() {
        let r = Matrix::from_vec(vec![1.0, 2.0, 3.0], 2);
        assert_eq!(
            r.unwrap_err(),
            MatrixError::InvalidShape {
                reason: "value count is not a multiple of the column dimension",
            }
        );
    }

    #[test]
    fn test_from_vec_zero_cols() {
        assert!(Matrix::from_vec(vec![1.0], 0).is_err());
    }

    #[test]
    fn test_from_vec_empty() {
        assert!(Matrix::from_vec(vec![], 3).is_err());
    }

    #[test]
    fn test_from_rows() {
        let a = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(a.rows(), 2);
        assert_eq!(a.cols(), 3);
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_from_rows_unequal_lengths() {
        let r = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert_eq!(
            r.unwrap_err(),
            MatrixError::InvalidShape {
                reason: "rows must all have the same length",
            }
        );
    }

    #[test]
    fn test_from_rows_empty() {
        assert!(Matrix::from_rows(&[]).is_err());
        assert!(Matrix::from_rows(&[vec![]]).is_err());
    }

    #[test]
    fn test_full_and_zeros() {
        let f = Matrix::full(2, 3, 7.5);
        assert!(f.as_slice().iter().all(|&x| x == 7.5));

        let z = Matrix::zeros(3, 2);
        assert_eq!((z.rows(), z.cols()), (3, 2));
        assert!(z.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    #[should_panic(expected = "at least 1x1")]
    fn test_full_zero_cols_panics() {
        let _ = Matrix::full(2, 0, 1.0);
    }

    #[test]
    #[should_panic(expected = "at least 1x1")]
    fn test_zeros_zero_rows_panics() {
        let _ = Matrix::zeros(0, 3);
    }

    #[test]
    #[should_panic(expected = "at least 1")]
    fn test_identity_zero_panics() {
        let _ = Matrix::identity(0);
    }

    #[test]
    fn test_identity() {
        let eye = Matrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(eye.at(i, j), if i == j { 1.0 } else { 0.0 });
            }
        }
    }
}
