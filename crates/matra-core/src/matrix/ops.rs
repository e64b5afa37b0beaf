//! Arithmetic for [`Matrix`]: transpose, entrywise combination, scalar
//! scaling, and the matrix product.
//!
//! Each binary operation exists in two forms, following the crate's
//! dual surface:
//! - checked methods (`add_checked`, `sub_checked`, `mul_checked`,
//!   `matmul`) that return `Err` on a dimension mismatch, and
//! - operator impls (`+`, `-`, `*`, `/`) that panic on mismatch.
//!
//! `*` between matrices is the matrix product; the entrywise (Hadamard)
//! product is only available as [`Matrix::mul_checked`].

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{MatrixError, Result};

use super::Matrix;

impl Matrix {
    // ------------------------------------------------------------------
    // Transpose
    // ------------------------------------------------------------------

    /// The transposed matrix, with dimensions swapped.
    ///
    /// ```
    /// # use matra_core::matrix::Matrix;
    /// let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2).unwrap();
    /// assert_eq!(a.transpose().as_slice(), &[1.0, 3.0, 2.0, 4.0]);
    /// ```
    pub fn transpose(&self) -> Matrix {
        let mut data = vec![0.0; self.data.len()];
        for j in 0..self.cols {
            for i in 0..self.rows {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Matrix::from_parts(data, self.cols, self.rows)
    }

    // ------------------------------------------------------------------
    // Entrywise combination
    // ------------------------------------------------------------------

    /// Apply a function to every element, returning a new matrix.
    pub(crate) fn map<F>(&self, f: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix::from_parts(
            self.data.iter().map(|&x| f(x)).collect(),
            self.rows,
            self.cols,
        )
    }

    /// Apply a function element-wise to two matrices of the same shape.
    fn zip_map<F>(&self, other: &Matrix, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.rows, self.cols),
                got: (other.rows, other.cols),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix::from_parts(data, self.rows, self.cols))
    }

    /// Entrywise sum, returning `Err` on shape mismatch.
    pub fn add_checked(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_map(other, |a, b| a + b)
    }

    /// Entrywise difference, returning `Err` on shape mismatch.
    pub fn sub_checked(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_map(other, |a, b| a - b)
    }

    /// Entrywise (Hadamard) product, returning `Err` on shape mismatch.
    pub fn mul_checked(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_map(other, |a, b| a * b)
    }

    // ------------------------------------------------------------------
    // Matrix product
    // ------------------------------------------------------------------

    /// The matrix product `self * rhs`.
    ///
    /// Fails unless `self.cols() == rhs.rows()`. The result has
    /// `self.rows()` rows and `rhs.cols()` columns.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.cols, rhs.cols),
                got: (rhs.rows, rhs.cols),
            });
        }
        Ok(self.matmul_unchecked(rhs))
    }

    // i-k-j loop order keeps the inner loop walking both operands
    // row-contiguously.
    fn matmul_unchecked(&self, rhs: &Matrix) -> Matrix {
        let (m, inner, p) = (self.rows, self.cols, rhs.cols);
        let mut out = vec![0.0; m * p];
        for i in 0..m {
            for k in 0..inner {
                let aik = self.data[i * inner + k];
                for j in 0..p {
                    out[i * p + j] += aik * rhs.data[k * p + j];
                }
            }
        }
        Matrix::from_parts(out, m, p)
    }
}

// ======================================================================
// Matrix op Matrix  (entrywise +/- and matrix product * — panic on
// mismatch; see the checked methods for Result-returning forms)
// ======================================================================

macro_rules! impl_matrix_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Matrix {
            type Output = Matrix;

            fn $method(self, rhs: Matrix) -> Matrix {
                &self $op &rhs
            }
        }

        impl $trait for &Matrix {
            type Output = Matrix;

            fn $method(self, rhs: &Matrix) -> Matrix {
                assert_eq!(
                    (self.rows, self.cols),
                    (rhs.rows, rhs.cols),
                    "shape mismatch in element-wise {}: {}x{} vs {}x{}",
                    stringify!($method),
                    self.rows,
                    self.cols,
                    rhs.rows,
                    rhs.cols,
                );
                let data = self
                    .data
                    .iter()
                    .zip(rhs.data.iter())
                    .map(|(&a, &b)| a $op b)
                    .collect();
                Matrix::from_parts(data, self.rows, self.cols)
            }
        }
    };
}

impl_matrix_binop!(Add, add, +);
impl_matrix_binop!(Sub, sub, -);

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        assert_eq!(
            self.cols, rhs.rows,
            "inner dimension mismatch in matrix product: {}x{} * {}x{}",
            self.rows, self.cols, rhs.rows, rhs.cols,
        );
        self.matmul_unchecked(rhs)
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        &self * &rhs
    }
}

// ======================================================================
// Matrix op scalar
// ======================================================================

macro_rules! impl_scalar_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<f64> for Matrix {
            type Output = Matrix;

            fn $method(self, rhs: f64) -> Matrix {
                self.map(|a| a $op rhs)
            }
        }

        impl $trait<f64> for &Matrix {
            type Output = Matrix;

            fn $method(self, rhs: f64) -> Matrix {
                self.map(|a| a $op rhs)
            }
        }
    };
}

impl_scalar_binop!(Mul, mul, *);
impl_scalar_binop!(Div, div, /);

// ======================================================================
// Negation
// ======================================================================

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.map(|a| -a)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.map(|a| -a)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn mat(data: &[f64], cols: usize) -> Matrix {
        Matrix::from_vec(data.to_vec(), cols).unwrap()
    }

    #[test]
    fn test_transpose() {
        let a = mat(&[1.0, 2.0, 3.0, 4.0], 2);
        let t = a.transpose();
        assert_eq!(t.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_transpose_rectangular() {
        let a = mat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3);
        let t = a.transpose();
        assert_eq!((t.rows(), t.cols()), (3, 2));
        assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_transpose_involution() {
        let a = mat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2);
        assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn test_add_sub_checked() {
        let a = mat(&[1.0, 2.0, 3.0, 4.0], 2);
        let b = mat(&[10.0, 20.0, 30.0, 40.0], 2);
        assert_eq!(
            a.add_checked(&b).unwrap().as_slice(),
            &[11.0, 22.0, 33.0, 44.0]
        );
        assert_eq!(
            b.sub_checked(&a).unwrap().as_slice(),
            &[9.0, 18.0, 27.0, 36.0]
        );
    }

    #[test]
    fn test_mul_checked_hadamard() {
        let a = mat(&[1.0, 2.0, 3.0, 4.0], 2);
        let b = mat(&[2.0, 3.0, 4.0, 5.0], 2);
        assert_eq!(
            a.mul_checked(&b).unwrap().as_slice(),
            &[2.0, 6.0, 12.0, 20.0]
        );
    }

    #[test]
    fn test_checked_ops_shape_mismatch() {
        let a = mat(&[1.0, 2.0, 3.0, 4.0], 2);
        let b = mat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3);
        assert!(matches!(
            a.add_checked(&b).unwrap_err(),
            MatrixError::DimensionMismatch { .. }
        ));
        assert!(a.sub_checked(&b).is_err());
        assert!(a.mul_checked(&b).is_err());
    }

    #[test]
    fn test_operators() {
        let a = mat(&[1.0, 2.0, 3.0, 4.0], 2);
        let b = mat(&[4.0, 3.0, 2.0, 1.0], 2);
        assert_eq!((&a + &b).as_slice(), &[5.0, 5.0, 5.0, 5.0]);
        assert_eq!((&a - &b).as_slice(), &[-3.0, -1.0, 1.0, 3.0]);
        assert_eq!((&a * 2.0).as_slice(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!((&a / 2.0).as_slice(), &[0.5, 1.0, 1.5, 2.0]);
        assert_eq!((-&a).as_slice(), &[-1.0, -2.0, -3.0, -4.0]);
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn test_add_panics_on_mismatch() {
        let a = mat(&[1.0, 2.0], 2);
        let b = mat(&[1.0, 2.0], 1);
        let _ = a + b;
    }

    #[test]
    fn test_matmul() {
        // >>> np.array([[1,2],[3,4]]) @ np.array([[5,6],[7,8]])
        // array([[19, 22], [43, 50]])
        let a = mat(&[1.0, 2.0, 3.0, 4.0], 2);
        let b = mat(&[5.0, 6.0, 7.0, 8.0], 2);
        assert_eq!(a.matmul(&b).unwrap().as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_matmul_result_dimensions() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(3, 5);
        let c = a.matmul(&b).unwrap();
        assert_eq!((c.rows(), c.cols()), (2, 5));
    }

    #[test]
    fn test_matmul_inner_mismatch() {
        let a = mat(&[1.0, 2.0, 3.0, 4.0], 2);
        let b = mat(&[1.0, 2.0, 3.0], 3);
        assert!(matches!(
            a.matmul(&b).unwrap_err(),
            MatrixError::DimensionMismatch { .. }
        ));
    }

    #[test]
    fn test_identity_matmul_is_noop() {
        let x = mat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2);
        let eye = Matrix::identity(3);
        assert_eq!(eye.matmul(&x).unwrap(), x);
        assert_eq!(&eye * &x, x);
    }

    #[test]
    #[should_panic(expected = "inner dimension mismatch")]
    fn test_mul_operator_panics_on_mismatch() {
        let a = mat(&[1.0, 2.0, 3.0, 4.0], 2);
        let b = mat(&[1.0, 2.0, 3.0], 3);
        let _ = &a * &b;
    }
}
