//! Immutable dense matrix type with row-major storage.
//!
//! [`Matrix`] is the fundamental data structure in Matra. It stores
//! `f64` elements contiguously in row-major order and never mutates
//! after construction: arithmetic and transformations return new
//! instances, while derived state (the LU and QR decompositions and
//! the inverse) is computed lazily, at most once, and memoized.

mod create;
mod display;
mod indexing;
mod ops;
#[cfg(feature = "serde")]
mod serde;

use std::sync::OnceLock;

use crate::error::{MatrixError, Result};
use crate::linalg::decomp::{PivotingLuDecomposition, ReducedQrDecomposition};

/// An immutable dense matrix of `f64` values.
///
/// Data is stored contiguously in row-major (C) order. Cloning copies
/// the element data but not the memoized decompositions; a clone
/// recomputes them on first use.
///
/// ```
/// # use matra_core::matrix::Matrix;
/// let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2).unwrap();
/// assert_eq!(a.rows(), 2);
/// assert_eq!(a.cols(), 2);
/// assert_eq!(a.at(1, 0), 3.0);
/// ```
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
    lu: OnceLock<Box<PivotingLuDecomposition>>,
    qr: OnceLock<Box<ReducedQrDecomposition>>,
    inv: OnceLock<Box<Matrix>>,
}

impl Matrix {
    /// Assemble a matrix from pre-validated parts, with empty caches.
    pub(crate) fn from_parts(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self {
            data,
            rows,
            cols,
            lu: OnceLock::new(),
            qr: OnceLock::new(),
            inv: OnceLock::new(),
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The total number of elements.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// A flat slice of all elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consume the matrix and return the underlying `Vec<f64>`.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    // ------------------------------------------------------------------
    // Decompositions (lazy, memoized)
    // ------------------------------------------------------------------

    /// The partial-pivot LU decomposition of this matrix.
    ///
    /// Computed on first call and memoized for the lifetime of the
    /// matrix. Factorization itself never fails; shape and singularity
    /// errors surface from the decomposition's own accessors.
    pub fn lu_decomposition(&self) -> &PivotingLuDecomposition {
        self.lu
            .get_or_init(|| Box::new(PivotingLuDecomposition::new(self)))
    }

    /// The reduced Householder QR decomposition of this matrix.
    ///
    /// Computed on first call and memoized. Fails if the matrix has
    /// more columns than rows.
    pub fn qr_decomposition(&self) -> Result<&ReducedQrDecomposition> {
        if self.rows < self.cols {
            return Err(MatrixError::InvalidArgument {
                reason: "QR decomposition requires at least as many rows as columns",
            });
        }
        Ok(self
            .qr
            .get_or_init(|| Box::new(ReducedQrDecomposition::factor(self))))
    }

    // ------------------------------------------------------------------
    // Solve / inverse / determinant (dispatch to the engines)
    // ------------------------------------------------------------------

    /// The determinant, via the LU decomposition.
    ///
    /// ```
    /// # use matra_core::matrix::Matrix;
    /// let a = Matrix::from_vec(vec![3.0, 8.0, 4.0, 6.0], 2).unwrap();
    /// assert!((a.determinant().unwrap() - (-14.0)).abs() < 1e-9);
    /// ```
    pub fn determinant(&self) -> Result<f64> {
        if !self.is_square() {
            return Err(MatrixError::Unsupported {
                reason: "determinant requires a square matrix",
            });
        }
        self.lu_decomposition().determinant()
    }

    /// Whether the matrix is square with a non-zero determinant.
    ///
    /// Non-square matrices are reported as singular without building a
    /// decomposition.
    pub fn is_nonsingular(&self) -> bool {
        self.is_square()
            && self
                .lu_decomposition()
                .is_nonsingular()
                .unwrap_or(false)
    }

    /// Solve `A * X = B` where `A` is this matrix.
    ///
    /// Square systems go through the LU decomposition; overdetermined
    /// systems (more rows than columns) return the least-squares
    /// solution via QR. Underdetermined systems are not supported.
    ///
    /// ```
    /// # use matra_core::matrix::Matrix;
    /// // 2x + y = 5, x + 4y = 6  =>  x = 2, y = 1
    /// let a = Matrix::from_vec(vec![2.0, 1.0, 1.0, 4.0], 2).unwrap();
    /// let b = Matrix::from_vec(vec![5.0, 6.0], 1).unwrap();
    /// let x = a.solve(&b).unwrap();
    /// assert!((x.at(0, 0) - 2.0).abs() < 1e-12);
    /// assert!((x.at(1, 0) - 1.0).abs() < 1e-12);
    /// ```
    pub fn solve(&self, b: &Matrix) -> Result<Matrix> {
        if b.rows != self.rows {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.rows, b.cols),
                got: (b.rows, b.cols),
            });
        }
        if self.rows == self.cols {
            self.lu_decomposition().solve(b)
        } else if self.rows > self.cols {
            self.qr_decomposition()?.solve(b)
        } else {
            Err(MatrixError::Unsupported {
                reason: "underdetermined system: matrix has more columns than rows",
            })
        }
    }

    /// Solve `X * A = B` where `A` is this matrix.
    ///
    /// Implemented by solving the transposed system `A' * X' = B'` and
    /// transposing the result. Fails for matrices with more rows than
    /// columns (the transposed system would be underdetermined).
    pub fn solve_transpose(&self, b: &Matrix) -> Result<Matrix> {
        if self.rows > self.cols {
            return Err(MatrixError::Unsupported {
                reason: "solve_transpose requires at most as many rows as columns",
            });
        }
        Ok(self.transpose().solve(&b.transpose())?.transpose())
    }

    /// The inverse, computed as `solve(identity)` via LU and memoized.
    ///
    /// Fails for non-square or singular matrices. Repeated calls return
    /// bit-identical results.
    pub fn inverse(&self) -> Result<Matrix> {
        if !self.is_square() {
            return Err(MatrixError::Unsupported {
                reason: "inverse requires a square matrix",
            });
        }
        if let Some(inv) = self.inv.get() {
            return Ok((**inv).clone());
        }
        let inv = self.lu_decomposition().solve(&Matrix::identity(self.rows))?;
        Ok((**self.inv.get_or_init(|| Box::new(inv))).clone())
    }
}

impl Clone for Matrix {
    fn clone(&self) -> Self {
        Self::from_parts(self.data.clone(), self.rows, self.cols)
    }
}

/// Exact element-wise equality, not tolerance-based. Intended for value
/// comparisons, not for floating-point-robust testing.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}
