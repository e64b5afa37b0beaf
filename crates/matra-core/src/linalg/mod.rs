//! Linear algebra driver routines.
//!
//! One-shot conveniences over the decomposition engines in [`decomp`]:
//! each builds the appropriate factorization for a fresh matrix and
//! applies it once. Callers reusing a matrix should prefer the
//! memoized accessors on [`Matrix`] ([`Matrix::lu_decomposition`],
//! [`Matrix::qr_decomposition`]) so the factorization is shared.

pub mod decomp;

pub use decomp::PivotingLuDecomposition;
pub use decomp::ReducedQrDecomposition;

use crate::error::Result;
use crate::matrix::Matrix;

/// Solve the linear system `Ax = b` for a square matrix `A`.
///
/// Uses LU decomposition with partial pivoting internally.
///
/// ```
/// # use matra_core::matrix::Matrix;
/// # use matra_core::linalg;
/// let a = Matrix::from_vec(vec![2.0, 1.0, 1.0, 4.0], 2).unwrap();
/// let b = Matrix::from_vec(vec![5.0, 6.0], 1).unwrap();
/// let x = linalg::solve(&a, &b).unwrap();
/// assert!((x.at(0, 0) - 2.0).abs() < 1e-10);
/// assert!((x.at(1, 0) - 1.0).abs() < 1e-10);
/// ```
pub fn solve(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    PivotingLuDecomposition::new(a).solve(b)
}

/// Compute the inverse of a square matrix.
///
/// Returns [`MatrixError::Singular`](crate::MatrixError::Singular) if
/// the matrix is singular.
///
/// ```
/// # use matra_core::matrix::Matrix;
/// # use matra_core::linalg;
/// let a = Matrix::from_vec(vec![2.0, 1.0, 1.0, 4.0], 2).unwrap();
/// let inv = linalg::inv(&a).unwrap();
/// // A * A^-1 ≈ I
/// let eye = a.matmul(&inv).unwrap();
/// assert!((eye.at(0, 0) - 1.0).abs() < 1e-10);
/// ```
pub fn inv(a: &Matrix) -> Result<Matrix> {
    a.inverse()
}

/// Compute the determinant of a square matrix.
///
/// ```
/// # use matra_core::matrix::Matrix;
/// # use matra_core::linalg;
/// let a = Matrix::from_vec(vec![3.0, 8.0, 4.0, 6.0], 2).unwrap();
/// let det = linalg::det(&a).unwrap();
/// assert!((det - (-14.0)).abs() < 1e-9);
/// ```
pub fn det(a: &Matrix) -> Result<f64> {
    a.determinant()
}

/// Solve the least-squares problem `min ||Ax - b||_2` via QR
/// decomposition.
///
/// For square full-rank systems this is equivalent to [`solve`]. For
/// overdetermined systems (more rows than columns) it returns the
/// least-squares solution.
///
/// ```
/// # use matra_core::matrix::Matrix;
/// # use matra_core::linalg;
/// // Overdetermined system: 3 equations, 2 unknowns
/// let a = Matrix::from_vec(vec![1.0, 1.0, 1.0, 2.0, 1.0, 3.0], 2).unwrap();
/// let b = Matrix::from_vec(vec![6.0, 5.0, 7.0], 1).unwrap();
/// let x = linalg::lstsq(&a, &b).unwrap();
/// assert_eq!((x.rows(), x.cols()), (2, 1));
/// ```
pub fn lstsq(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    ReducedQrDecomposition::new(a)?.solve(b)
}
