//! LU decomposition with partial pivoting.
//!
//! Factors a matrix `A` into `PA = LU` where:
//! - `P` is a row permutation (stored as a pivot vector)
//! - `L` is lower triangular with unit diagonal
//! - `U` is upper triangular

use std::sync::OnceLock;

use super::RANK_TOLERANCE;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Result of an LU decomposition with partial pivoting.
///
/// Stores the factorization `PA = LU` in compact form: `L` and `U` are
/// packed into a single row-major buffer (the unit diagonal of `L` is
/// implicit), and the permutation is stored as a pivot index vector.
/// Materialized factors and the determinant are memoized.
#[derive(Debug, Clone)]
pub struct PivotingLuDecomposition {
    /// Packed factors: the strict lower triangle holds `L` (without its
    /// diagonal), the upper triangle including the diagonal holds `U`.
    lu: Vec<f64>,
    /// Row permutation: row `i` of the factored matrix came from row
    /// `pivot[i]` of the source.
    pivot: Vec<usize>,
    /// Parity of the row swaps (+1 or -1), for the determinant.
    sign: f64,
    /// Number of rows in the source matrix.
    rows: usize,
    /// Number of columns in the source matrix.
    cols: usize,
    det: OnceLock<f64>,
    lower: OnceLock<Matrix>,
    upper: OnceLock<Matrix>,
    permutation: OnceLock<Matrix>,
}

impl PivotingLuDecomposition {
    /// Factor `a` by right-looking Gaussian elimination with partial
    /// pivoting.
    ///
    /// Factorization never fails: when a pivot column is exactly zero
    /// the elimination step is skipped and the zero stays on the
    /// diagonal of `U`, surfacing later through
    /// [`is_nonsingular`](Self::is_nonsingular) and
    /// [`solve`](Self::solve).
    ///
    /// ```
    /// # use matra_core::matrix::Matrix;
    /// # use matra_core::linalg::decomp::PivotingLuDecomposition;
    /// let a = Matrix::from_vec(vec![2.0, 1.0, 1.0, 4.0], 2).unwrap();
    /// let lu = PivotingLuDecomposition::new(&a);
    /// assert!((lu.determinant().unwrap() - 7.0).abs() < 1e-10);
    /// ```
    pub fn new(a: &Matrix) -> Self {
        let (m, n) = (a.rows(), a.cols());
        let mut lu = a.as_slice().to_vec();
        let mut pivot: Vec<usize> = (0..m).collect();
        let mut sign = 1.0;

        for j in 0..n.min(m) {
            // Partial pivoting: first row with the largest |lu[i][j]|
            // among i >= j.
            let mut p = j;
            for i in (j + 1)..m {
                if lu[i * n + j].abs() > lu[p * n + j].abs() {
                    p = i;
                }
            }
            if p != j {
                for k in 0..n {
                    lu.swap(j * n + k, p * n + k);
                }
                pivot.swap(j, p);
                sign = -sign;
            }

            let pivot_val = lu[j * n + j];
            if pivot_val != 0.0 {
                for i in (j + 1)..m {
                    lu[i * n + j] /= pivot_val;
                    let mult = lu[i * n + j];
                    for k in (j + 1)..n {
                        let ujk = lu[j * n + k];
                        lu[i * n + k] -= mult * ujk;
                    }
                }
            }
        }

        Self {
            lu,
            pivot,
            sign,
            rows: m,
            cols: n,
            det: OnceLock::new(),
            lower: OnceLock::new(),
            upper: OnceLock::new(),
            permutation: OnceLock::new(),
        }
    }

    /// Whether `U` has a non-negligible entry on every diagonal
    /// position. Requires a square source matrix.
    pub fn is_nonsingular(&self) -> Result<bool> {
        if self.rows != self.cols {
            return Err(MatrixError::Unsupported {
                reason: "singularity check requires a square matrix",
            });
        }
        let n = self.cols;
        Ok((0..n).all(|j| self.lu[j * n + j].abs() > RANK_TOLERANCE))
    }

    /// The determinant: `sign * product(diag(U))`. Requires a square
    /// source matrix; memoized after the first computation.
    pub fn determinant(&self) -> Result<f64> {
        if self.rows != self.cols {
            return Err(MatrixError::Unsupported {
                reason: "determinant requires a square matrix",
            });
        }
        Ok(*self.det.get_or_init(|| {
            let n = self.cols;
            (0..n).fold(self.sign, |d, j| d * self.lu[j * n + j])
        }))
    }

    /// The row-permutation pivot vector.
    pub fn pivot(&self) -> &[usize] {
        &self.pivot
    }

    /// The unit-lower-triangular factor `L`, materialized on demand and
    /// memoized. Its shape is rows x min(rows, cols), so
    /// `lower_factor * upper_factor` always has the source's shape.
    pub fn lower_factor(&self) -> &Matrix {
        self.lower.get_or_init(|| {
            let (m, n) = (self.rows, self.cols);
            let p = m.min(n);
            let mut data = vec![0.0; m * p];
            for i in 0..m {
                for j in 0..p.min(i) {
                    data[i * p + j] = self.lu[i * n + j];
                }
                if i < p {
                    data[i * p + i] = 1.0;
                }
            }
            Matrix::from_parts(data, m, p)
        })
    }

    /// The upper-triangular factor `U` (min(rows, cols) x cols),
    /// materialized on demand and memoized.
    pub fn upper_factor(&self) -> &Matrix {
        self.upper.get_or_init(|| {
            let n = self.cols;
            let p = self.rows.min(n);
            let mut data = vec![0.0; p * n];
            for i in 0..p {
                for j in i..n {
                    data[i * n + j] = self.lu[i * n + j];
                }
            }
            Matrix::from_parts(data, p, n)
        })
    }

    /// The permutation matrix `P` (rows x rows) with `P * A == L * U`.
    pub fn pivot_matrix(&self) -> &Matrix {
        self.permutation.get_or_init(|| {
            let m = self.rows;
            let mut data = vec![0.0; m * m];
            for (i, &pi) in self.pivot.iter().enumerate() {
                data[i * m + pi] = 1.0;
            }
            Matrix::from_parts(data, m, m)
        })
    }

    /// Solve `A * X = B` using the packed factors.
    ///
    /// `B` may have any number of columns; `X` has the same column
    /// count. Fails for non-square or singular sources and when `B`'s
    /// row count does not match.
    pub fn solve(&self, b: &Matrix) -> Result<Matrix> {
        if self.rows != self.cols {
            return Err(MatrixError::Unsupported {
                reason: "LU solve requires a square matrix",
            });
        }
        if b.rows() != self.rows {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.rows, b.cols()),
                got: (b.rows(), b.cols()),
            });
        }
        if !self.is_nonsingular()? {
            return Err(MatrixError::Singular);
        }

        let n = self.rows;
        let nx = b.cols();
        let bs = b.as_slice();

        // Row-permute B according to the pivot vector.
        let mut x = vec![0.0; n * nx];
        for i in 0..n {
            let src = self.pivot[i] * nx;
            x[i * nx..(i + 1) * nx].copy_from_slice(&bs[src..src + nx]);
        }

        // Forward substitution with L: unit diagonal, no division.
        for k in 0..n {
            for i in (k + 1)..n {
                let lik = self.lu[i * n + k];
                for j in 0..nx {
                    let xkj = x[k * nx + j];
                    x[i * nx + j] -= xkj * lik;
                }
            }
        }

        // Back substitution with U.
        for k in (0..n).rev() {
            let ukk = self.lu[k * n + k];
            for j in 0..nx {
                x[k * nx + j] /= ukk;
            }
            for i in 0..k {
                let uik = self.lu[i * n + k];
                for j in 0..nx {
                    let xkj = x[k * nx + j];
                    x[i * nx + j] -= xkj * uik;
                }
            }
        }

        Ok(Matrix::from_parts(x, n, nx))
    }
}
