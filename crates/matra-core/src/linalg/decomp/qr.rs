//! Reduced QR decomposition via Householder reflections.
//!
//! Factors a tall or square matrix `A` (M x N, M >= N) into `A = QR`
//! where `Q` is M x N with orthonormal columns and `R` is N x N upper
//! triangular. The reduced ("economy") form never materializes the
//! full M x M orthogonal factor.

use std::sync::OnceLock;

use super::RANK_TOLERANCE;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Result of a reduced QR decomposition.
///
/// Stores the Householder vectors packed into the lower trapezoid of
/// the working buffer and the strict upper triangle of `R` above them;
/// the diagonal of `R` lives in a separate vector. Materialized
/// factors are memoized.
#[derive(Debug, Clone)]
pub struct ReducedQrDecomposition {
    /// Packed form: Householder vectors on and below the diagonal,
    /// strict upper triangle of `R` above it.
    qr: Vec<f64>,
    /// Diagonal of `R`. Negative entries are normal; the reflection
    /// sign is chosen to avoid cancellation.
    r_diag: Vec<f64>,
    rows: usize,
    cols: usize,
    q: OnceLock<Matrix>,
    r: OnceLock<Matrix>,
    h: OnceLock<Matrix>,
}

impl ReducedQrDecomposition {
    /// Factor `a` by Householder reflections.
    ///
    /// Fails with [`MatrixError::InvalidArgument`] when `a` has more
    /// columns than rows; underdetermined systems are out of scope for
    /// the reduced form.
    ///
    /// ```
    /// # use matra_core::matrix::Matrix;
    /// # use matra_core::linalg::decomp::ReducedQrDecomposition;
    /// let a = Matrix::from_vec(vec![1.0, 1.0, 1.0, 2.0, 1.0, 3.0], 2).unwrap();
    /// let qr = ReducedQrDecomposition::new(&a).unwrap();
    /// assert!(qr.is_full_rank());
    /// ```
    pub fn new(a: &Matrix) -> Result<Self> {
        if a.rows() < a.cols() {
            return Err(MatrixError::InvalidArgument {
                reason: "QR decomposition requires rows >= cols",
            });
        }
        Ok(Self::factor(a))
    }

    /// Shape-unchecked factorization; callers guarantee `rows >= cols`.
    pub(crate) fn factor(a: &Matrix) -> Self {
        let (m, n) = (a.rows(), a.cols());
        let mut qr = a.as_slice().to_vec();
        let mut r_diag = vec![0.0; n];

        for k in 0..n {
            // 2-norm of the k-th column below the diagonal, accumulated
            // with hypot to avoid overflow.
            let mut nrm: f64 = 0.0;
            for i in k..m {
                nrm = nrm.hypot(qr[i * n + k]);
            }

            if nrm != 0.0 {
                // Flip the sign so the reflection adds magnitudes
                // instead of cancelling.
                if qr[k * n + k] < 0.0 {
                    nrm = -nrm;
                }
                for i in k..m {
                    qr[i * n + k] /= nrm;
                }
                qr[k * n + k] += 1.0;

                // Apply the reflection to the remaining columns.
                for j in (k + 1)..n {
                    let mut s = 0.0;
                    for i in k..m {
                        s += qr[i * n + k] * qr[i * n + j];
                    }
                    s = -s / qr[k * n + k];
                    for i in k..m {
                        let vik = qr[i * n + k];
                        qr[i * n + j] += s * vik;
                    }
                }
            }
            r_diag[k] = -nrm;
        }

        Self {
            qr,
            r_diag,
            rows: m,
            cols: n,
            q: OnceLock::new(),
            r: OnceLock::new(),
            h: OnceLock::new(),
        }
    }

    /// Whether every diagonal entry of `R` is non-negligible, i.e. the
    /// columns of the source matrix are linearly independent.
    pub fn is_full_rank(&self) -> bool {
        self.r_diag.iter().all(|d| d.abs() > RANK_TOLERANCE)
    }

    /// The upper-triangular factor `R` (cols x cols), materialized on
    /// demand and memoized.
    pub fn upper_triangular_factor(&self) -> &Matrix {
        self.r.get_or_init(|| {
            let n = self.cols;
            let mut data = vec![0.0; n * n];
            for i in 0..n {
                data[i * n + i] = self.r_diag[i];
                for j in (i + 1)..n {
                    data[i * n + j] = self.qr[i * n + j];
                }
            }
            Matrix::from_parts(data, n, n)
        })
    }

    /// The orthogonal factor `Q` (rows x cols) with orthonormal
    /// columns, materialized on demand and memoized.
    pub fn orthogonal_factor(&self) -> &Matrix {
        self.q.get_or_init(|| {
            let (m, n) = (self.rows, self.cols);
            let mut q = vec![0.0; m * n];
            // Accumulate the reflections in reverse onto the leading
            // columns of the identity.
            for k in (0..n).rev() {
                q[k * n + k] = 1.0;
                if self.qr[k * n + k] != 0.0 {
                    for j in k..n {
                        let mut s = 0.0;
                        for i in k..m {
                            s += self.qr[i * n + k] * q[i * n + j];
                        }
                        s = -s / self.qr[k * n + k];
                        for i in k..m {
                            let vik = self.qr[i * n + k];
                            q[i * n + j] += s * vik;
                        }
                    }
                }
            }
            Matrix::from_parts(q, m, n)
        })
    }

    /// The packed Householder vectors as a lower-trapezoidal matrix
    /// (rows x cols), materialized on demand and memoized.
    pub fn householder_matrix(&self) -> &Matrix {
        self.h.get_or_init(|| {
            let (m, n) = (self.rows, self.cols);
            let mut data = vec![0.0; m * n];
            for i in 0..m {
                for j in 0..=i.min(n - 1) {
                    data[i * n + j] = self.qr[i * n + j];
                }
            }
            Matrix::from_parts(data, m, n)
        })
    }

    /// Solve the least-squares problem `min ||A * X - B||_2` column by
    /// column.
    ///
    /// `X` is cols x `B.cols()`. Fails when `B`'s row count does not
    /// match the source matrix and with
    /// [`MatrixError::RankDeficient`] when the source columns are
    /// linearly dependent.
    pub fn solve(&self, b: &Matrix) -> Result<Matrix> {
        if b.rows() != self.rows {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.rows, b.cols()),
                got: (b.rows(), b.cols()),
            });
        }
        if !self.is_full_rank() {
            return Err(MatrixError::RankDeficient);
        }

        let (m, n) = (self.rows, self.cols);
        let nx = b.cols();
        let mut x = b.as_slice().to_vec();

        // Apply the stored reflections to form Q^T * B in place.
        for k in 0..n {
            for j in 0..nx {
                let mut s = 0.0;
                for i in k..m {
                    s += self.qr[i * n + k] * x[i * nx + j];
                }
                s = -s / self.qr[k * n + k];
                for i in k..m {
                    let vik = self.qr[i * n + k];
                    x[i * nx + j] += s * vik;
                }
            }
        }

        // Back substitution against R.
        for k in (0..n).rev() {
            for j in 0..nx {
                x[k * nx + j] /= self.r_diag[k];
            }
            for i in 0..k {
                let rik = self.qr[i * n + k];
                for j in 0..nx {
                    let xkj = x[k * nx + j];
                    x[i * nx + j] -= xkj * rik;
                }
            }
        }

        x.truncate(n * nx);
        Ok(Matrix::from_parts(x, n, nx))
    }
}
