//! Matrix decompositions.
//!
//! | Decomposition | Module | Factorization |
//! |---------------|--------|---------------|
//! | LU (partial pivoting)     | [`lu`] | `PA = LU` |
//! | QR (Householder, reduced) | [`qr`] | `A = QR`  |

pub mod lu;
pub mod qr;

pub use lu::PivotingLuDecomposition;
pub use qr::ReducedQrDecomposition;

/// Numerical-zero threshold shared by the LU singularity check and the
/// QR full-rank check. A diagonal factor entry at or below this
/// magnitude is treated as zero for rank decisions.
pub(crate) const RANK_TOLERANCE: f64 = f64::EPSILON * 1e3;
