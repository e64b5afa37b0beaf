//! `matra-core` — Foundation crate for the Matra matrix library.
//!
//! Provides an immutable dense `f64` matrix type together with two
//! classical factorizations — LU with partial pivoting and reduced
//! Householder QR — and the `solve` / `inverse` / `determinant`
//! operations built on top of them.
//!
//! # Design
//!
//! - **Immutable data model**: a [`Matrix`] never changes after
//!   construction. Every arithmetic or transforming operation allocates
//!   and returns a new instance.
//! - **Lazy, write-once memoization**: decompositions and the inverse
//!   are computed at most once per matrix and cached behind `OnceLock`
//!   cells, so repeated queries return bit-identical results.
//! - **Explicit failure paths**: every fallible operation returns
//!   [`Result`]; ill-posed requests fail at the call site, never with a
//!   best-effort NaN-laden substitute.

pub mod error;
pub mod linalg;
pub mod matrix;

// Re-export key types at crate root for convenience.
pub use error::{MatrixError, Result};
pub use linalg::decomp::{PivotingLuDecomposition, ReducedQrDecomposition};
pub use matrix::Matrix;

/// Items intended for glob-import: `use matra_core::prelude::*;`
pub mod prelude {
    pub use crate::error::{MatrixError, Result};
    pub use crate::linalg::decomp::{PivotingLuDecomposition, ReducedQrDecomposition};
    pub use crate::matrix::Matrix;
}
