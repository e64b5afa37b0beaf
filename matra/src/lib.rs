//! # Matra
//!
//! Dense real-valued matrices with memoized decompositions.
//!
//! One `use matra::prelude::*;` gives you an immutable row-major
//! [`Matrix`](matra_core::Matrix) type, LU and QR decompositions, and
//! solve / inverse / determinant drivers that pick the right
//! factorization for the shape at hand.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `serde` | `Serialize` / `Deserialize` for [`Matrix`](matra_core::Matrix) |

pub use matra_core as core;

/// Glob-import convenience: `use matra::prelude::*;`
pub mod prelude {
    pub use matra_core::prelude::*;
}
