use thiserror::Error;

/// All errors returned by `matra-core`.
///
/// The variants fall into three families: malformed construction or
/// mismatched operands (`DimensionMismatch`, `InvalidShape`,
/// `InvalidArgument`), requests the receiver's mathematical shape
/// cannot satisfy (`Unsupported`, `Singular`, `RankDeficient`), and
/// index errors (`IndexOutOfBounds`, `RowOutOfBounds`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Operand shapes do not match the required layout.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// The requested shape is invalid at construction time.
    #[error("invalid shape: {reason}")]
    InvalidShape { reason: &'static str },

    /// A (row, column) index lies outside the matrix.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A row index lies outside the matrix.
    #[error("row {row} out of bounds for matrix with {rows} rows")]
    RowOutOfBounds { row: usize, rows: usize },

    /// Matrix is singular: no inverse and no unique solution exists.
    #[error("matrix is singular")]
    Singular,

    /// Matrix does not have full column rank, so the least-squares
    /// solution is not unique.
    #[error("matrix is rank deficient")]
    RankDeficient,

    /// The operation is undefined for the receiver's shape.
    #[error("unsupported operation: {reason}")]
    Unsupported { reason: &'static str },

    /// A well-formed call with an argument the operation cannot accept.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },
}

/// Convenience alias used throughout `matra-core`.
pub type Result<T> = std::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_dimension_mismatch() {
        let err = MatrixError::DimensionMismatch {
            expected: (2, 3),
            got: (3, 2),
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch: expected (2, 3), got (3, 2)"
        );
    }

    #[test]
    fn test_display_singular() {
        assert_eq!(MatrixError::Singular.to_string(), "matrix is singular");
    }

    #[test]
    fn test_display_out_of_bounds() {
        let err = MatrixError::IndexOutOfBounds {
            row: 4,
            col: 0,
            rows: 3,
            cols: 2,
        };
        assert_eq!(
            err.to_string(),
            "index (4, 0) out of bounds for 3x2 matrix"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<MatrixError>();
    }
}
