//! Error types.
//!
//! Every fallible operation in this crate reports through [`VectorError`].
//! Failures are always surfaced to the immediate caller; nothing retries
//! or recovers internally.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VectorError>;

/// Errors produced by vector operations.
#[derive(Debug, Error)]
pub enum VectorError {
    /// Element access past the end of the buffer.
    #[error("index {index} out of range for vector of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the vector at the time of access.
        len: usize,
    },

    /// A binary operation received vectors of different lengths.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch {
        /// Length of the left-hand operand.
        left: usize,
        /// Length of the right-hand operand.
        right: usize,
    },

    /// Scalar division by the zero value of the element type.
    #[error("cannot divide by zero")]
    DivideByZero,

    /// Normalization of a vector whose squared norm is zero.
    #[error("cannot normalize a zero vector")]
    ZeroVector,

    /// The input source failed while repopulating a vector.
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    /// A token from the input source did not parse as the expected value.
    #[error("cannot parse {token:?} as {what}")]
    Parse {
        /// The raw token as read.
        token: String,
        /// What the token was supposed to be.
        what: &'static str,
    },

    /// The input source ended before the vector was fully read.
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),
}
