//! Error types for the k-d tree and the point reader.

use thiserror::Error;

/// Errors returned by [`KdTree`](crate::KdTree) and [`PointSet`](crate::PointSet) operations.
///
/// Both variants are deterministic functions of the arguments and the current
/// contents of the index. Nothing is mutated when an error is returned.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum KdError {
    /// A point or rectangle argument was rejected: a non-finite coordinate,
    /// `min > max` on an axis, or a point outside the tree's domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `nearest()` was called on an index that holds no points.
    #[error("nearest() called on an empty collection")]
    EmptyCollection,
}

/// Errors produced while reading a point source.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReadError {
    /// The underlying reader failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input held no tokens at all.
    #[error("missing point count")]
    MissingCount,

    /// A token could not be parsed as the expected number.
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber {
        /// The offending token.
        token: String,
        /// 1-based line on which the token appears.
        line: usize,
    },

    /// Fewer coordinate pairs than the declared count.
    #[error("expected {expected} points, found {found}")]
    Truncated {
        /// Declared number of points.
        expected: usize,
        /// Number of complete pairs actually read.
        found: usize,
    },

    /// A coordinate parsed but is NaN or infinite.
    #[error("line {line}: non-finite coordinate")]
    NonFinite {
        /// 1-based line of the coordinate.
        line: usize,
    },
}
