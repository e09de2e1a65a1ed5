//! Core error types for path segment operations.

use thiserror::Error;

/// Errors produced by segment construction, lookup and parsing.
///
/// All failures are local and synchronous; nothing is retried internally and
/// no operation leaves partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// An index segment was given a negative index.
    #[error("index {index} should not be negative")]
    NegativeIndex {
        /// The rejected index.
        index: i64,
    },

    /// A depth lookup fell outside the segment chain.
    #[error("given depth {depth} is out of bounds (0 to {max})")]
    DepthOutOfBounds {
        /// The requested depth.
        depth: i32,
        /// The deepest reachable depth on the receiver.
        max: i32,
    },

    /// A textual path did not conform to the expected format.
    #[error("invalid path format: {message}")]
    InvalidFormat {
        /// What was wrong with the input.
        message: String,
    },
}

/// Result type for path segment operations.
pub type PathResult<T> = Result<T, PathError>;
