//! Error types for hkmatch

use thiserror::Error;

/// Result type alias using hkmatch's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building graphs or checking matchings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Vertex index out of bounds
    #[error("Index {index} out of bounds for vertex set of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Size of the vertex set
        size: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// A matching violates the matching property or does not fit its graph
    #[error("Invalid matching: {reason}")]
    InvalidMatching {
        /// First violation found
        reason: String,
    },
}

impl Error {
    /// Create an out-of-bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, size }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create an invalid matching error
    pub fn invalid_matching(reason: impl Into<String>) -> Self {
        Self::InvalidMatching {
            reason: reason.into(),
        }
    }
}
