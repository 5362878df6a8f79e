//! Error types for the coverage engine

use thiserror::Error;

/// Errors raised by coverage queries
///
/// These signal programmer errors at the query surface; absent relationships
/// are `Option`s, never errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverageError {
    /// An argument could not be interpreted (e.g., an unknown status name)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CoverageError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result alias for coverage queries
pub type Result<T> = std::result::Result<T, CoverageError>;
