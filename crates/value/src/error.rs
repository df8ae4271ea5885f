//! Errors raised while building or addressing parameter trees.

use thiserror::Error;

/// Errors for tree construction and path handling.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Input had the wrong shape for the requested conversion.
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: String,
    },

    /// A path string could not be parsed.
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },
}

impl ValueError {
    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: &'static str, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected,
            actual: actual.into(),
        }
    }

    /// Creates an invalid path error.
    pub fn invalid_path(path: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason,
        }
    }
}

/// Result alias for tree operations.
pub type ValueResult<T> = Result<T, ValueError>;
