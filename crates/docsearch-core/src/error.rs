//! Error types for docsearch.

use thiserror::Error;

/// Result type alias using DocsError.
pub type Result<T> = std::result::Result<T, DocsError>;

/// Errors raised around the ranker.
///
/// The ranker itself never fails: a query that matches nothing is an empty
/// result list, not an error.
#[derive(Error, Debug)]
pub enum DocsError {
    /// The document index could not be read.
    #[error("Index unavailable at {path}: {reason}")]
    IndexUnavailable { path: String, reason: String },

    /// The document index was read but its contents are inconsistent.
    #[error("Invalid index: {message}")]
    InvalidIndex { message: String },

    /// Invalid argument provided.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl DocsError {
    /// Create an index unavailable error.
    pub fn index_unavailable(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::IndexUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid index error.
    pub fn invalid_index(message: impl Into<String>) -> Self {
        Self::InvalidIndex {
            message: message.into(),
        }
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Get the stable error code shown to callers.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::IndexUnavailable { .. } => "INDEX_UNAVAILABLE",
            Self::InvalidIndex { .. } => "INVALID_INDEX",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Config { .. } => "CONFIG_ERROR",
        }
    }
}
