//! Error types for the tally library
//!
//! A single error enum covers the library surface, using thiserror for
//! ergonomic definitions. The binary wraps these in `anyhow` at the top
//! level.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// A candidate transaction failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Persistence layer failures
    #[error("Storage error: {0}")]
    Storage(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Import errors (unreadable or unparsable input)
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TallyError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type TallyResult<T> = Result<T, TallyError>;
