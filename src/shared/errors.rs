//! Error handling with the HistoryError enum.
//!
//! Fallible internals return [`HistoryResult`] and propagate with `?`. The
//! store's public surface swallows these per the capture policy: a failed
//! persist or payload decode is a logged no-op, never a crash.

use thiserror::Error;

/// Engine errors
#[derive(Error, Debug, Clone)]
pub enum HistoryError {
    /// Storage backend error (database open, read or write)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Entry list (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Pasteboard read or write error
    #[error("Pasteboard error: {0}")]
    Pasteboard(String),

    /// System I/O error (settings files, data directories)
    #[error("System I/O error: {0}")]
    SystemIO(String),
}

impl From<std::io::Error> for HistoryError {
    fn from(err: std::io::Error) -> Self {
        HistoryError::SystemIO(err.to_string())
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(err: serde_json::Error) -> Self {
        HistoryError::Serialization(err.to_string())
    }
}

/// Helper type alias for engine results
pub type HistoryResult<T> = Result<T, HistoryError>;
