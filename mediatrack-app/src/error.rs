//! Error types for the session layer.

use mediatrack_storage::StorageError;
use mediatrack_types::ValidationError;
use thiserror::Error;

/// Result type for session operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Errors surfaced to the presentation layer.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Input rejected; nothing was changed.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The change is applied in memory but could not be written.
    #[error("could not save: {0}")]
    Storage(#[from] StorageError),

    /// An edit was submitted without one being started.
    #[error("no edit in progress")]
    NoEditInProgress,

    /// Reading intents or writing replies failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file unreadable or malformed.
    #[error("config error: {0}")]
    Config(String),
}
