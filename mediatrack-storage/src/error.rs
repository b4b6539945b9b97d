//! Error types for the storage layer.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend refused the write (quota exceeded, read-only media).
    #[error("write rejected for key {key}: {reason}")]
    WriteRejected { key: String, reason: String },

    /// An item with this id is already stored.
    #[error("duplicate item id: {0}")]
    DuplicateId(String),
}
