//! Core type definitions for MediaTrack.
//!
//! This crate defines the data model every other crate works against:
//! - Item identifiers (UUID v7 strings, legacy ids kept verbatim)
//! - [`MediaItem`] with its [`MediaType`], [`Status`] and [`Total`]
//! - The status change policy shared by the engine and the session
//!
//! Mutation rules live in `mediatrack-model`; persistence in
//! `mediatrack-storage`.

mod ids;
mod item;
mod status;

pub use ids::ItemId;
pub use item::{MediaItem, MediaType, Total};
pub use status::{Status, StatusChangeMode};

/// Result type alias using the crate's error type.
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Input rejected before it can reach the collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("media type must not be empty")]
    EmptyMediaType,

    #[error("unknown status: {0:?}")]
    UnknownStatus(String),

    #[error("unknown status change mode: {0:?}")]
    UnknownStatusMode(String),

    #[error("status change not allowed in {mode} mode")]
    WrongStatusMode { mode: StatusChangeMode },
}
