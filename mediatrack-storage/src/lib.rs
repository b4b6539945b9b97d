//! Local storage layer for MediaTrack.
//!
//! The whole collection lives in one JSON blob under a fixed key.
//!
//! # Architecture
//!
//! - [`BlobBackend`] abstracts the key-value medium; [`FileBackend`] writes
//!   atomically to disk, [`MemoryBackend`] keeps everything in memory
//! - [`ItemStore`] owns the items and rewrites the blob after every mutation
//! - Loading never fails on bad data: a corrupt blob resets to empty

mod backend;
mod error;
mod item_store;

pub use backend::{BlobBackend, FileBackend, MemoryBackend};
pub use error::{StorageError, StorageResult};
pub use item_store::{ItemStore, LoadReport, DEFAULT_STORAGE_KEY};
