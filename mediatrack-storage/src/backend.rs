//! Durable key-value blob backends.

use crate::error::{StorageError, StorageResult};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A named-blob store: one string value per key, replaced whole on write.
pub trait BlobBackend {
    /// Reads a blob. `Ok(None)` means the key was never written.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replaces a blob. Either the new value lands whole or the old one stays.
    fn write(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a temp file in the same directory which is synced and then
/// renamed over the target, so a crash never leaves a half-written blob.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Uses `dir` for blobs. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobBackend for FileBackend {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.dir)?;
        let target = self.path_for(key);

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&target).map_err(|e| StorageError::Io(e.error))?;

        debug!(path = %target.display(), bytes = value.len(), "Blob written");
        Ok(())
    }
}

/// Keeps blobs in memory. Used by tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    blobs: HashMap<String, String>,
    reject_writes: Option<String>,
    writes: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `value` already stored under `key`.
    pub fn with_blob(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut backend = Self::default();
        backend.blobs.insert(key.into(), value.into());
        backend
    }

    /// Makes every following write fail with `reason`, or succeed again on `None`.
    pub fn reject_writes(&mut self, reason: Option<&str>) {
        self.reject_writes = reason.map(str::to_owned);
    }

    /// Current raw value under `key`.
    pub fn blob(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl BlobBackend for MemoryBackend {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        if let Some(reason) = &self.reject_writes {
            return Err(StorageError::WriteRejected {
                key: key.to_owned(),
                reason: reason.clone(),
            });
        }
        self.blobs.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}
