//! The owned item collection and its persistence round-trip.

use crate::backend::BlobBackend;
use crate::error::{StorageError, StorageResult};
use mediatrack_types::{ItemId, MediaItem, Status};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Blob key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "mediaTrackerData";

/// How [`ItemStore::load`] arrived at its collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadReport {
    /// The blob parsed as an array; `count` items were kept.
    Loaded { count: usize },
    /// No blob existed, so the collection was seeded with one example item.
    Seeded,
    /// The blob was not a JSON array and the collection was reset to empty.
    Recovered { reason: String },
}

/// In-memory ordered collection, kept in sync with one durable blob.
///
/// Every successful mutation is followed by a full write of the collection.
/// If that write fails the mutation still stands in memory and the error is
/// returned to the caller.
#[derive(Debug)]
pub struct ItemStore<B> {
    backend: B,
    key: String,
    items: Vec<MediaItem>,
}

impl<B: BlobBackend> ItemStore<B> {
    /// Loads the collection stored under `key`.
    ///
    /// A missing blob seeds the example item and persists it. A blob that is
    /// not a JSON array yields an empty collection; inside an array, bad
    /// records are repaired or dropped individually. Only a failure to read
    /// the backend at all is returned as an error.
    pub fn load(backend: B, key: impl Into<String>) -> StorageResult<(Self, LoadReport)> {
        let key = key.into();
        let raw = backend.read(&key)?;
        let mut store = Self {
            backend,
            key,
            items: Vec::new(),
        };

        let report = match raw {
            None => {
                store.items.push(MediaItem::seed());
                if let Err(e) = store.persist() {
                    warn!(key = %store.key, error = %e, "Failed to persist seed collection");
                }
                info!(key = %store.key, "No stored collection, seeded example item");
                LoadReport::Seeded
            }
            Some(raw) => match serde_json::from_str::<Vec<Value>>(&raw) {
                Ok(records) => {
                    store.items = sanitize(records);
                    debug!(key = %store.key, count = store.items.len(), "Collection loaded");
                    LoadReport::Loaded {
                        count: store.items.len(),
                    }
                }
                Err(e) => {
                    warn!(key = %store.key, error = %e, "Stored collection is corrupt, starting empty");
                    LoadReport::Recovered {
                        reason: e.to_string(),
                    }
                }
            },
        };

        Ok((store, report))
    }

    /// Writes the whole collection to the backend.
    pub fn persist(&mut self) -> StorageResult<()> {
        let json = serde_json::to_string(&self.items)?;
        self.backend.write(&self.key, &json)
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Appends an item. Its id must not already be present.
    pub fn add(&mut self, item: MediaItem) -> StorageResult<()> {
        if self.contains(&item.id) {
            return Err(StorageError::DuplicateId(item.id.to_string()));
        }
        debug!(item_id = %item.id, title = %item.title, "Adding item");
        self.items.push(item);
        self.persist()
    }

    /// Replaces the item with `id`, keeping its position and id.
    ///
    /// Returns `false` without writing when no such item exists.
    pub fn replace(&mut self, id: &ItemId, mut item: MediaItem) -> StorageResult<bool> {
        let Some(slot) = self.items.iter_mut().find(|existing| existing.id == *id) else {
            debug!(item_id = %id, "Replace skipped, unknown id");
            return Ok(false);
        };
        item.id = id.clone();
        *slot = item;
        self.persist()?;
        Ok(true)
    }

    /// Removes the item with `id`.
    ///
    /// Returns `false` without writing when no such item exists.
    pub fn remove(&mut self, id: &ItemId) -> StorageResult<bool> {
        let before = self.items.len();
        self.items.retain(|item| item.id != *id);
        if self.items.len() == before {
            debug!(item_id = %id, "Remove skipped, unknown id");
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Mutates one item in place.
    ///
    /// `mutate` reports whether it changed anything; the collection is only
    /// written when it did. Returns `None` for an unknown id. The item's id
    /// cannot be changed this way.
    pub fn update<F>(&mut self, id: &ItemId, mutate: F) -> StorageResult<Option<bool>>
    where
        F: FnOnce(&mut MediaItem) -> bool,
    {
        let Some(item) = self.items.iter_mut().find(|item| item.id == *id) else {
            return Ok(None);
        };
        let changed = mutate(item);
        item.id = id.clone();
        if changed {
            self.persist()?;
        }
        Ok(Some(changed))
    }
}

/// Decodes records one by one and restores the collection invariants.
///
/// Unknown statuses read as plan. Records that still fail to decode are
/// dropped, as are repeated ids (first wins). Progress past a bounded
/// total is clamped to it.
fn sanitize(records: Vec<Value>) -> Vec<MediaItem> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| decode_record(index, record))
        .filter(|item| {
            let fresh = seen.insert(item.id.clone());
            if !fresh {
                warn!(item_id = %item.id, "Dropping item with duplicate id");
            }
            fresh
        })
        .map(clamp_progress)
        .collect()
}

fn decode_record(index: usize, mut record: Value) -> Option<MediaItem> {
    if let Some(fields) = record.as_object_mut() {
        let known = fields
            .get("status")
            .cloned()
            .is_some_and(|status| serde_json::from_value::<Status>(status).is_ok());
        if !known {
            warn!(index, status = ?fields.get("status"), "Unknown status, reading as plan");
            fields.insert("status".to_owned(), Value::from(Status::Plan.as_str()));
        }
    }
    match serde_json::from_value(record) {
        Ok(item) => Some(item),
        Err(e) => {
            warn!(index, error = %e, "Dropping unreadable item");
            None
        }
    }
}

fn clamp_progress(mut item: MediaItem) -> MediaItem {
    if let Some(total) = item.total.get().filter(|total| item.current > *total) {
        warn!(item_id = %item.id, current = item.current, total, "Clamping progress to total");
        item.current = total;
    }
    item
}
