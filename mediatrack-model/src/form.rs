//! Turning raw add/edit form input into items.

use mediatrack_types::{ItemId, MediaItem, MediaType, Status, Total, ValidationError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What a blank or unparseable total field means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingTotal {
    /// No known endpoint.
    #[default]
    Unbounded,
    /// Legacy behavior: fall back to a total of one.
    One,
}

impl MissingTotal {
    fn resolve(self) -> Total {
        match self {
            Self::Unbounded => Total::Unbounded,
            Self::One => Total::from_count(1),
        }
    }
}

/// Raw field values as typed by the user. Absent fields read as blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemForm {
    pub title: String,
    pub media_type: String,
    pub status: String,
    pub current: String,
    pub total: String,
}

impl ItemForm {
    /// Prefills the form from an existing item for editing.
    #[must_use]
    pub fn from_item(item: &MediaItem) -> Self {
        Self {
            title: item.title.clone(),
            media_type: item.media_type.to_string(),
            status: item.status.to_string(),
            current: item.current.to_string(),
            total: item.total.get().map(|n| n.to_string()).unwrap_or_default(),
        }
    }
}

/// A validated form, not yet bound to an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub title: String,
    pub media_type: MediaType,
    pub status: Status,
    pub current: u32,
    pub total: Total,
}

impl ItemDraft {
    /// Binds the draft to an id: a fresh one on add, the edited one on edit.
    #[must_use]
    pub fn into_item(self, id: ItemId) -> MediaItem {
        MediaItem {
            id,
            title: self.title,
            media_type: self.media_type,
            status: self.status,
            current: self.current,
            total: self.total,
        }
    }
}

/// Validates a form.
///
/// Title and media type are required. A blank status means `plan`; an
/// unparseable current means zero; an unparseable or zero total follows
/// `missing_total`. With a bounded total, current is clamped to it.
pub fn build_from_form(
    form: &ItemForm,
    missing_total: MissingTotal,
) -> Result<ItemDraft, ValidationError> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    let media_type = MediaType::new(&form.media_type)?;
    let status = if form.status.trim().is_empty() {
        Status::default()
    } else {
        Status::from_str(&form.status)?
    };

    let total = match parse_count(&form.total) {
        Some(n) if n > 0 => Total::from_count(n),
        _ => missing_total.resolve(),
    };
    let mut current = parse_count(&form.current).unwrap_or(0);
    if let Some(bound) = total.get() {
        current = current.min(bound);
    }

    Ok(ItemDraft {
        title: title.to_owned(),
        media_type,
        status,
        current,
        total,
    })
}

fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}
