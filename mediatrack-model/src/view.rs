//! Display data derived from an item.
//!
//! A [`CardView`] is everything a renderer needs for one card. After a
//! progress or status change only the [`CardPatch`] subset moves, so a
//! renderer can update that one card in place.

use mediatrack_types::{ItemId, MediaItem, MediaType, Status};
use serde::Serialize;

/// Human label for a status; plan/reading read differently for anime.
#[must_use]
pub fn status_label(status: Status, media_type: &MediaType) -> &'static str {
    let watched = media_type.is_watched();
    match status {
        Status::Plan if watched => "Plan to Watch",
        Status::Plan => "Plan to Read",
        Status::Reading if watched => "Watching",
        Status::Reading => "Reading",
        Status::Completed => "Completed",
        Status::OnHold => "On Hold",
        Status::Dropped => "Dropped",
    }
}

/// Label for the total field of the add/edit form.
#[must_use]
pub fn total_label(media_type: &MediaType) -> &'static str {
    if media_type.is_watched() {
        "Total Episodes"
    } else {
        "Total Chapters"
    }
}

/// Media type with its first letter upper-cased.
#[must_use]
pub fn type_badge(media_type: &MediaType) -> String {
    let mut chars = media_type.as_str().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Completion percentage, capped at 100. Unbounded items report zero.
#[must_use]
pub fn percentage(item: &MediaItem) -> u8 {
    match item.total.get() {
        Some(total) => {
            let pct = (f64::from(item.current) / f64::from(total) * 100.0).round();
            pct.min(100.0) as u8
        }
        None => 0,
    }
}

/// The part of a card that changes on a single-item progress or status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardPatch {
    pub id: ItemId,
    pub progress_text: String,
    pub percentage: u8,
    pub can_increment: bool,
    pub can_decrement: bool,
    pub status: Status,
    pub status_label: &'static str,
}

impl CardPatch {
    #[must_use]
    pub fn from_item(item: &MediaItem) -> Self {
        Self {
            id: item.id.clone(),
            progress_text: format!("{} / {}", item.current, item.total),
            percentage: percentage(item),
            can_increment: !item.is_at_bound(),
            can_decrement: item.current > 0,
            status: item.status,
            status_label: status_label(item.status, &item.media_type),
        }
    }
}

/// A fully rendered card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub title: String,
    pub type_badge: String,
    #[serde(flatten)]
    pub patch: CardPatch,
}

impl CardView {
    #[must_use]
    pub fn from_item(item: &MediaItem) -> Self {
        Self {
            title: item.title.clone(),
            type_badge: type_badge(&item.media_type),
            patch: CardPatch::from_item(item),
        }
    }

    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.patch.id
    }

    /// Applies a patch for the same item.
    pub fn apply(&mut self, patch: CardPatch) {
        debug_assert_eq!(self.patch.id, patch.id);
        self.patch = patch;
    }
}
