//! Intents emitted by the presentation layer, and what the session answers.

use mediatrack_model::{CardPatch, Filter, ItemForm};
use mediatrack_types::ItemId;
use serde::{Deserialize, Serialize};

/// A user intent. The session interprets it; the presentation layer never
/// touches items directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", content = "data", rename_all = "snake_case")]
pub enum Command {
    SetFilter(Filter),
    SetSearch(String),
    Add(ItemForm),
    BeginEdit(ItemId),
    SubmitEdit(ItemForm),
    CancelEdit,
    Increment(ItemId),
    Decrement(ItemId),
    /// Dropdown mode: set a status by its on-disk name.
    SetStatus { id: ItemId, status: String },
    /// Click mode: advance the status ring.
    CycleStatus(ItemId),
    RequestDelete(ItemId),
    ConfirmDelete,
    CancelDelete,
}

/// How the presentation layer should bring its view up to date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "data", rename_all = "snake_case")]
pub enum Outcome {
    /// One card changed; patch it in place.
    Patch(CardPatch),
    /// A new item was added; re-project the view.
    Created(ItemId),
    /// Membership or order may have changed; re-project the view.
    Rerender,
    /// Nothing visible changed.
    Unchanged,
}

impl Outcome {
    #[must_use]
    pub fn needs_rerender(&self) -> bool {
        matches!(self, Self::Created(_) | Self::Rerender)
    }
}
