//! The session: one explicit owner for the collection and all view state.

use crate::command::{Command, Outcome};
use crate::config::TrackerConfig;
use crate::error::{TrackerError, TrackerResult};
use mediatrack_model::engine::{self, Step};
use mediatrack_model::{build_from_form, CardPatch, CardView, Filter, ItemForm, MissingTotal, ViewQuery};
use mediatrack_storage::{BlobBackend, ItemStore, LoadReport};
use mediatrack_types::{ItemId, MediaItem, Status, StatusChangeMode};
use std::str::FromStr;
use tracing::{debug, info};

/// Owns the item store plus the filter, search text, and the items
/// currently being edited or awaiting delete confirmation.
#[derive(Debug)]
pub struct Tracker<B> {
    store: ItemStore<B>,
    query: ViewQuery,
    editing: Option<ItemId>,
    pending_delete: Option<ItemId>,
    status_mode: StatusChangeMode,
    missing_total: MissingTotal,
}

impl<B: BlobBackend> Tracker<B> {
    /// Loads the collection from `backend` and starts a session.
    pub fn open(backend: B, config: &TrackerConfig) -> TrackerResult<(Self, LoadReport)> {
        let (store, report) = ItemStore::load(backend, config.storage_key.as_str())?;
        info!(
            items = store.len(),
            status_mode = %config.status_mode,
            "Session opened"
        );
        Ok((Self::with_store(store, config), report))
    }

    /// Starts a session over an already loaded store.
    pub fn with_store(store: ItemStore<B>, config: &TrackerConfig) -> Self {
        Self {
            store,
            query: ViewQuery::default(),
            editing: None,
            pending_delete: None,
            status_mode: config.status_mode,
            missing_total: config.missing_total,
        }
    }

    pub fn store(&self) -> &ItemStore<B> {
        &self.store
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn status_mode(&self) -> StatusChangeMode {
        self.status_mode
    }

    pub fn editing(&self) -> Option<&ItemId> {
        self.editing.as_ref()
    }

    /// The add/edit form prefilled with the item being edited.
    pub fn editing_form(&self) -> Option<ItemForm> {
        self.editing
            .as_ref()
            .and_then(|id| self.store.get(id))
            .map(ItemForm::from_item)
    }

    pub fn pending_delete(&self) -> Option<&ItemId> {
        self.pending_delete.as_ref()
    }

    /// Items passing the active filter and search, sorted by title.
    pub fn visible(&self) -> Vec<&MediaItem> {
        self.query.apply(self.store.items())
    }

    /// Cards for [`Tracker::visible`].
    pub fn view(&self) -> Vec<CardView> {
        self.visible().into_iter().map(CardView::from_item).collect()
    }

    /// Interprets one intent.
    ///
    /// Unknown ids and boundary hits come back as [`Outcome::Unchanged`].
    pub fn dispatch(&mut self, command: Command) -> TrackerResult<Outcome> {
        debug!(?command, "Dispatching");
        match command {
            Command::SetFilter(filter) => Ok(self.set_filter(filter)),
            Command::SetSearch(search) => Ok(self.set_search(search)),
            Command::Add(form) => self.add(&form),
            Command::BeginEdit(id) => Ok(self.begin_edit(id)),
            Command::SubmitEdit(form) => self.submit_edit(&form),
            Command::CancelEdit => {
                self.editing = None;
                Ok(Outcome::Unchanged)
            }
            Command::Increment(id) => self.patch(&id, engine::increment),
            Command::Decrement(id) => self.patch(&id, engine::decrement),
            Command::SetStatus { id, status } => {
                let status = Status::from_str(&status)?;
                self.change_status(&id, Some(status))
            }
            Command::CycleStatus(id) => self.change_status(&id, None),
            Command::RequestDelete(id) => {
                self.pending_delete = self.store.contains(&id).then_some(id);
                Ok(Outcome::Unchanged)
            }
            Command::ConfirmDelete => self.confirm_delete(),
            Command::CancelDelete => {
                self.pending_delete = None;
                Ok(Outcome::Unchanged)
            }
        }
    }

    fn set_filter(&mut self, filter: Filter) -> Outcome {
        if self.query.filter == filter {
            return Outcome::Unchanged;
        }
        self.query.filter = filter;
        Outcome::Rerender
    }

    fn set_search(&mut self, search: String) -> Outcome {
        if self.query.search == search {
            return Outcome::Unchanged;
        }
        self.query.search = search;
        Outcome::Rerender
    }

    fn add(&mut self, form: &ItemForm) -> TrackerResult<Outcome> {
        let item = build_from_form(form, self.missing_total)?.into_item(ItemId::new());
        let id = item.id.clone();
        self.store.add(item)?;
        info!(item_id = %id, "Item added");
        Ok(Outcome::Created(id))
    }

    fn begin_edit(&mut self, id: ItemId) -> Outcome {
        self.editing = self.store.contains(&id).then_some(id);
        Outcome::Unchanged
    }

    fn submit_edit(&mut self, form: &ItemForm) -> TrackerResult<Outcome> {
        if self.editing.is_none() {
            return Err(TrackerError::NoEditInProgress);
        }
        // Validation failures leave the edit open.
        let draft = build_from_form(form, self.missing_total)?;
        let Some(id) = self.editing.take() else {
            return Err(TrackerError::NoEditInProgress);
        };
        let replaced = self.store.replace(&id, draft.into_item(id.clone()))?;
        if replaced {
            info!(item_id = %id, "Item edited");
            Ok(Outcome::Rerender)
        } else {
            Ok(Outcome::Unchanged)
        }
    }

    fn confirm_delete(&mut self) -> TrackerResult<Outcome> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(Outcome::Unchanged);
        };
        if self.editing.as_ref() == Some(&id) {
            self.editing = None;
        }
        if self.store.remove(&id)? {
            info!(item_id = %id, "Item deleted");
            Ok(Outcome::Rerender)
        } else {
            Ok(Outcome::Unchanged)
        }
    }

    fn change_status(&mut self, id: &ItemId, requested: Option<Status>) -> TrackerResult<Outcome> {
        let mode = self.status_mode;
        let mut result = Ok(Step::Unchanged);
        let outcome = self.patch(id, |item| {
            result = engine::change_status(item, mode, requested);
            match &result {
                Ok(step) => *step,
                Err(_) => Step::Unchanged,
            }
        });
        if let Err(e) = result {
            return Err(e.into());
        }
        outcome
    }

    /// Runs a single-item engine operation and returns the card patch.
    fn patch<F>(&mut self, id: &ItemId, op: F) -> TrackerResult<Outcome>
    where
        F: FnOnce(&mut MediaItem) -> Step,
    {
        let changed = self.store.update(id, |item| op(item).is_changed())?;
        match (changed, self.store.get(id)) {
            (Some(true), Some(item)) => Ok(Outcome::Patch(CardPatch::from_item(item))),
            _ => Ok(Outcome::Unchanged),
        }
    }
}
