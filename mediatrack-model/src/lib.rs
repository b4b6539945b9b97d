//! Item rules for MediaTrack.
//!
//! Defines how items change and how they are shown:
//! - [`engine`]: progress increment/decrement, status set/cycle, auto-completion
//! - [`ItemForm`] / [`build_from_form`]: add/edit input validation
//! - [`project`] / [`ViewQuery`]: filter + search + title sort
//! - [`CardView`] / [`CardPatch`]: derived display data for full and single-card rendering
//!
//! Nothing here performs I/O; persistence is `mediatrack-storage`'s job.

pub mod engine;
mod form;
mod query;
mod view;

pub use engine::Step;
pub use form::{build_from_form, ItemDraft, ItemForm, MissingTotal};
pub use query::{project, title_order, Filter, ViewQuery};
pub use view::{percentage, status_label, total_label, type_badge, CardPatch, CardView};
