//! MediaTrack session layer.
//!
//! [`Tracker`] is the single owner of the collection and of the view state
//! (filter, search, edit and delete targets). A presentation layer sends it
//! [`Command`]s and gets back an [`Outcome`] telling it whether to patch one
//! card or re-project the whole list.

mod batch;
mod command;
mod config;
mod error;
mod tracker;

pub use batch::{run_batch, BatchSummary};
pub use command::{Command, Outcome};
pub use config::TrackerConfig;
pub use error::{TrackerError, TrackerResult};
pub use tracker::Tracker;
