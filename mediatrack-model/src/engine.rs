//! Progress and status mutation rules.
//!
//! Every operation works on a borrowed item in place and reports whether it
//! changed anything. Hitting a boundary is never an error: the caller just
//! gets [`Step::Unchanged`] back.

use mediatrack_types::{MediaItem, Status, StatusChangeMode, Total, ValidationError};

/// Whether a mutation touched the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Step {
    Changed,
    Unchanged,
}

impl Step {
    #[must_use]
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Advances progress by one.
///
/// Unbounded items always advance. Bounded items stop at the total, and
/// reaching it forces `Completed` whatever the prior status was.
pub fn increment(item: &mut MediaItem) -> Step {
    match item.total {
        Total::Unbounded => {
            item.current = item.current.saturating_add(1);
            Step::Changed
        }
        Total::Bounded(total) => {
            let total = total.get();
            if item.current >= total {
                return Step::Unchanged;
            }
            item.current = (item.current + 1).min(total);
            if item.current == total {
                item.status = Status::Completed;
            }
            Step::Changed
        }
    }
}

/// Steps progress back by one, stopping at zero.
///
/// A completed item stays completed.
pub fn decrement(item: &mut MediaItem) -> Step {
    if item.current == 0 {
        return Step::Unchanged;
    }
    item.current -= 1;
    Step::Changed
}

/// Overwrites the status.
pub fn set_status(item: &mut MediaItem, status: Status) -> Step {
    if item.status == status {
        return Step::Unchanged;
    }
    item.status = status;
    Step::Changed
}

/// Advances the status around [`Status::CYCLE`].
pub fn cycle_status(item: &mut MediaItem) -> Step {
    item.status = item.status.next_in_cycle();
    Step::Changed
}

/// Applies a status change under the session's single status mode.
///
/// `Select` needs an explicit status; `Cycle` refuses one.
pub fn change_status(
    item: &mut MediaItem,
    mode: StatusChangeMode,
    requested: Option<Status>,
) -> Result<Step, ValidationError> {
    match (mode, requested) {
        (StatusChangeMode::Select, Some(status)) => Ok(set_status(item, status)),
        (StatusChangeMode::Cycle, None) => Ok(cycle_status(item)),
        (mode, _) => Err(ValidationError::WrongStatusMode { mode }),
    }
}
