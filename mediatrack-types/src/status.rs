//! Consumption status of an item, and the policy for changing it.

use crate::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the user is with an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Planned, not started.
    #[default]
    Plan,
    /// Currently watching or reading.
    Reading,
    /// Finished.
    Completed,
    /// Paused.
    OnHold,
    /// Abandoned.
    Dropped,
}

impl Status {
    /// All statuses, in dropdown order.
    pub const ALL: [Status; 5] = [
        Self::Plan,
        Self::Reading,
        Self::Completed,
        Self::OnHold,
        Self::Dropped,
    ];

    /// Click-to-cycle ring order. Note `OnHold` precedes `Completed` here.
    pub const CYCLE: [Status; 5] = [
        Self::Plan,
        Self::Reading,
        Self::OnHold,
        Self::Completed,
        Self::Dropped,
    ];

    /// The on-disk spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plan => "plan",
            Self::Reading => "reading",
            Self::Completed => "completed",
            Self::OnHold => "on-hold",
            Self::Dropped => "dropped",
        }
    }

    /// The next status in the cycle ring, wrapping after `Dropped`.
    #[must_use]
    pub fn next_in_cycle(&self) -> Self {
        let pos = Self::CYCLE
            .iter()
            .position(|s| s == self)
            .unwrap_or_default();
        Self::CYCLE[(pos + 1) % Self::CYCLE.len()]
    }

    /// Returns true for the terminal `Completed` status.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| ValidationError::UnknownStatus(s.to_owned()))
    }
}

/// How the presentation layer changes an item's status.
///
/// Exactly one mode is active per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusChangeMode {
    /// Pick any status from a dropdown.
    #[default]
    Select,
    /// Click to advance through [`Status::CYCLE`].
    Cycle,
}

impl fmt::Display for StatusChangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select => f.write_str("select"),
            Self::Cycle => f.write_str("cycle"),
        }
    }
}

impl FromStr for StatusChangeMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "select" => Ok(Self::Select),
            "cycle" => Ok(Self::Cycle),
            other => Err(ValidationError::UnknownStatusMode(other.to_owned())),
        }
    }
}
