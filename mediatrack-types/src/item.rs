//! The tracked item and its field types.

use crate::{ItemId, Status, ValidationError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::NonZeroU32;

/// Kind of media. An open set: anything non-empty is accepted, the well-known
/// kinds just get constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MediaType(String);

impl MediaType {
    /// Creates a media type, rejecting blank input.
    pub fn new(kind: impl AsRef<str>) -> Result<Self, ValidationError> {
        let kind = kind.as_ref().trim();
        if kind.is_empty() {
            return Err(ValidationError::EmptyMediaType);
        }
        Ok(Self(kind.to_owned()))
    }

    pub fn anime() -> Self {
        Self("anime".into())
    }

    pub fn manga() -> Self {
        Self("manga".into())
    }

    pub fn manhwa() -> Self {
        Self("manhwa".into())
    }

    pub fn novel() -> Self {
        Self("novel".into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Anime is watched; everything else is read.
    #[must_use]
    pub fn is_watched(&self) -> bool {
        self.0 == "anime"
    }
}

impl TryFrom<String> for MediaType {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<MediaType> for String {
    fn from(kind: MediaType) -> Self {
        kind.0
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Upper bound for an item's progress counter.
///
/// On disk a bounded total is a positive number; `null`, `0` or a missing
/// field all mean unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Total {
    /// A known number of episodes or chapters.
    Bounded(NonZeroU32),
    /// No known endpoint; progress can grow forever.
    #[default]
    Unbounded,
}

impl Total {
    /// Builds a total from a raw count, treating zero as unbounded.
    #[must_use]
    pub fn from_count(count: u32) -> Self {
        NonZeroU32::new(count).map_or(Self::Unbounded, Self::Bounded)
    }

    /// Returns the bound, if any.
    #[must_use]
    pub fn get(&self) -> Option<u32> {
        match self {
            Self::Bounded(n) => Some(n.get()),
            Self::Unbounded => None,
        }
    }

    #[must_use]
    pub fn is_bounded(&self) -> bool {
        matches!(self, Self::Bounded(_))
    }
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(n) => write!(f, "{n}"),
            Self::Unbounded => f.write_str("-"),
        }
    }
}

impl Serialize for Total {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bounded(n) => serializer.serialize_u32(n.get()),
            Self::Unbounded => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Total {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<i64>::deserialize(deserializer)?;
        Ok(match raw {
            Some(n) if n > 0 => Self::from_count(u32::try_from(n).unwrap_or(u32::MAX)),
            _ => Self::Unbounded,
        })
    }
}

/// A single tracked media entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: ItemId,
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub status: Status,
    pub current: u32,
    #[serde(default)]
    pub total: Total,
}

impl MediaItem {
    /// Creates an item with no progress yet.
    #[must_use]
    pub fn new(title: impl Into<String>, media_type: MediaType, total: Total) -> Self {
        Self {
            id: ItemId::new(),
            title: title.into(),
            media_type,
            status: Status::Plan,
            current: 0,
            total,
        }
    }

    /// The item a fresh collection starts with.
    #[must_use]
    pub fn seed() -> Self {
        Self::new(
            "Solo Leveling",
            MediaType::manhwa(),
            Total::from_count(202),
        )
    }

    /// Returns true when the total is bounded and progress has reached it.
    #[must_use]
    pub fn is_at_bound(&self) -> bool {
        self.total.get().is_some_and(|total| self.current >= total)
    }

    /// Episodes or chapters left, if the total is known.
    #[must_use]
    pub fn remaining(&self) -> Option<u32> {
        self.total.get().map(|total| total.saturating_sub(self.current))
    }
}
