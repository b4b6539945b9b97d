//! Projection of the collection into the visible, sorted subset.

use mediatrack_types::{MediaItem, MediaType, ValidationError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Media-type restriction on the visible set. Spelled `"all"` or the
/// media type name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Filter {
    #[default]
    All,
    Type(MediaType),
}

impl Filter {
    #[must_use]
    pub fn matches(&self, item: &MediaItem) -> bool {
        match self {
            Self::All => true,
            Self::Type(kind) => item.media_type == *kind,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Type(kind) => write!(f, "{kind}"),
        }
    }
}

impl FromStr for Filter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(Self::All),
            other => MediaType::new(other).map(Self::Type),
        }
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.to_string()
    }
}

impl TryFrom<String> for Filter {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

/// Active filter plus search text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewQuery {
    pub filter: Filter,
    pub search: String,
}

impl ViewQuery {
    #[must_use]
    pub fn new(filter: Filter, search: impl Into<String>) -> Self {
        Self {
            filter,
            search: search.into(),
        }
    }

    /// Runs [`project`] with this query.
    #[must_use]
    pub fn apply<'a>(&self, items: &'a [MediaItem]) -> Vec<&'a MediaItem> {
        project(items, &self.filter, &self.search)
    }

    /// Text shown when the projection is empty.
    #[must_use]
    pub fn empty_message(&self) -> String {
        match &self.filter {
            Filter::All => "Add your first media to get started!".to_owned(),
            Filter::Type(kind) => format!("Add your first {kind} to get started!"),
        }
    }
}

/// Filters by type and title search, then sorts by title.
///
/// Search is a case-insensitive substring match; an empty search matches
/// everything. Equal titles keep their collection order.
#[must_use]
pub fn project<'a>(items: &'a [MediaItem], filter: &Filter, search: &str) -> Vec<&'a MediaItem> {
    let needle = search.to_lowercase();
    let mut visible: Vec<&MediaItem> = items
        .iter()
        .filter(|item| filter.matches(item))
        .filter(|item| needle.is_empty() || item.title.to_lowercase().contains(&needle))
        .collect();
    visible.sort_by(|a, b| title_order(&a.title, &b.title));
    visible
}

/// Dictionary-style title ordering.
///
/// Compares base letters case-insensitively with accents stripped, then
/// accents, then case (lower before upper). Titles that still tie are
/// ordered by code point, so only identical titles compare equal.
#[must_use]
pub fn title_order(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented(a).cmp(accented(b)))
        .then_with(|| case_flags(a).cmp(case_flags(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_flags(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd().map(char::is_uppercase)
}
