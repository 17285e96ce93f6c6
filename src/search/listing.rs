//! Tag filtering, sorting and truncation of result lists.

use crate::catalog::CatalogEntry;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Tag value meaning "do not filter by tag".
pub const NO_TAG_FILTER: &str = "all";

/// Ordering applied after ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Keep the incoming (relevance) order.
    #[default]
    Relevance,
    /// Most recently created first.
    Newest,
    /// Least recently created first.
    Oldest,
    /// Ascending by name.
    Name,
    /// Highest caller-supplied rating first.
    Rating,
}

impl SortMode {
    pub const ALL: [Self; 5] = [
        Self::Relevance,
        Self::Newest,
        Self::Oldest,
        Self::Name,
        Self::Rating,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Name => "name",
            Self::Rating => "rating",
        }
    }

    /// Parse a sort mode; unrecognized values fall back to [`SortMode::Relevance`].
    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(value.trim()))
            .unwrap_or_default()
    }
}

impl FromStr for SortMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for the listing pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Keep only entries carrying this tag. `None`, `""` and [`NO_TAG_FILTER`] disable the filter.
    pub tag: Option<String>,
    /// Ordering applied after ranking.
    pub sort_by: SortMode,
    /// Maximum number of results.
    pub limit: Option<usize>,
}

impl SearchOptions {
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub const fn sorted_by(mut self, sort_by: SortMode) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The tag to filter by, if filtering is active.
    pub fn active_tag(&self) -> Option<&str> {
        self.tag
            .as_deref()
            .filter(|tag| !tag.is_empty() && *tag != NO_TAG_FILTER)
    }

    /// Whether `entry` passes the tag filter.
    pub fn accepts(&self, entry: &CatalogEntry) -> bool {
        self.active_tag().is_none_or(|tag| entry.has_tag(tag))
    }
}

/// Stable in-place sort by `mode`.
pub(crate) fn sort_entries(entries: &mut [&CatalogEntry], mode: SortMode) {
    match mode {
        SortMode::Relevance => {}
        SortMode::Newest => entries.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::Oldest => entries.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortMode::Name => entries.sort_by(|a, b| a.name.cmp(&b.name)),
        SortMode::Rating => entries.sort_by(|a, b| b.rating().total_cmp(&a.rating())),
    }
}

/// Tag filter, then sort, then limit.
pub(crate) fn post_process_refs<'a>(
    entries: impl IntoIterator<Item = &'a CatalogEntry>,
    options: &SearchOptions,
) -> Vec<&'a CatalogEntry> {
    let mut kept: Vec<&CatalogEntry> = entries
        .into_iter()
        .filter(|entry| options.accepts(entry))
        .collect();
    sort_entries(&mut kept, options.sort_by);
    if let Some(limit) = options.limit {
        kept.truncate(limit);
    }
    kept
}

/// Narrow `entries` by tag, re-sort them, and cap the count.
///
/// Entries without a `createdAt` sort as the oldest; entries without a rating
/// sort as rated 0. With [`SortMode::Relevance`] the incoming order is kept.
pub fn post_process(entries: &[CatalogEntry], options: &SearchOptions) -> Vec<CatalogEntry> {
    post_process_refs(entries, options)
        .into_iter()
        .cloned()
        .collect()
}
