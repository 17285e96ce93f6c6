//! Catalog entry model and snapshot loading.
//!
//! A [`CatalogEntry`] is one searchable robot build. The search pipeline only
//! reads the fixed fields below; anything else the host application attaches
//! (ratings, social links, owner info) rides along untouched in [`CatalogEntry::extra`].

use crate::error::CatalogError;
use ahash::AHashSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Key in [`CatalogEntry::extra`] holding the caller-computed rating.
pub const RATING_KEY: &str = "rating";

/// One searchable catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Identifier, unique within a collection.
    pub id: String,
    /// Display name (highest search weight).
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// URL-safe identifier derived from the name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    /// Free text description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Category tags (lowest search weight, also used by the tag filter).
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Creation timestamp, only used for sorting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Pass-through fields the search pipeline does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CatalogEntry {
    /// Create an entry with only an id and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: String::new(),
            description: String::new(),
            tags: Vec::new(),
            created_at: None,
            extra: Map::new(),
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Attach a pass-through field.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Caller-supplied rating, or 0 when absent or not a number.
    pub fn rating(&self) -> f64 {
        self.extra
            .get(RATING_KEY)
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }

    /// Whether the entry carries `tag` (case-sensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Tags joined into one searchable string.
    pub fn tag_text(&self) -> String {
        self.tags.join(" ")
    }
}

/// Check the collection invariants: every id is non-empty and unique.
pub fn validate_entries(entries: &[CatalogEntry]) -> Result<(), CatalogError> {
    let mut seen: AHashSet<&str> = AHashSet::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        if entry.id.is_empty() {
            return Err(CatalogError::EmptyId { position });
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(CatalogError::DuplicateId(entry.id.clone()));
        }
    }
    Ok(())
}

/// Parse a catalog snapshot from a JSON array.
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogEntry>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load and validate a catalog snapshot from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_catalog(&content).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    validate_entries(&entries)?;

    tracing::debug!(
        "Loaded {} catalog entries from {}",
        entries.len(),
        path.display()
    );
    Ok(entries)
}
