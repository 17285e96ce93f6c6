//! Search tuning parameters.
//!
//! Field weights and the similarity threshold are free parameters calibrated
//! against the catalog's example queries. They can be overridden from a TOML
//! file, for example:
//!
//! ```toml
//! threshold = 0.88
//!
//! [weights]
//! name = 1.0
//! description = 0.4
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default number of results for the type-ahead widget.
pub const DEFAULT_TYPEAHEAD_LIMIT: usize = 8;

/// Default number of results for the listing page.
pub const DEFAULT_LISTING_LIMIT: usize = 50;

/// Default number of prebuilt indexes kept by [`crate::IndexCache`].
pub const DEFAULT_CACHE_CAPACITY: usize = 16;

/// Relative weight of each searchable field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldWeights {
    pub name: f64,
    pub slug: f64,
    pub description: f64,
    pub tags: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            name: 1.0,
            slug: 0.8,
            description: 0.5,
            tags: 0.4,
        }
    }
}

impl FieldWeights {
    fn as_array(self) -> [(&'static str, f64); 4] {
        [
            ("name", self.name),
            ("slug", self.slug),
            ("description", self.description),
            ("tags", self.tags),
        ]
    }
}

/// Tuning parameters for scoring and result limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Per-field weights.
    pub weights: FieldWeights,
    /// Minimum approximate similarity (0..=1) for a field to count as a match.
    pub threshold: f64,
    /// Multiplier applied to approximate similarities so they always rank
    /// below literal substring matches.
    pub fuzzy_scale: f64,
    /// Share of each non-best matching field added to the entry's relevance.
    pub secondary_field_factor: f64,
    /// Bonus for entries whose name or slug contains a digit run from the query.
    pub number_bonus: f64,
    /// Queries shorter than this (after strict normalization) only match literally.
    pub min_fuzzy_query_len: usize,
    /// Default limit for type-ahead searches.
    pub typeahead_limit: usize,
    /// Default limit for listing searches.
    pub listing_limit: usize,
    /// Number of prebuilt indexes the index cache keeps.
    pub cache_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weights: FieldWeights::default(),
            threshold: 0.85,
            fuzzy_scale: 0.7,
            secondary_field_factor: 0.1,
            number_bonus: 0.05,
            min_fuzzy_query_len: 3,
            typeahead_limit: DEFAULT_TYPEAHEAD_LIMIT,
            listing_limit: DEFAULT_LISTING_LIMIT,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl SearchConfig {
    /// Parse a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        tracing::debug!("Loaded search config from {}", path.display());
        Ok(config)
    }

    /// Load the config at `path`, or the per-user default file if it exists,
    /// or fall back to built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Reject out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, weight) in self.weights.as_array() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "weight for '{}' must be a non-negative number, got {}",
                    field, weight
                )));
            }
        }

        for (name, value) in [
            ("threshold", self.threshold),
            ("fuzzy_scale", self.fuzzy_scale),
            ("secondary_field_factor", self.secondary_field_factor),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be within 0..=1, got {}",
                    name, value
                )));
            }
        }

        if !self.number_bonus.is_finite() || self.number_bonus < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "number_bonus must be a non-negative number, got {}",
                self.number_bonus
            )));
        }

        for (name, value) in [
            ("typeahead_limit", self.typeahead_limit),
            ("listing_limit", self.listing_limit),
            ("cache_capacity", self.cache_capacity),
        ] {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{} must be positive", name)));
            }
        }

        Ok(())
    }
}

/// `<config dir>/robot-catalog/search.toml`, if a config dir exists on this platform.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("robot-catalog").join("search.toml"))
}
