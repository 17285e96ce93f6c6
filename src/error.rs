//! Error handling types and utilities.
//!
//! The search pipeline itself is total and never fails; errors only arise at
//! the edges where catalogs and configuration are read from disk.

use std::path::PathBuf;

/// A specialized Result type for robot-catalog-search operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods in the binary.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading or validating a catalog snapshot fails.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The catalog file is not a JSON array of entries.
    #[error("failed to parse catalog at {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// An entry has an empty `id`.
    #[error("catalog entry at position {position} has an empty id")]
    EmptyId { position: usize },
    /// Two entries share the same `id`.
    #[error("duplicate catalog entry id '{0}'")]
    DuplicateId(String),
}

/// Error returned when loading search configuration fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML for [`crate::SearchConfig`].
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// A configuration value is out of range.
    #[error("invalid search config: {0}")]
    Invalid(String),
}
