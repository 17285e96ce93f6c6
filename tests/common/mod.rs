//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `scenario_catalog`: the five-robot catalog most ranking tests run against
//! - `temp_catalog`: the same catalog written to a JSON file in a temp directory
//!
//! [`TempWorkspace`] provides a temp directory for tests that load catalogs or
//! config files from disk.

use chrono::{TimeZone, Utc};
use robot_catalog_search::CatalogEntry;
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory that is removed when dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given content and returns its full path.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
        full_path
    }

    /// Serializes `entries` as a JSON array into `path`.
    pub fn write_catalog(&self, path: &str, entries: &[CatalogEntry]) -> PathBuf {
        let json = serde_json::to_string_pretty(entries).expect("Failed to serialize catalog");
        self.create_file(path, &json)
    }
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// A catalog snapshot on disk, kept alive with its temp directory.
#[allow(dead_code)]
pub struct TempCatalog {
    pub workspace: TempWorkspace,
    pub path: PathBuf,
    pub entries: Vec<CatalogEntry>,
}

/// SO-100/SO-101 arms, Pupper v3, LeKiwi and Amazing Hand, with timestamps
/// and ratings for the sort modes.
#[fixture]
pub fn scenario_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("so-100", "SO-100")
            .with_slug("so-100")
            .with_description("Industrial arm with six joints")
            .with_tags(["industrial", "arm"])
            .with_created_at(Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap())
            .with_extra("rating", 4.1),
        CatalogEntry::new("so-101", "SO-101")
            .with_slug("so-101")
            .with_description("Industrial arm, second revision")
            .with_tags(["industrial", "arm"])
            .with_created_at(Utc.with_ymd_and_hms(2025, 1, 20, 9, 30, 0).unwrap())
            .with_extra("rating", 4.6),
        CatalogEntry::new("pupper-v3", "Pupper v3")
            .with_slug("pupper-v3")
            .with_description("Open quadruped kit")
            .with_tags(["quadruped", "education"])
            .with_created_at(Utc.with_ymd_and_hms(2023, 9, 1, 8, 0, 0).unwrap())
            .with_extra("rating", 4.8),
        CatalogEntry::new("lekiwi", "LeKiwi")
            .with_slug("lekiwi")
            .with_description("Mobile base carrying an arm")
            .with_tags(["mobile", "educational"])
            .with_created_at(Utc.with_ymd_and_hms(2024, 11, 3, 17, 45, 0).unwrap()),
        CatalogEntry::new("amazing-hand", "Amazing Hand")
            .with_slug("amazing-hand")
            .with_description("Dexterous humanoid hand")
            .with_tags(["manipulation"])
            .with_extra("rating", 3.9),
    ]
}

#[allow(dead_code)]
#[fixture]
pub fn temp_catalog(scenario_catalog: Vec<CatalogEntry>) -> TempCatalog {
    let workspace = TempWorkspace::new();
    let path = workspace.write_catalog("robots.json", &scenario_catalog);
    TempCatalog {
        workspace,
        path,
        entries: scenario_catalog,
    }
}

/// Names of `entries`, in order.
#[allow(dead_code)]
pub fn names(entries: &[CatalogEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

/// Ids of `entries`, in order.
#[allow(dead_code)]
pub fn ids(entries: &[CatalogEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.id.as_str()).collect()
}
