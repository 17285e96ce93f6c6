//! Application context: configuration plus the shared index cache.

use crate::cache::IndexCache;
use crate::catalog::CatalogEntry;
use crate::config::SearchConfig;
use crate::search::{SearchIndex, SearchOptions};
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<AppContext> = OnceLock::new();

/// Owns the search configuration and a cache of built indexes.
///
/// Hosts that want one process-wide instance use [`AppContext::global`];
/// everything else can construct and pass a context explicitly.
#[derive(Debug)]
pub struct AppContext {
    indexes: IndexCache,
}

impl AppContext {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            indexes: IndexCache::new(config),
        }
    }

    /// The process-wide context, created with the default configuration on
    /// first use unless [`AppContext::init_global`] ran earlier.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| {
            tracing::debug!("Initializing global search context with default config");
            Self::new(SearchConfig::default())
        })
    }

    /// Install the process-wide context. Returns `false` if one already exists,
    /// in which case `config` is ignored.
    pub fn init_global(config: SearchConfig) -> bool {
        let installed = GLOBAL.set(Self::new(config)).is_ok();
        if !installed {
            tracing::warn!("Global search context already initialized; ignoring new config");
        }
        installed
    }

    pub const fn config(&self) -> &SearchConfig {
        self.indexes.config()
    }

    pub const fn indexes(&self) -> &IndexCache {
        &self.indexes
    }

    /// Index for `entries`, reused from the cache when the snapshot is unchanged.
    pub fn index(&self, entries: &[CatalogEntry]) -> Arc<SearchIndex> {
        self.indexes.get_or_build(entries)
    }

    /// Type-ahead search through the cached index.
    pub fn search_robots(
        &self,
        entries: &[CatalogEntry],
        query: &str,
        limit: Option<usize>,
    ) -> Vec<CatalogEntry> {
        if entries.is_empty() || query.trim().is_empty() {
            return vec![];
        }
        self.index(entries).search_robots(query, limit)
    }

    /// Full listing pipeline through the cached index.
    pub fn comprehensive_search(
        &self,
        entries: &[CatalogEntry],
        query: &str,
        options: &SearchOptions,
    ) -> Vec<CatalogEntry> {
        if entries.is_empty() {
            return vec![];
        }
        self.index(entries).comprehensive_search(query, options)
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
