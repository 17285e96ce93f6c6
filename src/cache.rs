//! Index caching keyed by collection fingerprints.
//!
//! Rebuilding an index is the dominant cost of a search, so callers that run
//! many queries over one data snapshot (a type-ahead box firing per keystroke)
//! can keep prebuilt indexes here. A cached index is only handed out when its
//! entries are identical to the requested collection, so a cache hit never
//! changes results.

use crate::catalog::CatalogEntry;
use crate::config::SearchConfig;
use crate::search::SearchIndex;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};
use xxhash_rust::xxh3::Xxh3;

/// Field separator fed between hashed values so ("ab", "c") != ("a", "bc").
const SEPARATOR: &[u8] = &[0xff];

/// Content fingerprint of a collection, covering every field of every entry
/// (including pass-through fields) and their order.
pub fn fingerprint_entries(entries: &[CatalogEntry]) -> u64 {
    let mut hasher = Xxh3::new();
    hasher.update(&(entries.len() as u64).to_le_bytes());

    for entry in entries {
        for text in [&entry.id, &entry.name, &entry.slug, &entry.description] {
            hasher.update(text.as_bytes());
            hasher.update(SEPARATOR);
        }
        for tag in &entry.tags {
            hasher.update(tag.as_bytes());
            hasher.update(SEPARATOR);
        }
        if let Some(created_at) = entry.created_at {
            hasher.update(&created_at.timestamp_micros().to_le_bytes());
        }
        hasher.update(SEPARATOR);
        // serde_json's default map is ordered, so iteration is deterministic.
        for (key, value) in &entry.extra {
            hasher.update(key.as_bytes());
            hasher.update(SEPARATOR);
            hasher.update(value.to_string().as_bytes());
            hasher.update(SEPARATOR);
        }
        hasher.update(SEPARATOR);
    }

    hasher.digest()
}

/// LRU cache of prebuilt indexes, all built with one [`SearchConfig`].
pub struct IndexCache {
    config: SearchConfig,
    cache: Mutex<LruCache<u64, Arc<SearchIndex>>>,
}

impl std::fmt::Debug for IndexCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexCache")
            .field("cache_size", &self.len())
            .field("capacity", &self.config.cache_capacity)
            .finish()
    }
}

impl IndexCache {
    /// Create an empty cache holding up to `config.cache_capacity` indexes.
    pub fn new(config: SearchConfig) -> Self {
        let capacity = NonZeroUsize::new(config.cache_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            config,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Return the cached index for `entries`, building and caching it on a miss.
    pub fn get_or_build(&self, entries: &[CatalogEntry]) -> Arc<SearchIndex> {
        let fingerprint = fingerprint_entries(entries);

        {
            let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(index) = cache.get(&fingerprint)
                && index.entries() == entries
            {
                tracing::debug!("Index cache hit for {:016x}", fingerprint);
                return Arc::clone(index);
            }
        }

        tracing::debug!(
            "Index cache miss for {:016x}, building over {} entries",
            fingerprint,
            entries.len()
        );

        // Built outside the lock; a concurrent miss for the same snapshot
        // builds an equal index and the later insert wins.
        let index = Arc::new(SearchIndex::build(entries, self.config));
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .put(fingerprint, Arc::clone(&index));
        index
    }

    /// Number of cached indexes.
    pub fn len(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached index (e.g., after the host refetches its data).
    pub fn clear(&self) {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
