//! Prebuilt, weighted field index over a catalog snapshot.

use super::text::PreparedQuery;
use super::scoring::{FieldText, combine_field_scores, field_relevance, number_pattern_bonus};
use crate::cache::fingerprint_entries;
use crate::catalog::CatalogEntry;
use crate::config::SearchConfig;

/// Normalized searchable fields of one entry.
#[derive(Debug, Clone)]
struct IndexedEntry {
    name: FieldText,
    slug: FieldText,
    description: FieldText,
    tags: FieldText,
}

impl IndexedEntry {
    fn new(entry: &CatalogEntry) -> Self {
        Self {
            name: FieldText::new(&entry.name),
            slug: FieldText::new(&entry.slug),
            description: FieldText::new(&entry.description),
            tags: FieldText::new(&entry.tag_text()),
        }
    }

    /// Relevance of this entry, or `None` if no field matches.
    fn score(&self, query: &PreparedQuery, config: &SearchConfig) -> Option<f64> {
        let weights = config.weights;
        let fields = [
            (&self.name, weights.name),
            (&self.slug, weights.slug),
            (&self.description, weights.description),
            (&self.tags, weights.tags),
        ];

        let scores: Vec<f64> = fields
            .iter()
            .filter_map(|(field, weight)| {
                field_relevance(field, query, config).map(|score| score * weight)
            })
            .filter(|score| *score > 0.0)
            .collect();

        let relevance = combine_field_scores(&scores, config)?;
        Some(relevance + number_pattern_bonus(query, &[&self.name, &self.slug], config))
    }
}

/// A searchable snapshot of a catalog collection.
///
/// Building normalizes every field once; searches then only normalize the
/// query. An index is immutable, so it can be shared across threads and
/// reused for any number of queries. Results are identical to building a
/// fresh index per call.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<CatalogEntry>,
    indexed: Vec<IndexedEntry>,
    config: SearchConfig,
    fingerprint: u64,
}

impl SearchIndex {
    /// Build an index over `entries` with the given tuning parameters.
    pub fn build(entries: &[CatalogEntry], config: SearchConfig) -> Self {
        let start = std::time::Instant::now();
        let indexed = entries.iter().map(IndexedEntry::new).collect();
        let index = Self {
            entries: entries.to_vec(),
            indexed,
            config,
            fingerprint: fingerprint_entries(entries),
        };

        tracing::debug!(
            "Built search index: {} entries (fingerprint {:016x}) in {:?}",
            index.len(),
            index.fingerprint,
            start.elapsed()
        );

        index
    }

    /// The indexed entries, in original collection order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Content fingerprint of the indexed collection.
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Positions of every entry, for searching the whole collection.
    pub(crate) fn all_positions(&self) -> Vec<usize> {
        (0..self.entries.len()).collect()
    }

    pub(crate) fn entry(&self, position: usize) -> &CatalogEntry {
        &self.entries[position]
    }

    /// Score the entries at `pool` and return matching positions ranked by
    /// descending relevance, ties kept in collection order.
    pub(crate) fn rank(&self, query: &PreparedQuery, pool: &[usize]) -> Vec<usize> {
        if query.is_empty() {
            return vec![];
        }

        let mut scored: Vec<(usize, f64)> = pool
            .iter()
            .filter_map(|&position| {
                self.indexed[position]
                    .score(query, &self.config)
                    .map(|score| (position, score))
            })
            .collect();

        scored.sort_by(|(pos_a, a), (pos_b, b)| b.total_cmp(a).then(pos_a.cmp(pos_b)));

        tracing::trace!(
            "Query '{}' matched {} of {} candidates",
            query.strict,
            scored.len(),
            pool.len()
        );

        scored.into_iter().map(|(position, _)| position).collect()
    }

    /// Approximate multi-field search over the whole collection.
    ///
    /// Empty or separator-only queries return no results. At most `limit`
    /// entries are returned, best first.
    pub fn search(&self, query: &str, limit: usize) -> Vec<CatalogEntry> {
        let query = PreparedQuery::new(query);
        self.rank(&query, &self.all_positions())
            .into_iter()
            .take(limit)
            .map(|position| self.entries[position].clone())
            .collect()
    }
}
