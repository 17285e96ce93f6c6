//! Search entry points: type-ahead search and the full listing pipeline.
//!
//! Stages run in a fixed order: normalize the query, rank the (tag-filtered)
//! pool, promote exact name/slug matches, then sort and cap.

use super::SearchIndex;
use super::exact::promote_refs;
use super::listing::{SearchOptions, SortMode, post_process_refs, sort_entries};
use super::text::PreparedQuery;
use crate::catalog::CatalogEntry;
use crate::config::SearchConfig;

impl SearchIndex {
    /// Type-ahead search: ranked fuzzy matches with exact name/slug matches first.
    ///
    /// `limit` defaults to the configured type-ahead limit. A whitespace-only
    /// query returns nothing. A query with no alphanumerics (e.g. `"-"`) can
    /// still match a name or slug exactly.
    pub fn search_robots(&self, query: &str, limit: Option<usize>) -> Vec<CatalogEntry> {
        if query.trim().is_empty() {
            return vec![];
        }
        let limit = limit.unwrap_or(self.config().typeahead_limit);
        let prepared = PreparedQuery::new(query);

        let pool = self.all_positions();
        let fuzzy = self.ranked_entries(&prepared, &pool, limit);
        let results = promote_refs(fuzzy, self.entries(), query, limit);

        tracing::debug!("search_robots('{}') -> {} results", query, results.len());
        results.into_iter().cloned().collect()
    }

    /// Full listing pipeline: tag filter, search, promotion, sort, limit.
    ///
    /// The tag filter narrows the pool before the search runs, so entries
    /// outside the tag can neither match nor be promoted. A whitespace-only
    /// query lists the filtered pool instead (browse mode). Sorting happens
    /// before the limit, so with a non-relevance sort every match competes for
    /// the first places. `options.limit` defaults to the configured listing limit.
    pub fn comprehensive_search(&self, query: &str, options: &SearchOptions) -> Vec<CatalogEntry> {
        let limit = options.limit.unwrap_or(self.config().listing_limit);
        let prepared = PreparedQuery::new(query);

        let pool: Vec<usize> = self
            .all_positions()
            .into_iter()
            .filter(|&position| options.accepts(self.entry(position)))
            .collect();

        let mut results = if query.trim().is_empty() {
            tracing::debug!("Browsing {} entries (tag {:?})", pool.len(), options.active_tag());
            let mut listing: Vec<&CatalogEntry> =
                pool.iter().map(|&position| self.entry(position)).collect();
            sort_entries(&mut listing, options.sort_by);
            listing
        } else {
            // Relevance order is final, so only the top `limit` can survive.
            let cap = if options.sort_by == SortMode::Relevance {
                limit
            } else {
                pool.len()
            };
            let fuzzy = self.ranked_entries(&prepared, &pool, cap);
            let promoted = promote_refs(
                fuzzy,
                pool.iter().map(|&position| self.entry(position)),
                query,
                cap,
            );
            // Pool is already tag-filtered; this only re-sorts.
            post_process_refs(promoted, &SearchOptions::default().sorted_by(options.sort_by))
        };
        results.truncate(limit);

        tracing::debug!(
            "comprehensive_search('{}', sort={}) -> {} results",
            query,
            options.sort_by,
            results.len()
        );
        results.into_iter().cloned().collect()
    }

    /// The best `limit` fuzzy matches within `pool`, by descending relevance.
    fn ranked_entries(
        &self,
        query: &PreparedQuery,
        pool: &[usize],
        limit: usize,
    ) -> Vec<&CatalogEntry> {
        self.rank(query, pool)
            .into_iter()
            .take(limit)
            .map(|position| self.entry(position))
            .collect()
    }
}

/// Build a reusable index over `entries` with the default configuration.
pub fn create_search_index(entries: &[CatalogEntry]) -> SearchIndex {
    SearchIndex::build(entries, SearchConfig::default())
}

/// Approximate multi-field search without exact-match promotion.
pub fn fuzzy_search(entries: &[CatalogEntry], query: &str, limit: usize) -> Vec<CatalogEntry> {
    create_search_index(entries).search(query, limit)
}

/// One-shot type-ahead search over `entries` (default limit 8).
pub fn search_robots_client_side(
    entries: &[CatalogEntry],
    query: &str,
    limit: Option<usize>,
) -> Vec<CatalogEntry> {
    if entries.is_empty() || query.trim().is_empty() {
        return vec![];
    }
    create_search_index(entries).search_robots(query, limit)
}

/// One-shot listing pipeline over `entries` (default limit 50).
pub fn comprehensive_search(
    entries: &[CatalogEntry],
    query: &str,
    options: &SearchOptions,
) -> Vec<CatalogEntry> {
    if entries.is_empty() {
        return vec![];
    }
    create_search_index(entries).comprehensive_search(query, options)
}
