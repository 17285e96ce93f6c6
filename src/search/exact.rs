//! Exact-match promotion and deduplication.
//!
//! Typo-tolerant scoring can rank a different entry above the one whose name
//! the user typed verbatim. Promotion puts literal name/slug matches first,
//! scanning the whole pool rather than only the fuzzy hits.

use crate::catalog::CatalogEntry;
use ahash::AHashSet;

/// Whether `entry`'s name or slug equals `needle` (already trimmed and lowercased).
fn is_exact_match(entry: &CatalogEntry, needle: &str) -> bool {
    entry.name.to_lowercase() == needle
        || (!entry.slug.is_empty() && entry.slug.to_lowercase() == needle)
}

/// Entries of `pool` whose name or slug equals `query`, case-insensitively.
pub(crate) fn exact_matches<'a, I>(pool: I, query: &str) -> Vec<&'a CatalogEntry>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return vec![];
    }
    pool.into_iter()
        .filter(|entry| is_exact_match(entry, &needle))
        .collect()
}

/// Exact matches from `pool` first, then `fuzzy`, without repeated ids, capped at `limit`.
pub(crate) fn promote_refs<'a, I>(
    fuzzy: Vec<&'a CatalogEntry>,
    pool: I,
    query: &str,
    limit: usize,
) -> Vec<&'a CatalogEntry>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    let exact = exact_matches(pool, query);
    if !exact.is_empty() {
        tracing::trace!("Promoting {} exact matches for '{}'", exact.len(), query);
    }

    let mut seen: AHashSet<&str> = AHashSet::with_capacity(exact.len() + fuzzy.len());
    exact
        .into_iter()
        .chain(fuzzy)
        .filter(|&entry| seen.insert(entry.id.as_str()))
        .take(limit)
        .collect()
}

/// Move exact name/slug matches from `all_entries` to the front of `fuzzy_results`.
///
/// Exact matches keep their relative order from `all_entries`. Entries present
/// in both lists appear once, at their promoted position. The combined list is
/// truncated to `limit`, so more than `limit` exact matches crowd out every
/// fuzzy result.
pub fn promote(
    fuzzy_results: &[CatalogEntry],
    all_entries: &[CatalogEntry],
    query: &str,
    limit: usize,
) -> Vec<CatalogEntry> {
    promote_refs(fuzzy_results.iter().collect(), all_entries, query, limit)
        .into_iter()
        .cloned()
        .collect()
}
