//! Search relevance and ranking algorithms.
//!
//! A field is scored against the strict query in two passes. Literal tiers
//! (equality, prefix, word match, substring) come first. Only when none apply
//! is the field compared approximately, and an approximate match below the
//! configured threshold does not count at all.

use super::text::{PreparedQuery, normalize_strict, strict_words};
use crate::config::SearchConfig;
use rapidfuzz::distance::{jaro_winkler, levenshtein};

/// Whole field equals the query.
pub(crate) const EXACT: f64 = 1.0;
/// Whole field starts with the query.
pub(crate) const FIELD_PREFIX: f64 = 0.95;
/// One word of the field equals the query.
pub(crate) const WORD_EXACT: f64 = 0.9;
/// One word of the field starts with the query.
pub(crate) const WORD_PREFIX: f64 = 0.85;
/// The query occurs anywhere in the field.
pub(crate) const CONTAINS: f64 = 0.75;

/// Field text pre-normalized at index build time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FieldText {
    /// Strict form of the whole field.
    pub(crate) strict: String,
    /// Strict form of each word.
    pub(crate) words: Vec<String>,
}

impl FieldText {
    pub(crate) fn new(raw: &str) -> Self {
        Self {
            strict: normalize_strict(raw),
            words: strict_words(raw),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.strict.is_empty()
    }
}

/// Literal relevance of `field` for a strict `query`.
///
/// Returns `None` when the query does not occur in the field.
pub(crate) fn literal_relevance(field: &FieldText, query: &str) -> Option<f64> {
    if query.is_empty() || field.is_empty() {
        return None;
    }

    if field.strict == query {
        Some(EXACT)
    } else if field.strict.starts_with(query) {
        Some(FIELD_PREFIX)
    } else if field.words.iter().any(|word| word == query) {
        Some(WORD_EXACT)
    } else if field.words.iter().any(|word| word.starts_with(query)) {
        Some(WORD_PREFIX)
    } else if field.strict.contains(query) {
        Some(CONTAINS)
    } else {
        None
    }
}

/// Best approximate similarity (0..=1) between `query` and any word of the field.
///
/// Adjacent word pairs are compared too, so "pupperv3" can still match a typo
/// of the two-word name "Pupper v3".
pub(crate) fn approximate_similarity(field: &FieldText, query: &str) -> f64 {
    let pairs = field
        .words
        .windows(2)
        .map(|pair| format!("{}{}", pair[0], pair[1]));

    field
        .words
        .iter()
        .cloned()
        .chain(pairs)
        .map(|candidate| {
            let jw = jaro_winkler::similarity(query.chars(), candidate.chars());
            let lev = levenshtein::normalized_similarity(query.chars(), candidate.chars());
            jw.max(lev)
        })
        .fold(0.0, f64::max)
}

/// Relevance of one field (0..=1) or `None` if it does not match.
pub(crate) fn field_relevance(
    field: &FieldText,
    query: &PreparedQuery,
    config: &SearchConfig,
) -> Option<f64> {
    if let Some(score) = literal_relevance(field, &query.strict) {
        return Some(score);
    }

    if field.is_empty() || query.char_len() < config.min_fuzzy_query_len {
        return None;
    }

    let similarity = approximate_similarity(field, &query.strict);
    (similarity >= config.threshold).then(|| similarity * config.fuzzy_scale)
}

/// Combine weighted field scores into one entry relevance.
///
/// The best field dominates; every other matching field adds a fraction of its
/// own score so entries matching in several places edge ahead on ties.
pub(crate) fn combine_field_scores(scores: &[f64], config: &SearchConfig) -> Option<f64> {
    let best = scores.iter().copied().reduce(f64::max)?;
    let rest: f64 = scores.iter().sum::<f64>() - best;
    Some(best + rest * config.secondary_field_factor)
}

/// Bonus when a digit run from the query appears in one of `fields`.
///
/// Helps "so100" prefer "SO-100" over its close sibling "SO-101".
pub(crate) fn number_pattern_bonus(
    query: &PreparedQuery,
    fields: &[&FieldText],
    config: &SearchConfig,
) -> f64 {
    let hit = query
        .digits
        .iter()
        .any(|digits| fields.iter().any(|field| field.strict.contains(digits.as_str())));
    if hit { config.number_bonus } else { 0.0 }
}
