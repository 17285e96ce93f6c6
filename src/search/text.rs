//! Query and field text normalization.
//!
//! Two canonical forms are used:
//! - **loose**: lowercase, with runs of whitespace, `-`, `_` and `.` collapsed into
//!   a single space ("SO-100 arm" → "so 100 arm"). Word boundaries survive.
//! - **strict**: lowercase alphanumerics only ("SO-100", "so 100" and "so100" all
//!   become "so100"). Used for scoring so separators never matter.

use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"));

/// Characters treated as word separators by the loose form.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '_' | '.')
}

/// Loose normalization: trim, lowercase, collapse separator runs into one space.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strict normalization: lowercase and keep only alphanumeric characters.
pub fn normalize_strict(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Strictly normalized words of `raw`, split on loose separators.
///
/// Words that normalize to nothing (pure punctuation) are dropped.
pub fn strict_words(raw: &str) -> Vec<String> {
    normalize(raw)
        .split(' ')
        .map(normalize_strict)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Maximal runs of ASCII digits in `raw`, in order of appearance.
pub fn digit_runs(raw: &str) -> Vec<String> {
    DIGIT_RUN
        .find_iter(raw)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// A query prepared once per search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PreparedQuery {
    /// Strict form, compared against field text.
    pub(crate) strict: String,
    /// Digit runs for the number-pattern bonus.
    pub(crate) digits: Vec<String>,
}

impl PreparedQuery {
    pub(crate) fn new(raw: &str) -> Self {
        let strict = normalize_strict(raw);
        // Taken from the strict form so "1-2" and "12" carry the same digits.
        let digits = digit_runs(&strict);
        Self { strict, digits }
    }

    /// True when the query carries no searchable characters.
    pub(crate) fn is_empty(&self) -> bool {
        self.strict.is_empty()
    }

    pub(crate) fn char_len(&self) -> usize {
        self.strict.chars().count()
    }
}
