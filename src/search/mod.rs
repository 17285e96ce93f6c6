//! Fuzzy search and ranking over catalog entries.
//!
//! The pipeline normalizes the query, scores entries across weighted fields,
//! promotes exact name/slug matches and finally filters, sorts and caps the
//! result list.

// Module declarations
pub(crate) mod exact;
pub(crate) mod index;
pub(crate) mod listing;
pub(crate) mod pipeline;
pub(crate) mod scoring;
pub(crate) mod text;

// Public re-exports (used via lib.rs)
pub use exact::promote;
pub use index::SearchIndex;
pub use listing::{NO_TAG_FILTER, SearchOptions, SortMode, post_process};
pub use pipeline::{
    comprehensive_search, create_search_index, fuzzy_search, search_robots_client_side,
};
pub use text::{digit_runs, normalize, normalize_strict, strict_words};
