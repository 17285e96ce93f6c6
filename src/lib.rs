pub mod cache;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod search;
pub mod tracing;

pub use cache::{IndexCache, fingerprint_entries};
pub use catalog::{CatalogEntry, load_catalog, parse_catalog, validate_entries};
pub use config::{FieldWeights, SearchConfig};
pub use context::AppContext;
pub use error::{CatalogError, ConfigError, Result};
pub use search::{
    NO_TAG_FILTER, SearchIndex, SearchOptions, SortMode, comprehensive_search,
    create_search_index, fuzzy_search, normalize, normalize_strict, post_process, promote,
    search_robots_client_side,
};
