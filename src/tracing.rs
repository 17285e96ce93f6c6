//! Tracing setup for the `robot-search` binary and test runs.
//!
//! The library itself only emits events:
//!
//! - DEBUG: catalog and config loads, index builds, index cache hits and
//!   misses, and one line per pipeline call
//! - TRACE: per-query match counts and exact-match promotions
//! - WARN: a second attempt to install the global search context
//!
//! Nothing logs at INFO, so the binary's default output is warnings only.

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Default level for events not covered by `RUST_LOG`.
fn default_level(verbose: bool) -> Level {
    let under_test_runner =
        std::env::var_os("NEXTEST").is_some() || std::env::var_os("CARGO_TARGET_TMPDIR").is_some();
    if verbose || under_test_runner { Level::DEBUG } else { Level::INFO }
}

/// Install the global subscriber. Safe to call multiple times; only the first
/// call takes effect.
///
/// `verbose` (the CLI's `-v`) raises the default from INFO to DEBUG. `RUST_LOG`
/// directives apply on top, e.g. `RUST_LOG=robot_catalog_search::search=trace`.
/// Output goes to stderr so `--json` results on stdout stay parseable.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env().add_directive(default_level(verbose).into());
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .compact();

        let installed = if cfg!(test) {
            builder.with_test_writer().try_init()
        } else {
            builder.with_writer(std::io::stderr).try_init()
        };
        if let Err(e) = installed {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
