//! Diagnostic logging setup shared by both binaries.
//!
//! Reports go to stdout, so log records are always written to stderr.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Filter selected by `--verbose`, which takes precedence over `RUST_LOG`.
const VERBOSE_FILTER: &str = "debug";

/// Installs the global `tracing` subscriber.
///
/// Calling it more than once keeps the first subscriber.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
