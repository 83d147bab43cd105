//! Subscriber installation.
//!
//! Filtering comes from `RUST_LOG`. Hook outcomes are emitted at `trace`/`debug`
//! (e.g. `RUST_LOG=nametrack_tracking=debug` shows every registry write-back).

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";
const DEFAULT_TEST_FILTER: &str = "debug";

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// JSON logs with timestamps, configurable via `RUST_LOG`.
pub fn init() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter_or(DEFAULT_FILTER))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(filter = DEFAULT_FILTER, "json subscriber installed");
    }
}

/// Compact logs routed through the test harness' output capture.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_or(DEFAULT_TEST_FILTER))
        .compact()
        .with_test_writer()
        .try_init();
}
