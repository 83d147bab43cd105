//! Tracing/logging setup shared by binaries and test suites embedding the hooks.

/// Initialize process-wide structured logging.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    logging::init();
}

/// Initialize logging for a test binary (compact output, captured per test).
pub fn init_for_tests() {
    logging::init_for_tests();
}

/// Subscriber configuration (filters, formats).
pub mod logging;
