//! Shared test infrastructure

pub mod fixtures;

use tracing_subscriber::EnvFilter;

/// Route crate logs to the test writer; safe to call from every test.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
