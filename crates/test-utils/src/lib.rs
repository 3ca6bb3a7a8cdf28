//! Common utilities for testing actionkit components.

pub mod rpc;
pub mod transport;
pub mod users;

pub use actionkit_constants::test_utils as test_constants;

/// Install a `tracing` subscriber filtered by `RUST_LOG`. Safe to call more
/// than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
