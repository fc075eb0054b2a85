//! Tracing/logging setup.

/// Initializes structured logging with environment-based filtering.
///
/// Set `RUST_LOG` to control verbosity, e.g. `RUST_LOG=learnhub=debug` or
/// `RUST_LOG=remote_store=debug` to watch store state transitions.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
