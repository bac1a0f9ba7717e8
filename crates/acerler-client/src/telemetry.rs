//! Tracing subscriber setup for front ends.
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show every request the client sends
//! - `RUST_LOG=acerler_client=trace` - Trace for the client crate only
//! - Otherwise the configured level (`[logging] level`, default `info`)

use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber writing to stderr.
///
/// `RUST_LOG` wins over `default_level`. Returns `false` when a global
/// subscriber was already installed, which is harmless.
pub fn init_tracing(default_level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
