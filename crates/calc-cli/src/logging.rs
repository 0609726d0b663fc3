//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Log output goes to stderr so it never mixes with results on stdout.
/// `RUST_LOG` takes precedence over the `verbose` flag.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
