//! Diagnostic logging through `tracing`, written to stderr

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count
pub const fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the log filter, preferring `RUST_LOG` when it is set and valid
pub fn build_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber
///
/// Returns `false` if a subscriber was already installed.
pub fn init(verbose: u8) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
