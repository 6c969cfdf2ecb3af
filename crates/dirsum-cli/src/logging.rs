//! Logging setup

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Pick the log filter
///
/// `--verbose` forces `debug`. Otherwise `RUST_LOG` is honoured and the
/// default is `warn`, keeping stderr to diagnostics only.
#[must_use]
pub fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber, writing to stderr
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(build_filter(verbose))
        .init();
}
