//! Development-time tracing.
//!
//! Diagnostics go to stderr. Rotated values and harness reports are written to
//! stdout and are unaffected by the log level.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber for a binary.
///
/// `verbosity` is the count of `-v` flags: none keeps `warn`, one raises the
/// default to `info`, two or more to `debug`. Directives in `RUST_LOG` are
/// layered on top of that default.
///
/// # Example
/// ```bash
/// RUST_LOG=harness::run=trace cargo run -p harness -- -v run
/// ```
pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}
