#![forbid(unsafe_code)]

//! Structured logging setup for binaries.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! binary's job. The filter comes from `GUTTER_LOG` (`EnvFilter` syntax),
//! defaulting to `info`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "GUTTER_LOG";

/// Install a JSON subscriber writing to stderr.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_current_span(false)
        .try_init()
        .is_ok()
}
