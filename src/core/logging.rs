//! Tracing subscriber setup.
//!
//! Logs go to stderr without color codes so stdout stays free for
//! whatever protocol an embedding binary speaks.

use crate::core::config::LoggingConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when RUST_LOG is unset: this crate at the configured level
pub fn default_directive(config: &LoggingConfig) -> String {
    format!("howtocook={}", config.level)
}

/// Install the global subscriber
///
/// Fails if a subscriber is already installed, which callers may
/// ignore.
pub fn init_logging(config: &LoggingConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let (compact, json) = if config.json {
        (
            None,
            Some(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            ),
        )
    } else {
        (
            Some(
                fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            ),
            None,
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(json)
        .try_init()
}
