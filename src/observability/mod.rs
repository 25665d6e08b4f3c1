//! # Observability
//!
//! Structured logging through the `tracing` ecosystem.

pub mod logging;

pub use logging::log_config_info;

use crate::config::LoggingConfig;
use crate::errors::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. If a subscriber is
/// already installed (tests, embedding applications) this is a no-op.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            Error::config(format!("Invalid log level '{}': {}", config.level, e))
        })?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    // Err only means a subscriber is already installed; keep that one.
    let _ = if config.json { builder.json().try_init() } else { builder.try_init() };
    Ok(())
}
