//! Structured logging setup.
//!
//! Thin wrapper over `tracing-subscriber` driven by [`LoggingConfig`].
//! Library code only emits `tracing` events; installing a subscriber is the
//! embedding application's choice, typically once at startup.

use tracing::info;

use crate::config::LoggingConfig;
use crate::error::{CodecError, Result};

/// Install a global tracing subscriber per the given configuration.
///
/// Fails if a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_max_level(config.log_level);

    let installed = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed
        .map_err(|e| CodecError::Config(format!("failed to install tracing subscriber: {e}")))?;

    info!(app = %config.app_name, level = %config.log_level, "logging initialized");
    Ok(())
}
