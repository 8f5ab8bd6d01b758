//! Tracing subscriber setup.
//!
//! The library itself only emits `tracing` events. Hosts that want them
//! printed call [`init_tracing`] once at startup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{ConfigError, LogFormat, LoggingConfig};

/// Installs the global fmt subscriber described by `config`.
///
/// `RUST_LOG`, when set and valid, overrides the configured directive.
///
/// # Errors
///
/// Returns `ConfigError::Telemetry` if a global subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().with_target(true).json())
            .try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(false)).try_init(),
    };

    result.map_err(|e| ConfigError::Telemetry(e.to_string()))
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    config.validate()?;
    EnvFilter::try_new(&config.log_level).map_err(|e| ConfigError::Telemetry(e.to_string()))
}
