//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `NUTRI_PROFILE` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a usable config.
//!
//! # Example
//!
//! ```no_run
//! use nutri_profile::config::AppConfig;
//! use nutri_profile::domain::wizard::ProfilingWizard;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! nutri_profile::telemetry::init_tracing(&config.logging).expect("Failed to init tracing");
//!
//! let wizard = ProfilingWizard::with_options(config.wizard_options());
//! ```

mod error;
mod features;
mod logging;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use logging::{Environment, LogFormat, LoggingConfig};

use serde::Deserialize;

use crate::domain::wizard::WizardOptions;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration (environment, filter directive, format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `NUTRI_PROFILE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `NUTRI_PROFILE__LOGGING__LOG_LEVEL=debug` -> `logging.log_level = debug`
    /// - `NUTRI_PROFILE__FEATURES__RECORD_EVENTS=false` -> `features.record_events = false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("NUTRI_PROFILE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the log filter directive is empty or
    /// cannot be parsed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.logging.is_production()
    }

    /// Options for wizards created under this configuration.
    pub fn wizard_options(&self) -> WizardOptions {
        WizardOptions::from(&self.features)
    }
}
