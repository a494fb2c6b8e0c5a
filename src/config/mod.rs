//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DIARY_GUIDE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use diary_guide::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Guide backend at {}", config.api.base_url);
//! ```

mod api;
mod error;
mod generation;
mod guide;
mod logging;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use generation::GenerationConfig;
pub use guide::GuideConfig;
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration pointed at a local backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Backend endpoints and timeouts
    #[serde(default)]
    pub api: ApiConfig,

    /// Wizard settings
    #[serde(default)]
    pub guide: GuideConfig,

    /// Generation stream framing
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DIARY_GUIDE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DIARY_GUIDE__API__BASE_URL=https://...` -> `api.base_url = ...`
    /// - `DIARY_GUIDE__GUIDE__CUSTOM_ENTRY_LABEL=...` -> `guide.custom_entry_label = ...`
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
                    .prefix("DIARY_GUIDE")
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
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.guide.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
