//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AFFECTATION` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use affectation_wizard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Model artifact at {}", config.model.artifact_path.display());
//! ```

mod error;
mod history;
mod model;
mod server;
mod wizard;

pub use error::{ConfigError, ValidationError};
pub use history::HistoryConfig;
pub use model::ModelConfig;
pub use server::{Environment, ServerConfig};
pub use wizard::WizardConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, log filter)
    #[serde(default)]
    pub server: ServerConfig,

    /// Model artifact location
    #[serde(default)]
    pub model: ModelConfig,

    /// History file location
    #[serde(default)]
    pub history: HistoryConfig,

    /// Wizard session TTL and diagnosis strategy
    #[serde(default)]
    pub wizard: WizardConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AFFECTATION` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AFFECTATION__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `AFFECTATION__WIZARD__DIAGNOSIS_STRATEGY=majority_vote`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AFFECTATION")
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
    /// Returns `ValidationError` on port 0, an unparseable bind address,
    /// empty paths or a session TTL outside 1..=86400 seconds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.model.validate()?;
        self.history.validate()?;
        self.wizard.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
