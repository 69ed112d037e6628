//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `DERMA_TRIAGE` prefix
//! and nested values use double underscores as separators. Every setting has
//! a default, so an empty environment yields a runnable development server.
//!
//! # Example
//!
//! ```no_run
//! use derma_triage::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod screening;
mod server;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use screening::ScreeningConfig;
pub use server::{Environment, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, environment, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Simulated latencies for the copilot and image classifier
    #[serde(default)]
    pub screening: ScreeningConfig,

    /// Session store selection
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DERMA_TRIAGE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `DERMA_TRIAGE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `DERMA_TRIAGE__STORAGE__BACKEND=file` -> `storage.backend = file`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DERMA_TRIAGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration sections
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.screening.validate()?;
        self.storage.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Env vars are process-global; serialize tests that touch them
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "DERMA_TRIAGE__SERVER__PORT",
        "DERMA_TRIAGE__SERVER__ENVIRONMENT",
        "DERMA_TRIAGE__SCREENING__IMAGE_DELAY_MS",
        "DERMA_TRIAGE__SCREENING__COPILOT_DELAY_MS",
        "DERMA_TRIAGE__STORAGE__BACKEND",
        "DERMA_TRIAGE__STORAGE__DIRECTORY",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.screening.image_delay_ms, 0);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn nested_values_are_read_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DERMA_TRIAGE__SERVER__PORT", "3000");
        env::set_var("DERMA_TRIAGE__SCREENING__IMAGE_DELAY_MS", "1200");
        env::set_var("DERMA_TRIAGE__SCREENING__COPILOT_DELAY_MS", "650");
        env::set_var("DERMA_TRIAGE__STORAGE__BACKEND", "file");
        env::set_var("DERMA_TRIAGE__STORAGE__DIRECTORY", "/tmp/derma");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.screening.image_delay_ms, 1200);
        assert_eq!(config.screening.copilot_delay_ms, 650);
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.directory, PathBuf::from("/tmp/derma"));
    }

    #[test]
    fn production_environment_is_detected() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DERMA_TRIAGE__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn validate_reports_first_bad_section() {
        let mut config = AppConfig::default();
        config.screening.copilot_delay_ms = 20_000;

        assert_eq!(
            config.validate(),
            Err(ValidationError::DelayTooLong("copilot_delay_ms"))
        );
    }
}
