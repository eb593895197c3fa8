//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FAMILY_LAB` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use family_lab::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod email;
mod error;
mod server;
mod simulation;
mod storage;

pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use simulation::SimulationConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development setup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, public origin)
    #[serde(default)]
    pub server: ServerConfig,

    /// Persisted store state location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Mock backend latency and demo partner mode
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Email configuration (EmailJS, optional)
    #[serde(default)]
    pub email: EmailConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FAMILY_LAB` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FAMILY_LAB__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FAMILY_LAB__SIMULATION__DEMO_PARTNER=false` -> `simulation.demo_partner = false`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FAMILY_LAB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.storage.validate()?;
        self.simulation.validate()?;
        self.email.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; tests touching them run one at a time.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "FAMILY_LAB__SERVER__PORT",
        "FAMILY_LAB__SERVER__ENVIRONMENT",
        "FAMILY_LAB__SERVER__PUBLIC_ORIGIN",
        "FAMILY_LAB__SIMULATION__DEMO_PARTNER",
        "FAMILY_LAB__SIMULATION__AUTH_LATENCY_MS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.simulation.auth_latency_ms, 1000);
        assert!(config.simulation.demo_partner);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FAMILY_LAB__SERVER__PORT", "3000");
        env::set_var("FAMILY_LAB__SIMULATION__DEMO_PARTNER", "false");
        env::set_var("FAMILY_LAB__SIMULATION__AUTH_LATENCY_MS", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(!config.simulation.demo_partner);
        assert_eq!(config.simulation.auth_latency_ms, 0);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FAMILY_LAB__SERVER__ENVIRONMENT", "production");
        env::set_var("FAMILY_LAB__SERVER__PUBLIC_ORIGIN", "https://family-lab.example");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert!(config.validate().is_ok());
    }
}
