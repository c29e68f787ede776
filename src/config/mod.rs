//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SMART_CRM` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment yields a working
//! development setup with AI suggestions switched off.
//!
//! # Example
//!
//! ```no_run
//! use smart_crm::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Data stored in {}", config.storage.data_dir.display());
//! ```

mod ai;
mod app;
mod auth;
mod error;
mod storage;

pub use ai::{AiConfig, AiProvider};
pub use app::{AppSettings, Environment, LogFormat};
pub use auth::AuthConfig;
pub use error::{ConfigError, ValidationError};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Environment and logging
    #[serde(default)]
    pub app: AppSettings,

    /// Record storage and catalog source
    #[serde(default)]
    pub storage: StorageConfig,

    /// Corporate email domain gate
    #[serde(default)]
    pub auth: AuthConfig,

    /// Suggestion advisor provider (OpenAI/Gemini)
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SMART_CRM` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SMART_CRM__STORAGE__DATA_DIR=/var/lib/smart-crm` -> `storage.data_dir`
    /// - `SMART_CRM__AI__PROVIDER=gemini` -> `ai.provider`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("SMART_CRM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.app.validate()?;
        self.storage.validate()?;
        self.auth.validate()?;
        self.ai.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.app.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "SMART_CRM__APP__ENVIRONMENT",
        "SMART_CRM__STORAGE__DATA_DIR",
        "SMART_CRM__STORAGE__SEED_DEMO_DATA",
        "SMART_CRM__AUTH__ALLOWED_EMAIL_DOMAIN",
        "SMART_CRM__AI__PROVIDER",
        "SMART_CRM__AI__GEMINI_API_KEY",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.app.environment, Environment::Development);
        assert_eq!(config.auth.allowed_email_domain, "wearesmart.com.br");
        assert_eq!(config.ai.provider, AiProvider::Disabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SMART_CRM__STORAGE__DATA_DIR", "/tmp/smart");
        env::set_var("SMART_CRM__STORAGE__SEED_DEMO_DATA", "false");
        env::set_var("SMART_CRM__AUTH__ALLOWED_EMAIL_DOMAIN", "example.com");
        env::set_var("SMART_CRM__AI__PROVIDER", "gemini");
        env::set_var("SMART_CRM__AI__GEMINI_API_KEY", "g-test");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/smart"));
        assert!(!config.storage.seed_demo_data);
        assert_eq!(config.auth.allowed_email_domain, "example.com");
        assert_eq!(config.ai.provider, AiProvider::Gemini);
        assert!(config.ai.has_gemini());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_catches_missing_key() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SMART_CRM__AI__PROVIDER", "openai");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("OPENAI_API_KEY"))
        );
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SMART_CRM__APP__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }
}
