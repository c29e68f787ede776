//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid AI request timeout")]
    InvalidTimeout,

    #[error("Invalid AI temperature")]
    InvalidTemperature,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),

    #[error("Data directory must not be empty")]
    EmptyDataDir,

    #[error("Invalid corporate email domain: {0}")]
    InvalidEmailDomain(String),
}
