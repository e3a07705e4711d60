//! Configuration errors.

use super::error_code::{self, ImmunetErrorCode};

/// Errors raised while resolving the layered configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Invalid TOML in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config value {field} rejected: {message}")]
    ValidationFailed { field: String, message: String },

    /// An `IMMUNET_*` variable is set but does not parse.
    #[error("Environment variable {var}={value} is not a valid value")]
    InvalidEnvValue { var: String, value: String },
}

impl ImmunetErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
