//! Pipeline errors.

use super::error_code::ImmunetErrorCode;
use super::{
    ConfigError, GeneratorError, ParseError, SamplingError, StorageError, ValidationError,
};

/// Errors that can occur during an end-to-end run.
/// Aggregates subsystem errors via `From` conversions. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),

    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ImmunetErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::Validation(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Sampling(e) => e.error_code(),
            Self::Generator(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
