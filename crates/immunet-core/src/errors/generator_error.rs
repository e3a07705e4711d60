//! Random graph generator errors.

use super::error_code::{self, ImmunetErrorCode};

/// Errors that can occur while generating synthetic contagion models.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Invalid generator parameter {field}: {message}")]
    InvalidParameter { field: &'static str, message: String },
}

impl ImmunetErrorCode for GeneratorError {
    fn error_code(&self) -> &'static str {
        error_code::GENERATOR_ERROR
    }
}
