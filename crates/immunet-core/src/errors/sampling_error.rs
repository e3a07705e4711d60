//! Sampling errors.

use super::error_code::{self, ImmunetErrorCode};
use super::ValidationError;

/// Errors that can occur while drawing realizations.
#[derive(Debug, thiserror::Error)]
pub enum SamplingError {
    #[error("Refusing to sample an invalid network: {0}")]
    InvalidNetwork(#[from] ValidationError),
}

impl ImmunetErrorCode for SamplingError {
    fn error_code(&self) -> &'static str {
        error_code::SAMPLING_ERROR
    }
}
