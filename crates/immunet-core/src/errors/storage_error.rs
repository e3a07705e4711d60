//! File and serialization errors.

use super::error_code::{self, ImmunetErrorCode};

/// Errors that can occur while reading model files or reading/writing
/// realization files.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Error opening file: {path}: {message}")]
    FileOpen { path: String, message: String },

    #[error("Error writing file: {path}: {message}")]
    Write { path: String, message: String },

    #[error("Serialization failed: {message}")]
    Serialization { message: String },

    #[error("Realization file references unknown node `{name}`")]
    UnknownNode { name: String },

    #[error("Malformed realization #{index}: {message}")]
    MalformedRealization { index: usize, message: String },
}

impl ImmunetErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FileOpen { .. } | Self::Write { .. } => error_code::IO_ERROR,
            _ => error_code::STORAGE_ERROR,
        }
    }
}
