//! Model validation errors.

use super::error_code::{self, ImmunetErrorCode};

/// Errors raised when a parsed model is incomplete or violates the
/// incoming-weight invariant. Missing directives are checked first, in
/// declaration order of this enum.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("not found infected nodes")]
    MissingInfectedNodes,

    #[error("not found num instances")]
    MissingNumInstances,

    #[error("not found num vaccines")]
    MissingNumVaccines,

    #[error("Invalid network: edge {parent} -> {node} has weight {weight} outside [0, 1]")]
    InvalidWeight {
        parent: String,
        node: String,
        weight: f64,
    },

    #[error("Invalid network: Weight of incoming edges exceeds 1 (node {node}, total {total})")]
    IncomingWeightExceeded { node: String, total: f64 },
}

impl ImmunetErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidWeight { .. } | Self::IncomingWeightExceeded { .. } => {
                error_code::INVARIANT_VIOLATION
            }
            _ => error_code::VALIDATION_ERROR,
        }
    }
}
