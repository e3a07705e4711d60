//! Greedy selection configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the greedy immunization selector.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SelectionConfig {
    /// Overrides the model file's `NUM_VACCINES` when set.
    pub num_vaccines: Option<usize>,
}
