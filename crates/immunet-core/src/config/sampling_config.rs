//! Sampling configuration.

use serde::{Deserialize, Serialize};

/// Configuration for realization sampling.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SamplingConfig {
    /// Base seed for the realization RNG streams. `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Overrides the model file's `NUM_INSTANCES` when set.
    pub num_instances: Option<u32>,
}
