//! Live-edge sampling of deterministic realizations.

pub mod sampler;

pub use sampler::{realization_seed, sample_realization, RealizationSampler};
