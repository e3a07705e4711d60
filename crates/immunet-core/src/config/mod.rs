//! Configuration system for immunet.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod immunet_config;
pub mod output_config;
pub mod sampling_config;
pub mod selection_config;

pub use immunet_config::{CliOverrides, ImmunetConfig};
pub use output_config::OutputConfig;
pub use sampling_config::SamplingConfig;
pub use selection_config::SelectionConfig;
