//! Validated contagion model.

use immunet_core::config::ImmunetConfig;

use super::network::ProbabilisticNetwork;

/// A network that passed validation, plus the run parameters from its
/// model file.
#[derive(Debug)]
pub struct ContagionModel {
    pub network: ProbabilisticNetwork,
    /// Number of live-edge realizations to sample.
    pub num_instances: u32,
    /// Immunization budget.
    pub num_vaccines: usize,
}

impl ContagionModel {
    /// Replace the file's run parameters with any configured overrides.
    pub fn apply_config(&mut self, config: &ImmunetConfig) {
        if let Some(n) = config.sampling.num_instances {
            self.num_instances = n;
        }
        if let Some(k) = config.selection.num_vaccines {
            self.num_vaccines = k;
        }
    }
}
