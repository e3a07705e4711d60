//! Synthetic contagion models for experiments.
//!
//! Both generators number nodes `0..n`, give every node with parents
//! random incoming weights summing to less than 1, and pick a random seed
//! set.

pub mod erdos_renyi;
pub mod waxman;
mod weights;

use immunet_core::errors::GeneratorError;

pub use erdos_renyi::ErdosRenyiParams;
pub use waxman::WaxmanParams;

/// Parameters shared by all generators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParams {
    /// Fraction of nodes infected initially (at least one node).
    pub infected_ratio: f64,
    /// Immunization budget as a fraction of the node count.
    pub vaccine_ratio: f64,
    /// `NUM_INSTANCES` of the generated model.
    pub num_instances: u32,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            infected_ratio: 0.1,
            vaccine_ratio: 0.1,
            num_instances: 50,
        }
    }
}

impl ModelParams {
    /// `NUM_VACCINES` for a graph of `nodes` nodes.
    pub fn num_vaccines(&self, nodes: usize) -> usize {
        (nodes as f64 * self.vaccine_ratio) as usize
    }

    /// Seed count for a graph of `nodes` nodes.
    pub fn num_infected(&self, nodes: usize) -> usize {
        ((self.infected_ratio * nodes as f64) as usize).clamp(1, nodes.max(1))
    }

    pub fn validate(&self) -> Result<(), GeneratorError> {
        check_unit("infected_ratio", self.infected_ratio)?;
        check_unit("vaccine_ratio", self.vaccine_ratio)?;
        Ok(())
    }
}

/// `nodes >= 1`.
fn check_nodes(nodes: usize) -> Result<(), GeneratorError> {
    if nodes == 0 {
        return Err(GeneratorError::InvalidParameter {
            field: "nodes",
            message: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

/// `value` in `[0, 1]`.
fn check_unit(field: &'static str, value: f64) -> Result<(), GeneratorError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GeneratorError::InvalidParameter {
            field,
            message: format!("{value} is outside [0, 1]"),
        });
    }
    Ok(())
}
