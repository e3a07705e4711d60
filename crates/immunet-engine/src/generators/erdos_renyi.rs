//! Directed Erdős–Rényi G(n, p) models.

use immunet_core::errors::GeneratorError;
use rand::Rng;

use super::weights::build_model;
use super::{check_nodes, check_unit, ModelParams};
use crate::model::ContagionModel;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErdosRenyiParams {
    pub nodes: usize,
    /// Probability of each ordered pair `(u, v)`, `u != v`, being an edge.
    pub edge_probability: f64,
    pub model: ModelParams,
}

impl ErdosRenyiParams {
    pub fn new(nodes: usize) -> Self {
        Self {
            nodes,
            edge_probability: 0.3,
            model: ModelParams::default(),
        }
    }

    pub fn validate(&self) -> Result<(), GeneratorError> {
        check_nodes(self.nodes)?;
        check_unit("edge_probability", self.edge_probability)?;
        self.model.validate()
    }

    /// `LT_ERG_{nodes}_{vaccines}_{instances}.txt`
    pub fn default_file_name(&self) -> String {
        format!(
            "LT_ERG_{}_{}_{}.txt",
            self.nodes,
            self.model.num_vaccines(self.nodes),
            self.model.num_instances
        )
    }
}

pub fn generate<R: Rng + ?Sized>(
    params: &ErdosRenyiParams,
    rng: &mut R,
) -> Result<ContagionModel, GeneratorError> {
    params.validate()?;

    let n = params.nodes;
    let mut arcs = Vec::new();
    for u in 0..n {
        for v in 0..n {
            if u != v && rng.gen::<f64>() < params.edge_probability {
                arcs.push((u, v));
            }
        }
    }

    tracing::debug!(nodes = n, edges = arcs.len(), "generated Erdős–Rényi graph");
    Ok(build_model(n, arcs, &params.model, rng))
}
