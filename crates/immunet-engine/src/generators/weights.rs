//! Incoming-weight assignment and seed selection shared by the generators.

use immunet_core::constants::WEIGHT_SLACK;
use rand::Rng;

use super::ModelParams;
use crate::model::{ContagionModel, ProbabilisticNetwork};

/// Assemble a model over nodes `0..nodes` from directed `arcs`.
///
/// Each arc gets a raw weight in `(0, 1]`; a node's incoming weights are
/// scaled by `1 / (WEIGHT_SLACK * sum)` so they total `1 / WEIGHT_SLACK`.
/// Arcs are stored sorted by `(source, target)`.
pub(crate) fn build_model<R: Rng + ?Sized>(
    nodes: usize,
    mut arcs: Vec<(usize, usize)>,
    params: &ModelParams,
    rng: &mut R,
) -> ContagionModel {
    arcs.sort_unstable();
    arcs.dedup();

    let raw: Vec<f64> = arcs.iter().map(|_| 1.0 - rng.gen::<f64>()).collect();
    let mut totals = vec![0.0; nodes];
    for (&(_, target), &w) in arcs.iter().zip(&raw) {
        totals[target] += w;
    }

    let mut network = ProbabilisticNetwork::new();
    for node in 0..nodes {
        network.add_node(&node.to_string());
    }
    let mut seeds = rand::seq::index::sample(rng, nodes, params.num_infected(nodes)).into_vec();
    seeds.sort_unstable();
    for seed in seeds {
        network.add_initial_infected_node(&seed.to_string());
    }
    for (&(source, target), &w) in arcs.iter().zip(&raw) {
        let weight = w / (totals[target] * WEIGHT_SLACK);
        network.add_edge(&source.to_string(), &target.to_string(), weight);
    }

    ContagionModel {
        network,
        num_instances: params.num_instances,
        num_vaccines: params.num_vaccines(nodes),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::*;

    #[test]
    fn incoming_weights_stay_below_one() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let arcs = vec![(0, 2), (1, 2), (3, 2), (2, 0)];
        let model = build_model(4, arcs, &ModelParams::default(), &mut rng);
        let network = &model.network;
        let target = network.node_id("2").unwrap();
        let total: f64 = network.incoming(target).map(|e| e.weight).sum();
        assert!((total - 1.0 / WEIGHT_SLACK).abs() < 1e-9);
        assert!(network.validate());
    }
}
