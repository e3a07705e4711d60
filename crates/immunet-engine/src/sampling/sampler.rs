//! Realization sampler.
//!
//! For each target node one uniform draw `r` in `[0, 1)` selects the first
//! incoming edge whose cumulative weight exceeds `r` as the node's single
//! live parent. Draws falling in the leftover mass `1 - sum(w)` leave the
//! node without a live parent.

use std::time::Instant;

use immunet_core::constants::SEED_STRIDE;
use immunet_core::errors::SamplingError;
use immunet_core::events::types::{SamplingCompleteEvent, SamplingStartedEvent};
use immunet_core::events::{EventDispatcher, ImmunetEventHandler};
use immunet_core::types::NodeId;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::model::ProbabilisticNetwork;
use crate::realization::{DeterministicRealization, RealizationSet};

/// Draws independent realizations from a probabilistic network.
pub struct RealizationSampler {
    /// Number of realizations per call to `sample`.
    num_instances: u32,
    /// Base seed (None = drawn from entropy and recorded on the result).
    seed: Option<u64>,
}

impl RealizationSampler {
    pub fn new(num_instances: u32) -> Self {
        Self {
            num_instances,
            seed: None,
        }
    }

    /// Set a deterministic base seed for reproducible sampling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn num_instances(&self) -> u32 {
        self.num_instances
    }

    /// Sample `num_instances` realizations. The network is validated first.
    pub fn sample(&self, network: &ProbabilisticNetwork) -> Result<RealizationSet, SamplingError> {
        self.sample_with_events(network, &EventDispatcher::new())
    }

    pub fn sample_with_events(
        &self,
        network: &ProbabilisticNetwork,
        handler: &dyn ImmunetEventHandler,
    ) -> Result<RealizationSet, SamplingError> {
        network.check_invariant()?;

        let base = self.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let start = Instant::now();
        tracing::info!(
            instances = self.num_instances,
            nodes = network.node_count(),
            seed = base,
            "sampling realizations"
        );
        handler.on_sampling_started(&SamplingStartedEvent {
            num_instances: self.num_instances,
            node_count: network.node_count(),
            seed: base,
        });

        let mut realizations = Vec::with_capacity(self.num_instances as usize);
        for i in 0..u64::from(self.num_instances) {
            let mut rng = ChaCha20Rng::seed_from_u64(realization_seed(base, i));
            let realization = sample_realization(network, &mut rng);
            tracing::trace!(
                index = i,
                live_edges = realization.live_edge_count(),
                "realization sampled"
            );
            realizations.push(realization);
        }

        let set = RealizationSet::new(realizations, Some(base));
        handler.on_sampling_complete(&SamplingCompleteEvent {
            num_instances: self.num_instances,
            live_edges: set.live_edge_count(),
            duration_ms: start.elapsed().as_millis() as u64,
        });
        Ok(set)
    }
}

/// Seed of realization `index` under base seed `base`.
pub fn realization_seed(base: u64, index: u64) -> u64 {
    base.wrapping_add(index.wrapping_mul(SEED_STRIDE))
}

/// Draw one realization. Targets are visited in id order and parents in
/// insertion order, one draw per node that has parents.
pub fn sample_realization<R: Rng + ?Sized>(
    network: &ProbabilisticNetwork,
    rng: &mut R,
) -> DeterministicRealization {
    let mut live: Vec<(NodeId, NodeId)> = Vec::new();

    for node in network.node_table().ids() {
        let mut parents = network.incoming(node).peekable();
        if parents.peek().is_none() {
            continue;
        }
        let r: f64 = rng.gen();
        let mut cumulative = 0.0;
        for edge in parents {
            cumulative += edge.weight;
            if r < cumulative {
                live.push((edge.parent, node));
                break;
            }
        }
    }

    DeterministicRealization::new(network.node_table(), network.seeds(), &live)
}
