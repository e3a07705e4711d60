//! Greedy immunization by maximum saved-node count.
//!
//! Each round scores every remaining candidate against all realizations
//! from scratch and commits the best one. The incumbent starts as the first
//! pool node with score 0 and is replaced only on a strictly greater score,
//! so ties go to the earliest candidate in token order and a round always
//! commits a node while the pool is non-empty.

use std::time::Instant;

use immunet_core::events::types::{RoundCompleteEvent, SelectionCompleteEvent};
use immunet_core::events::ImmunetEventHandler;
use immunet_core::types::NodeId;

use super::types::{ImmunizationSet, RoundRecord, SelectionOutcome, VerificationSummary};
use crate::model::ProbabilisticNetwork;
use crate::realization::RealizationSet;

/// Greedy selector with a fixed immunization budget.
#[derive(Debug, Clone, Copy)]
pub struct GreedySelector {
    budget: usize,
}

impl GreedySelector {
    pub fn new(budget: usize) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Select up to `budget` nodes. Candidates are the network's non-seed
    /// nodes in lexicographic token order.
    ///
    /// Every realization's vaccinated set is empty when this returns.
    pub fn select(
        &self,
        network: &ProbabilisticNetwork,
        realizations: &mut RealizationSet,
        handler: &dyn ImmunetEventHandler,
    ) -> SelectionOutcome {
        let start = Instant::now();
        let mut pool: Vec<NodeId> = network
            .node_table()
            .sorted_ids()
            .into_iter()
            .filter(|&id| !network.is_seed(id))
            .collect();

        let max_rounds = self.budget.min(network.node_count());
        let mut immunization = ImmunizationSet::default();
        let mut rounds = Vec::with_capacity(max_rounds);

        tracing::info!(
            budget = self.budget,
            candidates = pool.len(),
            realizations = realizations.len(),
            "greedy selection started"
        );

        for round in 0..max_rounds {
            if pool.is_empty() {
                break;
            }
            let candidates = pool.len();

            let mut best = 0;
            let mut best_score = 0u64;
            for (position, &candidate) in pool.iter().enumerate() {
                let score = saved_sum(realizations, candidate);
                if score > best_score {
                    best = position;
                    best_score = score;
                }
            }

            let winner = pool.remove(best);
            for realization in realizations.iter_mut() {
                realization.vaccinate_node(winner);
            }
            immunization.push(winner);

            tracing::debug!(
                round,
                node = network.node_name(winner),
                saved_sum = best_score,
                candidates,
                "round complete"
            );
            handler.on_round_complete(&RoundCompleteEvent {
                round,
                node: network.node_name(winner).to_string(),
                saved_sum: best_score,
                candidates,
            });
            rounds.push(RoundRecord {
                round,
                node: winner,
                saved_sum: best_score,
                candidates,
            });
        }

        for realization in realizations.iter_mut() {
            realization.clear_vaccinated_nodes();
        }
        let verification = verify(network, realizations, &immunization);
        let elapsed = start.elapsed();

        tracing::info!(
            selected = immunization.len(),
            infected_total = verification.infected_total,
            elapsed_ms = elapsed.as_millis() as u64,
            "greedy selection complete"
        );
        handler.on_selection_complete(&SelectionCompleteEvent {
            selected: immunization.len(),
            infected_total: verification.infected_total,
            duration_ms: elapsed.as_millis() as u64,
        });

        SelectionOutcome {
            immunization,
            rounds,
            verification,
            elapsed,
        }
    }
}

/// Saved nodes summed over all realizations with `candidate` vaccinated on
/// top of each realization's permanent set.
fn saved_sum(realizations: &RealizationSet, candidate: NodeId) -> u64 {
    realizations
        .iter()
        .map(|r| r.saved_count_with(candidate) as u64)
        .sum()
}

/// Re-run every realization with the full immunization set.
fn verify(
    network: &ProbabilisticNetwork,
    realizations: &RealizationSet,
    immunization: &ImmunizationSet,
) -> VerificationSummary {
    let total_saved: u64 = realizations
        .iter()
        .map(|r| r.saved_count_with_all(immunization.as_slice()) as u64)
        .sum();
    let population = network.node_count() as u64 * realizations.len() as u64;
    VerificationSummary {
        total_saved,
        infected_total: population - total_saved,
    }
}
