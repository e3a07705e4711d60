//! Selection results.

use std::time::Duration;

use immunet_core::types::{NodeId, NodeTable};

/// Nodes chosen for immunization, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImmunizationSet {
    nodes: Vec<NodeId>,
}

impl ImmunizationSet {
    pub fn push(&mut self, node: NodeId) {
        self.nodes.push(node);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Node tokens in selection order.
    pub fn names(&self, nodes: &NodeTable) -> Vec<String> {
        nodes.names(&self.nodes)
    }
}

/// One greedy round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    /// Zero-based round number.
    pub round: usize,
    /// Node committed this round.
    pub node: NodeId,
    /// Saved nodes summed over all realizations with `node` added.
    pub saved_sum: u64,
    /// Pool size scored this round.
    pub candidates: usize,
}

/// Verification pass over the final immunization set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationSummary {
    pub total_saved: u64,
    /// `node_count * realizations - total_saved`.
    pub infected_total: u64,
}

#[derive(Debug, Clone)]
pub struct SelectionOutcome {
    pub immunization: ImmunizationSet,
    pub rounds: Vec<RoundRecord>,
    pub verification: VerificationSummary,
    /// Wall-clock time of the selection loop and verification pass.
    pub elapsed: Duration,
}
