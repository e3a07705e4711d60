//! Contagion spread as breadth-first reachability over live edges.

use std::collections::VecDeque;

use immunet_core::types::collections::NodeSet;
use immunet_core::types::NodeId;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

/// Nodes infected when contagion starts at `seeds` and vaccinated nodes act
/// as sinks.
///
/// Seeds are always infected and always expanded, even when vaccinated.
/// `graph` must hold node `i` at `NodeIndex(i)`.
pub fn reachable_infected_set<F>(
    graph: &DiGraph<NodeId, ()>,
    seeds: &[NodeId],
    is_vaccinated: F,
) -> NodeSet
where
    F: Fn(NodeId) -> bool,
{
    let mut infected = NodeSet::default();
    let mut queue = VecDeque::new();

    for &seed in seeds {
        if infected.insert(seed) {
            queue.push_back(NodeIndex::new(seed.index()));
        }
    }

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors_directed(current, Direction::Outgoing) {
            let id = graph[neighbor];
            if !is_vaccinated(id) && infected.insert(id) {
                queue.push_back(neighbor);
            }
        }
    }

    infected
}
