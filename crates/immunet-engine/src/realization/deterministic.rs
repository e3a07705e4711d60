//! One sampled live-edge graph.

use immunet_core::types::collections::NodeSet;
use immunet_core::types::{NodeId, NodeTable};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use super::bfs::reachable_infected_set;

/// A deterministic realization: every network node, the live edges chosen
/// by sampling, and the seed set. Only the vaccinated set changes after
/// construction.
#[derive(Debug, Clone)]
pub struct DeterministicRealization {
    graph: DiGraph<NodeId, ()>,
    seeds: Vec<NodeId>,
    vaccinated: NodeSet,
}

impl DeterministicRealization {
    /// Build a realization over all nodes of `nodes`.
    pub fn new(nodes: &NodeTable, seeds: &[NodeId], live_edges: &[(NodeId, NodeId)]) -> Self {
        let mut graph = DiGraph::with_capacity(nodes.len(), live_edges.len());
        // ids() is index-ordered, so NodeIndex(i) holds the node with index i.
        for id in nodes.ids() {
            graph.add_node(id);
        }
        for &(parent, node) in live_edges {
            graph.add_edge(index_of(parent), index_of(node), ());
        }
        Self {
            graph,
            seeds: seeds.to_vec(),
            vaccinated: NodeSet::default(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn live_edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Live edges as `(parent, node)` pairs.
    pub fn live_edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.graph
            .edge_references()
            .map(move |e| (self.graph[e.source()], self.graph[e.target()]))
    }

    /// Live parents of `node`. Sampling assigns at most one.
    pub fn live_parents(&self, node: NodeId) -> Vec<NodeId> {
        self.graph
            .neighbors_directed(index_of(node), Direction::Incoming)
            .map(|n| self.graph[n])
            .collect()
    }

    pub fn initial_infected(&self) -> &[NodeId] {
        &self.seeds
    }

    /// Infected set when exactly the nodes in `vaccinated` are immune.
    /// The permanent vaccinated set is not consulted.
    pub fn reachable_infected_set(&self, vaccinated: &NodeSet) -> NodeSet {
        reachable_infected_set(&self.graph, &self.seeds, |id| vaccinated.contains(&id))
    }

    /// Nodes not infected when `node` is vaccinated on top of the permanent
    /// set. Leaves the permanent set untouched.
    pub fn vaccinate_node_and_check(&self, node: NodeId) -> NodeSet {
        let infected = self.infected_with(node);
        self.complement(&infected)
    }

    /// Nodes not infected when all of `nodes` are vaccinated on top of the
    /// permanent set. Leaves the permanent set untouched.
    pub fn vaccinate_nodes_and_check(&self, nodes: &[NodeId]) -> NodeSet {
        let infected = self.infected_with_all(nodes);
        self.complement(&infected)
    }

    /// `|vaccinate_node_and_check(node)|` without building the saved set.
    pub fn saved_count_with(&self, node: NodeId) -> usize {
        self.node_count() - self.infected_with(node).len()
    }

    /// `|vaccinate_nodes_and_check(nodes)|` without building the saved set.
    pub fn saved_count_with_all(&self, nodes: &[NodeId]) -> usize {
        self.node_count() - self.infected_with_all(nodes).len()
    }

    /// Permanently vaccinate `node`.
    pub fn vaccinate_node(&mut self, node: NodeId) {
        self.vaccinated.insert(node);
    }

    pub fn clear_vaccinated_nodes(&mut self) {
        self.vaccinated.clear();
    }

    pub fn vaccinated_nodes(&self) -> &NodeSet {
        &self.vaccinated
    }

    fn infected_with(&self, extra: NodeId) -> NodeSet {
        reachable_infected_set(&self.graph, &self.seeds, |id| {
            id == extra || self.vaccinated.contains(&id)
        })
    }

    fn infected_with_all(&self, extra: &[NodeId]) -> NodeSet {
        let extra: NodeSet = extra.iter().copied().collect();
        reachable_infected_set(&self.graph, &self.seeds, |id| {
            extra.contains(&id) || self.vaccinated.contains(&id)
        })
    }

    fn complement(&self, infected: &NodeSet) -> NodeSet {
        self.graph
            .node_weights()
            .copied()
            .filter(|id| !infected.contains(id))
            .collect()
    }
}

fn index_of(id: NodeId) -> NodeIndex {
    NodeIndex::new(id.index())
}
