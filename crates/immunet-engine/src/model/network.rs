//! Weighted directed contagion network.

use immunet_core::constants::MAX_INCOMING_WEIGHT;
use immunet_core::errors::ValidationError;
use immunet_core::types::collections::{EdgeIndexList, FxHashMap, NodeSet};
use immunet_core::types::{NodeId, NodeTable};

/// A directed edge `parent -> node` carrying the probability that `node`
/// is infected through `parent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEdge {
    pub parent: NodeId,
    pub node: NodeId,
    pub weight: f64,
}

/// Probabilistic (linear-threshold style) contagion network.
///
/// Written once while a model is parsed or generated, then only read.
/// Weights are not checked on insertion; call [`check_invariant`](Self::check_invariant)
/// before sampling.
#[derive(Debug, Default)]
pub struct ProbabilisticNetwork {
    nodes: NodeTable,
    edges: Vec<WeightedEdge>,
    /// Edge indices into `edges`, grouped by target node, in insertion order.
    incoming: FxHashMap<NodeId, EdgeIndexList>,
    seeds: Vec<NodeId>,
    seed_set: NodeSet,
}

impl ProbabilisticNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an isolated node. Re-adding a node is a no-op.
    pub fn add_node(&mut self, name: &str) -> NodeId {
        self.nodes.intern(name)
    }

    /// Register the directed edge `parent -> node`, adding both endpoints.
    pub fn add_edge(&mut self, parent: &str, node: &str, weight: f64) {
        let parent = self.nodes.intern(parent);
        let node = self.nodes.intern(node);
        let index = self.edges.len();
        self.edges.push(WeightedEdge {
            parent,
            node,
            weight,
        });
        self.incoming.entry(node).or_default().push(index);
    }

    /// Mark a node as initially infected, adding it to the node set.
    pub fn add_initial_infected_node(&mut self, name: &str) -> NodeId {
        let id = self.nodes.intern(name);
        if self.seed_set.insert(id) {
            self.seeds.push(id);
        }
        id
    }

    pub fn add_initial_infected_nodes<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.add_initial_infected_node(name.as_ref());
        }
    }

    /// `true` when every weight lies in `[0, 1]` and no node's incoming
    /// weights sum above 1.
    pub fn validate(&self) -> bool {
        self.check_invariant().is_ok()
    }

    /// Like [`validate`](Self::validate), naming the first offending node.
    /// Nodes are checked in id order. Incoming weights are summed in
    /// insertion order and compared against [`MAX_INCOMING_WEIGHT`] without
    /// tolerance, so rounding can push an exact decimal 1 over the limit.
    pub fn check_invariant(&self) -> Result<(), ValidationError> {
        for node in self.nodes.ids() {
            let mut total = 0.0;
            for edge in self.incoming(node) {
                if !(0.0..=1.0).contains(&edge.weight) {
                    return Err(ValidationError::InvalidWeight {
                        parent: self.nodes.resolve(edge.parent).to_string(),
                        node: self.nodes.resolve(node).to_string(),
                        weight: edge.weight,
                    });
                }
                total += edge.weight;
            }
            if total > MAX_INCOMING_WEIGHT {
                return Err(ValidationError::IncomingWeightExceeded {
                    node: self.nodes.resolve(node).to_string(),
                    total,
                });
            }
        }
        Ok(())
    }

    /// Incoming edges of `node` in insertion order.
    pub fn incoming(&self, node: NodeId) -> impl Iterator<Item = &WeightedEdge> + '_ {
        let edges = &self.edges;
        self.incoming
            .get(&node)
            .into_iter()
            .flat_map(move |indices| indices.iter().map(move |&i| &edges[i]))
    }

    pub fn node_table(&self) -> &NodeTable {
        &self.nodes
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.nodes.get(name)
    }

    pub fn node_name(&self, id: NodeId) -> &str {
        self.nodes.resolve(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Seed nodes in the order they were first marked.
    pub fn seeds(&self) -> &[NodeId] {
        &self.seeds
    }

    pub fn is_seed(&self, id: NodeId) -> bool {
        self.seed_set.contains(&id)
    }
}
