//! Node token interning.
//!
//! Uses `lasso::Rodeo`: a network is built once on a single thread and then
//! only read, so the threaded interner is not needed.

use lasso::Rodeo;

use super::identifiers::NodeId;

/// Interner mapping node tokens to dense [`NodeId`]s.
#[derive(Debug, Default)]
pub struct NodeTable {
    inner: Rodeo,
}

impl NodeTable {
    /// Create an empty node table.
    pub fn new() -> Self {
        Self {
            inner: Rodeo::default(),
        }
    }

    /// Intern a node token, returning its id. Re-interning is a no-op.
    pub fn intern(&mut self, name: &str) -> NodeId {
        NodeId::new(self.inner.get_or_intern(name))
    }

    /// Look up a previously interned token without inserting.
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.inner.get(name).map(NodeId::new)
    }

    /// Resolve an id back to its token.
    pub fn resolve(&self, id: NodeId) -> &str {
        self.inner.resolve(&id.inner())
    }

    /// Number of interned nodes.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// All ids in interning order (`index()` ascending).
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.inner.iter().map(|(spur, _)| NodeId::new(spur))
    }

    /// All ids ordered by their token, lexicographically.
    ///
    /// This is the candidate enumeration order of the greedy selector.
    pub fn sorted_ids(&self) -> Vec<NodeId> {
        let mut entries: Vec<(&str, NodeId)> = self
            .inner
            .iter()
            .map(|(spur, name)| (name, NodeId::new(spur)))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter().map(|(_, id)| id).collect()
    }

    /// Resolve a slice of ids to owned tokens, preserving order.
    pub fn names(&self, ids: &[NodeId]) -> Vec<String> {
        ids.iter().map(|id| self.resolve(*id).to_string()).collect()
    }
}
