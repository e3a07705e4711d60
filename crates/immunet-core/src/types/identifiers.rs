//! Interned node identifier.
//!
//! A `NodeId` wraps a `lasso::Spur` handed out by a [`NodeTable`](super::NodeTable).
//! Ids are dense: the n-th interned token has index `n`, which lets graph
//! structures index nodes without a lookup table.

use std::cmp::Ordering;

use lasso::{Key, Spur};

/// Interned node token identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub Spur);

impl NodeId {
    /// Create a new ID from a `Spur`.
    pub fn new(spur: Spur) -> Self {
        Self(spur)
    }

    /// Get the inner `Spur`.
    pub fn inner(self) -> Spur {
        self.0
    }

    /// Dense zero-based index in interning order.
    pub fn index(self) -> usize {
        self.0.into_usize()
    }
}

impl From<Spur> for NodeId {
    fn from(spur: Spur) -> Self {
        Self(spur)
    }
}

impl From<NodeId> for Spur {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl PartialOrd for NodeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NodeId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index().cmp(&other.index())
    }
}
