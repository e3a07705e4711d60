//! Collection types used across the engine.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

use super::identifiers::NodeId;

/// Set of nodes: infected, saved, or vaccinated.
pub type NodeSet = FxHashSet<NodeId>;

/// Edge indices of one node's incoming edges. Most nodes have few parents.
pub type EdgeIndexList = SmallVec<[usize; 8]>;
