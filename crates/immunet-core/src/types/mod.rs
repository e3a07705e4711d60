//! Data structures and node interning for immunet.
//! Node sets, lasso-based node table, `NodeId`.

pub mod collections;
pub mod identifiers;
pub mod interning;

pub use collections::{FxHashMap, FxHashSet, NodeSet};
pub use identifiers::NodeId;
pub use interning::NodeTable;
