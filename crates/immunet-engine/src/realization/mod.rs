//! Deterministic live-edge realizations and their JSON storage.

pub mod bfs;
pub mod deterministic;
pub mod set;
pub mod storage;

pub use bfs::reachable_infected_set;
pub use deterministic::DeterministicRealization;
pub use set::RealizationSet;
