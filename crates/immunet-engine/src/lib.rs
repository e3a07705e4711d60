//! Sampling and selection engine for immunet.
//!
//! A [`ProbabilisticNetwork`](model::ProbabilisticNetwork) is sampled into
//! deterministic live-edge realizations, and the greedy selector picks the
//! immunization set that saves the most nodes across all of them.

pub mod generators;
pub mod model;
pub mod pipeline;
pub mod realization;
pub mod sampling;
pub mod selection;
