//! Core types, errors, configuration, events, and tracing for immunet.
//!
//! Everything here is graph-agnostic: the sampling and selection engine
//! lives in `immunet-engine` and builds on these pieces.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;
