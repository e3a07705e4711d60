//! Greedy immunization selection.

pub mod greedy;
pub mod types;

pub use greedy::GreedySelector;
pub use types::{ImmunizationSet, RoundRecord, SelectionOutcome, VerificationSummary};
