//! ImmunetEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for handling immunet run events.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about.
pub trait ImmunetEventHandler: Send + Sync {
    // ---- Sampling ----
    fn on_sampling_started(&self, _event: &SamplingStartedEvent) {}
    fn on_sampling_complete(&self, _event: &SamplingCompleteEvent) {}
    fn on_realizations_saved(&self, _event: &RealizationsSavedEvent) {}

    // ---- Selection ----
    fn on_round_complete(&self, _event: &RoundCompleteEvent) {}
    fn on_selection_complete(&self, _event: &SelectionCompleteEvent) {}

    // ---- Errors ----
    fn on_error(&self, _event: &ErrorEvent) {}
}
