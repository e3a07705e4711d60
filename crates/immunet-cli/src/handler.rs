//! Event handler that forwards engine progress to `tracing`.

use immunet_core::events::types::*;
use immunet_core::events::ImmunetEventHandler;

pub struct LoggingHandler;

impl ImmunetEventHandler for LoggingHandler {
    fn on_sampling_complete(&self, event: &SamplingCompleteEvent) {
        tracing::info!(
            instances = event.num_instances,
            live_edges = event.live_edges,
            duration_ms = event.duration_ms,
            "sampling complete"
        );
    }

    fn on_realizations_saved(&self, event: &RealizationsSavedEvent) {
        tracing::info!(path = %event.path.display(), count = event.count, "realizations written");
    }

    fn on_round_complete(&self, event: &RoundCompleteEvent) {
        tracing::debug!(
            round = event.round,
            node = %event.node,
            saved_sum = event.saved_sum,
            "vaccinated"
        );
    }

    fn on_error(&self, event: &ErrorEvent) {
        tracing::debug!(code = %event.error_code, message = %event.message, "run failed");
    }
}
