//! Synchronous fan-out of events to registered handlers.

use std::sync::Arc;

use super::handler::ImmunetEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// The dispatcher is itself an [`ImmunetEventHandler`], so engine code
/// takes `&dyn ImmunetEventHandler` and never needs to know whether it
/// talks to one handler or many.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn ImmunetEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn ImmunetEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and does not stop later handlers.
    fn emit<F: Fn(&dyn ImmunetEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                ::tracing::error!("event handler panicked; continuing with remaining handlers");
            }
        }
    }
}

impl ImmunetEventHandler for EventDispatcher {
    fn on_sampling_started(&self, event: &SamplingStartedEvent) {
        self.emit(|h| h.on_sampling_started(event));
    }

    fn on_sampling_complete(&self, event: &SamplingCompleteEvent) {
        self.emit(|h| h.on_sampling_complete(event));
    }

    fn on_realizations_saved(&self, event: &RealizationsSavedEvent) {
        self.emit(|h| h.on_realizations_saved(event));
    }

    fn on_round_complete(&self, event: &RoundCompleteEvent) {
        self.emit(|h| h.on_round_complete(event));
    }

    fn on_selection_complete(&self, event: &SelectionCompleteEvent) {
        self.emit(|h| h.on_selection_complete(event));
    }

    fn on_error(&self, event: &ErrorEvent) {
        self.emit(|h| h.on_error(event));
    }
}
