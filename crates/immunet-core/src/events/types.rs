//! Event payload types.

use std::path::PathBuf;

/// Payload for `on_sampling_started`.
#[derive(Debug, Clone)]
pub struct SamplingStartedEvent {
    pub num_instances: u32,
    pub node_count: usize,
    pub seed: u64,
}

/// Payload for `on_sampling_complete`.
#[derive(Debug, Clone)]
pub struct SamplingCompleteEvent {
    pub num_instances: u32,
    pub live_edges: usize,
    pub duration_ms: u64,
}

/// Payload for `on_round_complete`.
#[derive(Debug, Clone)]
pub struct RoundCompleteEvent {
    /// Zero-based greedy round.
    pub round: usize,
    /// Token of the node chosen this round.
    pub node: String,
    /// Saved-node total across all realizations with the node added.
    pub saved_sum: u64,
    /// Candidates scored this round.
    pub candidates: usize,
}

/// Payload for `on_selection_complete`.
#[derive(Debug, Clone)]
pub struct SelectionCompleteEvent {
    pub selected: usize,
    pub infected_total: u64,
    pub duration_ms: u64,
}

/// Payload for `on_realizations_saved`.
#[derive(Debug, Clone)]
pub struct RealizationsSavedEvent {
    pub path: PathBuf,
    pub count: usize,
}

/// Payload for `on_error`.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub message: String,
    pub error_code: String,
}
