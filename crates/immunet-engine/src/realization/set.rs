//! The full set of sampled realizations for one run.

use super::deterministic::DeterministicRealization;

/// Realizations plus the base seed they were sampled from. Loaded sets
/// carry no seed.
#[derive(Debug, Clone, Default)]
pub struct RealizationSet {
    realizations: Vec<DeterministicRealization>,
    seed: Option<u64>,
}

impl RealizationSet {
    pub fn new(realizations: Vec<DeterministicRealization>, seed: Option<u64>) -> Self {
        Self { realizations, seed }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.realizations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.realizations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeterministicRealization> {
        self.realizations.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, DeterministicRealization> {
        self.realizations.iter_mut()
    }

    pub fn as_slice(&self) -> &[DeterministicRealization] {
        &self.realizations
    }

    /// Total live edges across all realizations.
    pub fn live_edge_count(&self) -> usize {
        self.realizations.iter().map(|r| r.live_edge_count()).sum()
    }
}

impl<'a> IntoIterator for &'a RealizationSet {
    type Item = &'a DeterministicRealization;
    type IntoIter = std::slice::Iter<'a, DeterministicRealization>;

    fn into_iter(self) -> Self::IntoIter {
        self.realizations.iter()
    }
}
