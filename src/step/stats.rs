//! Per-run event counters

use super::{StepEvent, VisualState};
use rustc_hash::FxHashMap;

/// Counts of emitted events keyed by the state they highlight.
///
/// Range-entry frames have no highlight and are counted under
/// [`VisualState::Range`].
#[derive(Debug, Clone, Default)]
pub struct StepStats {
    counts: FxHashMap<VisualState, usize>,
    total: usize,
}

impl StepStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one event
    pub fn record(&mut self, event: &StepEvent) {
        let key = event.highlight_state().unwrap_or(VisualState::Range);
        *self.counts.entry(key).or_insert(0) += 1;
        self.total += 1;
    }

    /// Number of events recorded under `state`
    pub fn count(&self, state: VisualState) -> usize {
        self.counts.get(&state).copied().unwrap_or(0)
    }

    pub fn comparisons(&self) -> usize {
        self.count(VisualState::Compare)
    }

    /// Swaps, shifts and merge placements
    pub fn writes(&self) -> usize {
        self.count(VisualState::Swap) + self.count(VisualState::Placed)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn clear(&mut self) {
        self.counts.clear();
        self.total = 0;
    }
}
