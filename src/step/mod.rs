//! Step events emitted by the instrumented algorithms
//!
//! A [`StepEvent`] is one observable moment of a sort: a snapshot of the value
//! buffer plus the visual state of every bar. Algorithms emit two shapes:
//!
//! - [`StepEvent::Full`]: an explicit state for every position (merge and
//!   quick sort, which paint a whole active range)
//! - [`StepEvent::Sparse`]: a handful of highlighted positions over a default
//!   state (selection, bubble and insertion sort)
//!
//! The playback controller never renders an event directly. It normalizes both
//! shapes into a [`Frame`] first, so renderers only ever see one state per bar.

pub mod stats;

pub use stats::StepStats;

/// A value being sorted
pub type Value = i64;

/// Per-bar visual state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualState {
    #[default]
    Default,
    /// Position currently being examined
    Compare,
    /// Position written by a swap or a shift
    Swap,
    /// Quick sort pivot
    Pivot,
    /// Active merge window or partition band
    Range,
    /// Merge source and destination
    Placed,
}

impl VisualState {
    /// Background states paint a region rather than point at an operation
    pub fn is_background(self) -> bool {
        matches!(
            self,
            VisualState::Default | VisualState::Range | VisualState::Pivot
        )
    }
}

/// One renderable moment of algorithm progress
#[derive(Debug, Clone, PartialEq)]
pub enum StepEvent {
    Full {
        values: Vec<Value>,
        states: Vec<VisualState>,
    },
    Sparse {
        values: Vec<Value>,
        highlighted: Vec<usize>,
        state: VisualState,
        default: VisualState,
    },
}

impl StepEvent {
    /// Highlight `indices` with `state` over an all-default background
    pub fn sparse(values: &[Value], indices: &[usize], state: VisualState) -> Self {
        StepEvent::Sparse {
            values: values.to_vec(),
            highlighted: indices.to_vec(),
            state,
            default: VisualState::Default,
        }
    }

    /// Paint `indices` with `state` on top of a precomputed scheme
    pub fn full(
        values: &[Value],
        scheme: &[VisualState],
        indices: &[usize],
        state: VisualState,
    ) -> Self {
        let mut states = scheme.to_vec();
        paint(&mut states, indices, state);
        StepEvent::Full {
            values: values.to_vec(),
            states,
        }
    }

    /// The values snapshot carried by this event
    pub fn values(&self) -> &[Value] {
        match self {
            StepEvent::Full { values, .. } | StepEvent::Sparse { values, .. } => values,
        }
    }

    /// State applied to the operation this event highlights, if any.
    ///
    /// Range-entry frames (merge window, partition band) only carry
    /// background states and return `None`.
    pub fn highlight_state(&self) -> Option<VisualState> {
        match self {
            StepEvent::Sparse { state, .. } => Some(*state),
            StepEvent::Full { states, .. } => {
                states.iter().copied().find(|state| !state.is_background())
            }
        }
    }

    /// Positions carrying the highlight state, in ascending order for full
    /// frames and emission order for sparse ones
    pub fn highlighted_positions(&self) -> Vec<usize> {
        match self {
            StepEvent::Sparse { highlighted, .. } => highlighted.clone(),
            StepEvent::Full { states, .. } => states
                .iter()
                .enumerate()
                .filter(|(_, state)| !state.is_background())
                .map(|(i, _)| i)
                .collect(),
        }
    }

    /// Expand into one state per position
    pub fn into_frame(self) -> Frame {
        match self {
            StepEvent::Full { values, states } => {
                assert_eq!(
                    values.len(),
                    states.len(),
                    "full frame carries {} states for {} values",
                    states.len(),
                    values.len()
                );
                Frame { values, states }
            }
            StepEvent::Sparse {
                values,
                highlighted,
                state,
                default,
            } => {
                let mut states = vec![default; values.len()];
                paint(&mut states, &highlighted, state);
                Frame { values, states }
            }
        }
    }
}

/// A normalized event: exactly one state per value
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub values: Vec<Value>,
    pub states: Vec<VisualState>,
}

impl Frame {
    /// All-default frame over `values`
    pub fn plain(values: &[Value]) -> Self {
        Frame {
            values: values.to_vec(),
            states: vec![VisualState::Default; values.len()],
        }
    }
}

/// Set `state` at every index in `indices`
pub fn paint(states: &mut [VisualState], indices: &[usize], state: VisualState) {
    for &i in indices {
        assert!(
            i < states.len(),
            "highlight index {} out of range for {} positions",
            i,
            states.len()
        );
        states[i] = state;
    }
}

/// Default scheme of length `len` with `lo..hi` marked as [`VisualState::Range`]
pub fn range_scheme(len: usize, lo: usize, hi: usize) -> Vec<VisualState> {
    let mut states = vec![VisualState::Default; len];
    for state in &mut states[lo..hi] {
        *state = VisualState::Range;
    }
    states
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_expands_over_default() {
        let event = StepEvent::sparse(&[4, 2, 9], &[0, 2], VisualState::Compare);
        let frame = event.into_frame();

        assert_eq!(frame.values, vec![4, 2, 9]);
        assert_eq!(
            frame.states,
            vec![
                VisualState::Compare,
                VisualState::Default,
                VisualState::Compare
            ]
        );
    }

    #[test]
    fn test_full_paints_on_scheme() {
        let mut scheme = range_scheme(5, 1, 4);
        scheme[4] = VisualState::Pivot;
        let event = StepEvent::full(&[1, 2, 3, 4, 5], &scheme, &[1, 2], VisualState::Compare);

        assert_eq!(event.highlight_state(), Some(VisualState::Compare));
        assert_eq!(event.highlighted_positions(), vec![1, 2]);

        let frame = event.into_frame();
        assert_eq!(frame.states[0], VisualState::Default);
        assert_eq!(frame.states[3], VisualState::Range);
        assert_eq!(frame.states[4], VisualState::Pivot);
    }

    #[test]
    fn test_range_entry_has_no_highlight() {
        let event = StepEvent::Full {
            values: vec![3, 1],
            states: range_scheme(2, 0, 2),
        };
        assert_eq!(event.highlight_state(), None);
        assert!(event.highlighted_positions().is_empty());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_highlight_panics() {
        StepEvent::sparse(&[1, 2], &[2], VisualState::Swap).into_frame();
    }
}
