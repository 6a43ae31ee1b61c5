//! Selection sort

use crate::step::{StepEvent, Value, VisualState};

/// Scans `i..n` for the minimum, one Compare event per scanned index, then
/// swaps it into `i` and emits a Swap event for `{i, min}`.
pub struct SelectionSort<'a> {
    values: &'a mut [Value],
    i: usize,
    j: usize,
    min: usize,
}

impl<'a> SelectionSort<'a> {
    pub fn new(values: &'a mut [Value]) -> Self {
        SelectionSort {
            values,
            i: 0,
            j: 0,
            min: 0,
        }
    }
}

impl Iterator for SelectionSort<'_> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        let n = self.values.len();
        if self.i >= n {
            return None;
        }

        if self.j < n {
            let j = self.j;
            if self.values[j] < self.values[self.min] {
                self.min = j;
            }
            self.j += 1;
            return Some(StepEvent::sparse(self.values, &[j], VisualState::Compare));
        }

        // Scan finished; the swap is a no-op when i already holds the minimum
        let (i, min) = (self.i, self.min);
        self.values.swap(i, min);
        self.i += 1;
        self.j = self.i;
        self.min = self.i;
        Some(StepEvent::sparse(self.values, &[i, min], VisualState::Swap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_layout() {
        let mut values = vec![3, 1, 2];
        let events: Vec<StepEvent> = SelectionSort::new(&mut values).collect();

        // Outer i=0: 3 compares + swap, i=1: 2 + swap, i=2: 1 + swap
        assert_eq!(events.len(), 9);
        assert_eq!(events[0].highlighted_positions(), vec![0]);
        assert_eq!(events[2].highlighted_positions(), vec![2]);
        assert_eq!(events[3].highlight_state(), Some(VisualState::Swap));
        assert_eq!(events[3].highlighted_positions(), vec![0, 1]);
        assert_eq!(events[3].values(), &[1, 3, 2]);
        assert_eq!(events[8].highlighted_positions(), vec![2, 2]);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_emits_nothing() {
        let mut values: Vec<Value> = Vec::new();
        assert_eq!(SelectionSort::new(&mut values).count(), 0);
    }
}
