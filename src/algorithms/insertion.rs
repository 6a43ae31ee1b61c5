//! Insertion sort

use crate::step::{StepEvent, Value, VisualState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// About to pick up `values[i]`
    Pick,
    /// Shifting larger predecessors right
    Shift,
}

/// Insertion sort with one Compare event per inserted element and one Swap
/// event per shift, highlighting the vacated slot `j - 1`.
pub struct InsertionSort<'a> {
    values: &'a mut [Value],
    i: usize,
    j: usize,
    key: Value,
    phase: Phase,
}

impl<'a> InsertionSort<'a> {
    pub fn new(values: &'a mut [Value]) -> Self {
        InsertionSort {
            values,
            i: 1,
            j: 1,
            key: 0,
            phase: Phase::Pick,
        }
    }
}

impl Iterator for InsertionSort<'_> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        loop {
            match self.phase {
                Phase::Pick => {
                    let i = self.i;
                    if i >= self.values.len() {
                        return None;
                    }
                    self.key = self.values[i];
                    self.j = i;
                    self.phase = Phase::Shift;
                    return Some(StepEvent::sparse(self.values, &[i], VisualState::Compare));
                }
                Phase::Shift => {
                    let j = self.j;
                    if j > 0 && self.values[j - 1] > self.key {
                        self.values[j] = self.values[j - 1];
                        self.j -= 1;
                        return Some(StepEvent::sparse(
                            self.values,
                            &[j - 1],
                            VisualState::Swap,
                        ));
                    }
                    self.values[j] = self.key;
                    self.i += 1;
                    self.phase = Phase::Pick;
                }
            }
        }
    }
}
