//! Bubble sort

use crate::step::{StepEvent, Value, VisualState};

/// Adjacent-pair bubble sort.
///
/// Every pair `(j, j + 1)` gets a Compare event on `j`; out-of-order pairs are
/// swapped and followed by a Swap event on `{j, j + 1}`.
pub struct BubbleSort<'a> {
    values: &'a mut [Value],
    pass: usize,
    j: usize,
    compared: bool,
}

impl<'a> BubbleSort<'a> {
    pub fn new(values: &'a mut [Value]) -> Self {
        BubbleSort {
            values,
            pass: 0,
            j: 0,
            compared: false,
        }
    }
}

impl Iterator for BubbleSort<'_> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        let n = self.values.len();
        loop {
            if self.pass + 1 >= n {
                return None;
            }
            if self.j + self.pass + 1 >= n {
                self.pass += 1;
                self.j = 0;
                continue;
            }

            let j = self.j;
            if !self.compared {
                self.compared = true;
                return Some(StepEvent::sparse(self.values, &[j], VisualState::Compare));
            }

            self.compared = false;
            self.j += 1;
            if self.values[j] > self.values[j + 1] {
                self.values.swap(j, j + 1);
                return Some(StepEvent::sparse(
                    self.values,
                    &[j, j + 1],
                    VisualState::Swap,
                ));
            }
        }
    }
}
