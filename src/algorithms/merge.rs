//! Top-down merge sort driven by an explicit work stack

use super::PendingWrite;
use crate::step::{range_scheme, StepEvent, Value, VisualState};

#[derive(Debug, Clone, Copy)]
enum Task {
    Sort { l: usize, r: usize },
    Merge { l: usize, m: usize, r: usize },
}

/// A merge in progress over `[l, r]` with halves split after `m`
struct ActiveMerge {
    l: usize,
    m: usize,
    left: Vec<Value>,
    right: Vec<Value>,
    i: usize,
    j: usize,
    k: usize,
    scheme: Vec<VisualState>,
}

impl ActiveMerge {
    fn new(values: &[Value], l: usize, m: usize, r: usize) -> Self {
        ActiveMerge {
            l,
            m,
            left: values[l..=m].to_vec(),
            right: values[m + 1..=r].to_vec(),
            i: 0,
            j: 0,
            k: l,
            scheme: range_scheme(values.len(), l, r + 1),
        }
    }

    /// Take the next element to place: `(source offset, destination, value)`.
    ///
    /// Ties go to the left half.
    fn advance(&mut self) -> Option<(usize, usize, Value)> {
        let take_left = self.i < self.left.len()
            && (self.j >= self.right.len() || self.left[self.i] <= self.right[self.j]);

        let (source, value) = if take_left {
            let taken = (self.l + self.i, self.left[self.i]);
            self.i += 1;
            taken
        } else if self.j < self.right.len() {
            let taken = (self.m + 1 + self.j, self.right[self.j]);
            self.j += 1;
            taken
        } else {
            return None;
        };

        let k = self.k;
        self.k += 1;
        Some((source, k, value))
    }
}

/// Merge sort: left half, right half, then merge.
///
/// Each merge opens with a frame painting `[l, r]` as [`VisualState::Range`],
/// then emits one frame per placed element marking its source offset and its
/// destination as [`VisualState::Placed`]. The write lands on the next pull.
pub struct MergeSort<'a> {
    values: &'a mut [Value],
    stack: Vec<Task>,
    active: Option<ActiveMerge>,
    pending: Option<PendingWrite>,
}

impl<'a> MergeSort<'a> {
    pub fn new(values: &'a mut [Value]) -> Self {
        let stack = match values.len() {
            0 | 1 => Vec::new(),
            n => vec![Task::Sort { l: 0, r: n - 1 }],
        };
        MergeSort {
            values,
            stack,
            active: None,
            pending: None,
        }
    }
}

impl Iterator for MergeSort<'_> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        if let Some(write) = self.pending.take() {
            write.apply(self.values);
        }

        loop {
            if let Some(merge) = self.active.as_mut() {
                if let Some((source, k, value)) = merge.advance() {
                    self.pending = Some(PendingWrite::Set(k, value));
                    return Some(StepEvent::full(
                        self.values,
                        &merge.scheme,
                        &[source, k],
                        VisualState::Placed,
                    ));
                }
                self.active = None;
            }

            match self.stack.pop()? {
                Task::Sort { l, r } => {
                    if l >= r {
                        continue;
                    }
                    let m = l + (r - l) / 2;
                    // Popped in reverse: left, right, merge
                    self.stack.push(Task::Merge { l, m, r });
                    self.stack.push(Task::Sort { l: m + 1, r });
                    self.stack.push(Task::Sort { l, r: m });
                }
                Task::Merge { l, m, r } => {
                    let merge = ActiveMerge::new(self.values, l, m, r);
                    let event = StepEvent::Full {
                        values: self.values.to_vec(),
                        states: merge.scheme.clone(),
                    };
                    self.active = Some(merge);
                    return Some(event);
                }
            }
        }
    }
}
