//! Quick sort with Lomuto partitioning, driven by an explicit work stack

use super::PendingWrite;
use crate::step::{range_scheme, StepEvent, Value, VisualState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Compare `values[j]` against the pivot
    Scan,
    /// Swap `values[j]` below the boundary if it is smaller
    Decide,
    /// Pivot swapped into `i`; queue the sub-ranges
    Place,
}

struct Partition {
    low: usize,
    high: usize,
    pivot: Value,
    i: usize,
    j: usize,
    stage: Stage,
    scheme: Vec<VisualState>,
}

/// Quick sort over `[low, high]`, pivot `values[high]`.
///
/// A partition opens with a frame painting `[low, high)` as
/// [`VisualState::Range`] and `high` as [`VisualState::Pivot`]. Every scanned
/// `j` gets a Compare frame on `{i, j}`, and a Swap frame on `{i, j}` when it
/// moves below the boundary. The partition closes with a Swap frame on
/// `{i, high}`. Swaps land on the pull after their frame.
pub struct QuickSort<'a> {
    values: &'a mut [Value],
    stack: Vec<(usize, usize)>,
    active: Option<Partition>,
    pending: Option<PendingWrite>,
}

impl<'a> QuickSort<'a> {
    pub fn new(values: &'a mut [Value]) -> Self {
        let stack = match values.len() {
            0 | 1 => Vec::new(),
            n => vec![(0, n - 1)],
        };
        QuickSort {
            values,
            stack,
            active: None,
            pending: None,
        }
    }
}

impl Iterator for QuickSort<'_> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        if let Some(write) = self.pending.take() {
            write.apply(self.values);
        }

        loop {
            if let Some(p) = self.active.as_mut() {
                match p.stage {
                    Stage::Scan => {
                        if p.j < p.high {
                            p.stage = Stage::Decide;
                            return Some(StepEvent::full(
                                self.values,
                                &p.scheme,
                                &[p.i, p.j],
                                VisualState::Compare,
                            ));
                        }
                        p.stage = Stage::Place;
                        self.pending = Some(PendingWrite::Swap(p.i, p.high));
                        return Some(StepEvent::full(
                            self.values,
                            &p.scheme,
                            &[p.i, p.high],
                            VisualState::Swap,
                        ));
                    }
                    Stage::Decide => {
                        let j = p.j;
                        p.j += 1;
                        p.stage = Stage::Scan;
                        if self.values[j] < p.pivot {
                            let i = p.i;
                            p.i += 1;
                            self.pending = Some(PendingWrite::Swap(i, j));
                            return Some(StepEvent::full(
                                self.values,
                                &p.scheme,
                                &[i, j],
                                VisualState::Swap,
                            ));
                        }
                        continue;
                    }
                    Stage::Place => {
                        let (low, high, pi) = (p.low, p.high, p.i);
                        self.active = None;
                        // Popped in reverse: left range first
                        if pi < high {
                            self.stack.push((pi + 1, high));
                        }
                        if pi > low {
                            self.stack.push((low, pi - 1));
                        }
                    }
                }
            }

            let (low, high) = self.stack.pop()?;
            if low >= high {
                continue;
            }

            let mut scheme = range_scheme(self.values.len(), low, high);
            scheme[high] = VisualState::Pivot;
            let event = StepEvent::Full {
                values: self.values.to_vec(),
                states: scheme.clone(),
            };
            self.active = Some(Partition {
                low,
                high,
                pivot: self.values[high],
                i: low,
                j: low,
                stage: Stage::Scan,
                scheme,
            });
            return Some(event);
        }
    }
}
