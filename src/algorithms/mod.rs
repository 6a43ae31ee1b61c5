//! Instrumented sorting algorithms
//!
//! Each algorithm is a resumable cursor over a borrowed value buffer. Calling
//! [`Iterator::next`] advances the sort by exactly one observable step, mutates
//! the buffer in place and returns the [`StepEvent`] describing that step.
//! Saved progress (loop indices, pending writes, the recursion work stack for
//! merge and quick sort) lives in the cursor itself, so playback can stop
//! between any two events regardless of recursion depth.
//!
//! A run is one-shot: once exhausted or dropped, ask [`Algorithm::run`] for a
//! fresh one.
//!
//! # Modules
//!
//! - [`selection`], [`bubble`], [`insertion`]: sparse-frame algorithms
//! - [`merge`], [`quick`]: divide-and-conquer, full-frame algorithms

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

use crate::step::{StepEvent, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

/// The five supported algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    Selection,
    Bubble,
    Insertion,
    Merge,
    #[default]
    Quick,
}

/// Strict parse failure for algorithm keys
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}'")]
pub struct UnknownAlgorithm(pub String);

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Selection,
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Map a selection key to an algorithm, falling back to quick sort for
    /// anything unrecognized
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_else(|UnknownAlgorithm(key)| {
            tracing::debug!(key = %key, "unknown algorithm key, falling back to quick sort");
            Algorithm::Quick
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Selection => "Selection Sort",
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// Next algorithm in picker order (wraps)
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in picker order (wraps)
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Start a new run over `values`
    pub fn run(self, values: &mut [Value]) -> AlgorithmRun<'_> {
        match self {
            Algorithm::Selection => AlgorithmRun::Selection(SelectionSort::new(values)),
            Algorithm::Bubble => AlgorithmRun::Bubble(BubbleSort::new(values)),
            Algorithm::Insertion => AlgorithmRun::Insertion(InsertionSort::new(values)),
            Algorithm::Merge => AlgorithmRun::Merge(MergeSort::new(values)),
            Algorithm::Quick => AlgorithmRun::Quick(QuickSort::new(values)),
        }
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let key = key.strip_suffix("sort").unwrap_or(&key);
        match key.trim_end_matches(['-', '_', ' ']) {
            "selection" => Ok(Algorithm::Selection),
            "bubble" => Ok(Algorithm::Bubble),
            "insertion" => Ok(Algorithm::Insertion),
            "merge" => Ok(Algorithm::Merge),
            "quick" => Ok(Algorithm::Quick),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One lazy, non-restartable sequence of step events
pub enum AlgorithmRun<'a> {
    Selection(SelectionSort<'a>),
    Bubble(BubbleSort<'a>),
    Insertion(InsertionSort<'a>),
    Merge(MergeSort<'a>),
    Quick(QuickSort<'a>),
}

impl Iterator for AlgorithmRun<'_> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        match self {
            AlgorithmRun::Selection(run) => run.next(),
            AlgorithmRun::Bubble(run) => run.next(),
            AlgorithmRun::Insertion(run) => run.next(),
            AlgorithmRun::Merge(run) => run.next(),
            AlgorithmRun::Quick(run) => run.next(),
        }
    }
}

/// A buffer write scheduled to land on the next pull.
///
/// Merge and quick sort show the operands of a write before performing it, so
/// the write itself happens at the start of the following `next()` call.
#[derive(Debug, Clone, Copy)]
pub(crate) enum PendingWrite {
    Swap(usize, usize),
    Set(usize, Value),
}

impl PendingWrite {
    pub(crate) fn apply(self, values: &mut [Value]) {
        match self {
            PendingWrite::Swap(a, b) => values.swap(a, b),
            PendingWrite::Set(i, value) => values[i] = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_accepts_variants() {
        assert_eq!(Algorithm::from_key("bubble"), Algorithm::Bubble);
        assert_eq!(Algorithm::from_key("selectionSort"), Algorithm::Selection);
        assert_eq!(Algorithm::from_key("Insertion Sort"), Algorithm::Insertion);
        assert_eq!(Algorithm::from_key("merge-sort"), Algorithm::Merge);
        assert_eq!(Algorithm::from_key("QUICK"), Algorithm::Quick);
    }

    #[test]
    fn test_unknown_key_falls_back_to_quick() {
        assert_eq!(Algorithm::from_key("bogo"), Algorithm::Quick);
        assert_eq!(Algorithm::from_key(""), Algorithm::Quick);
        assert_eq!(
            "bogo".parse::<Algorithm>(),
            Err(UnknownAlgorithm("bogo".to_string()))
        );
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Algorithm::Quick.next(), Algorithm::Selection);
        assert_eq!(Algorithm::Selection.prev(), Algorithm::Quick);
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.next().prev(), algorithm);
        }
    }
}
