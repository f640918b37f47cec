//! Step-trace generators, one per sorting algorithm
//!
//! Every generator is a pure function from an input slice to a
//! [`Trace`]. None of them touch the caller's slice: each starts by copying
//! it into a working array and records snapshots of that copy through a
//! [`TraceRecorder`](crate::trace::TraceRecorder).
//!
//! [`Algorithm`] is the tagged union tying the eight generators together,
//! and the [`TraceSource`] implementation the playback controller is generic
//! over.
//!
//! Determinism: at a single logical instant a comparison is always recorded
//! before the mutation it causes, and one move (swap, shift or placement) is
//! finished before the next index is looked at. Generating twice from the
//! same input always yields equal traces.

pub mod bubble;
pub mod counting;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;
pub mod shell;

use crate::catalog;
use crate::constants::{COUNTING_SORT_DEFAULT_INPUT, DEFAULT_INPUT, SHELL_SORT_DEFAULT_INPUT};
use crate::trace::{Trace, TraceError};
use std::fmt;

/// Anything that can turn an input sequence into a trace
pub trait TraceSource {
    /// Generate a complete trace for `input`
    fn generate(&self, input: &[i64]) -> Result<Trace, TraceError>;
}

impl<F> TraceSource for F
where
    F: Fn(&[i64]) -> Result<Trace, TraceError>,
{
    fn generate(&self, input: &[i64]) -> Result<Trace, TraceError> {
        self(input)
    }
}

/// The eight visualized sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Shell,
    Merge,
    Quick,
    Heap,
    Counting,
}

impl Algorithm {
    /// All algorithms in catalog order
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Shell,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Counting,
    ];

    /// Input used by the demo when none is given
    pub fn default_input(self) -> &'static [i64] {
        match self {
            Algorithm::Shell => &SHELL_SORT_DEFAULT_INPUT,
            Algorithm::Counting => &COUNTING_SORT_DEFAULT_INPUT,
            _ => &DEFAULT_INPUT,
        }
    }

    /// Human-readable name, e.g. "Quick Sort"
    pub fn name(self) -> &'static str {
        catalog::info(self).name
    }

    fn index(self) -> usize {
        Algorithm::ALL
            .iter()
            .position(|&a| a == self)
            .unwrap_or_default()
    }

    /// Next algorithm in catalog order, wrapping around
    pub fn next(self) -> Self {
        Algorithm::ALL[(self.index() + 1) % Algorithm::ALL.len()]
    }

    /// Previous algorithm in catalog order, wrapping around
    pub fn prev(self) -> Self {
        let len = Algorithm::ALL.len();
        Algorithm::ALL[(self.index() + len - 1) % len]
    }
}

impl TraceSource for Algorithm {
    fn generate(&self, input: &[i64]) -> Result<Trace, TraceError> {
        match self {
            Algorithm::Bubble => Ok(bubble::trace(input)),
            Algorithm::Selection => Ok(selection::trace(input)),
            Algorithm::Insertion => Ok(insertion::trace(input)),
            Algorithm::Shell => Ok(shell::trace(input)),
            Algorithm::Merge => Ok(merge::trace(input)),
            Algorithm::Quick => Ok(quick::trace(input)),
            Algorithm::Heap => Ok(heap::trace(input)),
            Algorithm::Counting => counting::trace(input),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generate a trace for `input` with the given algorithm
pub fn generate(algorithm: Algorithm, input: &[i64]) -> Result<Trace, TraceError> {
    algorithm.generate(input)
}

/// Format `a[i]=v` for captions, tolerating stale indices
pub(crate) fn slot(array: &[i64], index: usize) -> String {
    match array.get(index) {
        Some(value) => format!("a[{}]={}", index, value),
        None => format!("a[{}]", index),
    }
}
