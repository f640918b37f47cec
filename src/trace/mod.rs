//! Step traces: the recorded history of one sorting run
//!
//! A [`Trace`] is an immutable, fully materialized list of [`Snapshot`]s.
//! Generators build it through a [`TraceRecorder`], which copies the working
//! array at every recorded instant so later mutation can never reach back
//! into history.
//!
//! - [`errors`]: [`TraceError`], returned when a generator rejects its input
//! - [`marks`]: per-index classification used by the renderer

pub mod errors;
pub mod marks;

pub use errors::{InvalidInputReason, TraceError};
pub use marks::Mark;

use crate::sorts::bubble::BubbleStep;
use crate::sorts::counting::CountingStep;
use crate::sorts::heap::HeapStep;
use crate::sorts::insertion::InsertionStep;
use crate::sorts::merge::MergeStep;
use crate::sorts::quick::QuickStep;
use crate::sorts::selection::SelectionStep;
use crate::sorts::shell::ShellStep;
use crate::sorts::Algorithm;

/// Algorithm-specific state recorded alongside the array
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    Bubble(BubbleStep),
    Selection(SelectionStep),
    Insertion(InsertionStep),
    Shell(ShellStep),
    Merge(MergeStep),
    Quick(QuickStep),
    Heap(HeapStep),
    Counting(CountingStep),
}

impl Detail {
    /// The algorithm this detail belongs to
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Detail::Bubble(_) => Algorithm::Bubble,
            Detail::Selection(_) => Algorithm::Selection,
            Detail::Insertion(_) => Algorithm::Insertion,
            Detail::Shell(_) => Algorithm::Shell,
            Detail::Merge(_) => Algorithm::Merge,
            Detail::Quick(_) => Algorithm::Quick,
            Detail::Heap(_) => Algorithm::Heap,
            Detail::Counting(_) => Algorithm::Counting,
        }
    }

    /// Pair of array indices under comparison, if any
    pub fn comparing(&self) -> Option<(usize, usize)> {
        match self {
            Detail::Bubble(step) => step.comparing,
            Detail::Selection(step) => step.comparing,
            Detail::Insertion(step) => step.comparing,
            Detail::Shell(step) => step.comparing,
            Detail::Quick(step) => step.comparing,
            Detail::Heap(step) => step.comparing.or(step.swapping),
            // Merge compares heads of its sub-sequences, Counting never compares
            Detail::Merge(_) | Detail::Counting(_) => None,
        }
    }

    fn apply_marks(&self, marks: &mut [Mark]) {
        match self {
            Detail::Bubble(step) => step.mark(marks),
            Detail::Selection(step) => step.mark(marks),
            Detail::Insertion(step) => step.mark(marks),
            Detail::Shell(step) => step.mark(marks),
            Detail::Merge(step) => step.mark(marks),
            Detail::Quick(step) => step.mark(marks),
            Detail::Heap(step) => step.mark(marks),
            Detail::Counting(step) => step.mark(marks),
        }
    }

    fn describe(&self, array: &[i64]) -> String {
        match self {
            Detail::Bubble(step) => step.describe(array),
            Detail::Selection(step) => step.describe(array),
            Detail::Insertion(step) => step.describe(array),
            Detail::Shell(step) => step.describe(array),
            Detail::Merge(step) => step.describe(array),
            Detail::Quick(step) => step.describe(array),
            Detail::Heap(step) => step.describe(array),
            Detail::Counting(step) => step.describe(array),
        }
    }

    fn estimated_size(&self) -> usize {
        let word = std::mem::size_of::<i64>();
        match self {
            Detail::Merge(step) => {
                (step.left.len() + step.right.len() + step.merged.len()) * word
            }
            Detail::Counting(step) => {
                step.counts.len() * std::mem::size_of::<usize>()
                    + step.output.len() * std::mem::size_of::<Option<i64>>()
            }
            _ => 0,
        }
    }
}

/// One recorded instant of a sorting run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub array: Vec<i64>,
    pub detail: Detail,
}

impl Snapshot {
    /// Classify every index of `array` for display
    pub fn marks(&self) -> Vec<Mark> {
        let mut marks = vec![Mark::Idle; self.array.len()];
        self.detail.apply_marks(&mut marks);
        marks
    }

    /// One-line caption of what the algorithm is doing at this instant
    pub fn describe(&self) -> String {
        self.detail.describe(&self.array)
    }

    /// Rough size of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.array.len() * std::mem::size_of::<i64>()
            + self.detail.estimated_size()
    }
}

/// Complete, immutable history of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    algorithm: Algorithm,
    input: Vec<i64>,
    snapshots: Vec<Snapshot>,
}

impl Trace {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The input this trace was generated from
    pub fn input(&self) -> &[i64] {
        &self.input
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Number of snapshots (always at least 2)
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn first(&self) -> Option<&Snapshot> {
        self.snapshots.first()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Estimate the memory held by this trace in bytes
    pub fn estimated_size(&self) -> usize {
        self.snapshots.iter().map(Snapshot::estimated_size).sum()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Accumulates snapshots while a generator runs
///
/// Generators pass `&mut TraceRecorder` down through their helpers; nothing
/// captures it. [`TraceRecorder::finish`] consumes the recorder, so a trace
/// cannot be appended to once it exists.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    snapshots: Vec<Snapshot>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        TraceRecorder {
            snapshots: Vec::new(),
        }
    }

    /// Record the current state, copying `array`
    pub fn record(&mut self, array: &[i64], detail: impl Into<Detail>) {
        self.snapshots.push(Snapshot {
            array: array.to_vec(),
            detail: detail.into(),
        });
    }

    /// Number of snapshots recorded so far
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Seal the recording into a [`Trace`]
    pub fn finish(self, algorithm: Algorithm, input: &[i64]) -> Trace {
        let trace = Trace {
            algorithm,
            input: input.to_vec(),
            snapshots: self.snapshots,
        };
        tracing::debug!(
            algorithm = %algorithm,
            input_len = input.len(),
            snapshots = trace.len(),
            bytes = trace.estimated_size(),
            "generated trace"
        );
        trace
    }
}

macro_rules! impl_into_detail {
    ($($step:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$step> for Detail {
                fn from(step: $step) -> Self {
                    Detail::$variant(step)
                }
            }
        )*
    };
}

impl_into_detail! {
    BubbleStep => Bubble,
    SelectionStep => Selection,
    InsertionStep => Insertion,
    ShellStep => Shell,
    MergeStep => Merge,
    QuickStep => Quick,
    HeapStep => Heap,
    CountingStep => Counting,
}
