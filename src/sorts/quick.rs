//! Quick Sort trace generator
//!
//! Lomuto partitioning with the last element of each range as pivot. Ranges
//! are processed from an explicit work stack in the same order the recursive
//! formulation visits them (left part fully before right part), so already
//! sorted inputs cannot exhaust the call stack.

use super::{slot, Algorithm};
use crate::trace::marks::{fill, set, set_pair};
use crate::trace::{Mark, Trace, TraceRecorder};

/// Where in a partition a snapshot was taken
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuickPhase {
    #[default]
    Start,
    /// Announces the pivot and range of the next partition
    Partition,
    /// An element is compared against the pivot
    Scan,
    /// Two elements were swapped into the "less or equal" region
    Swap,
    /// The pivot was moved to its final index
    Placed,
    Done,
}

/// Quick Sort state at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickStep {
    /// Inclusive range `[low, high]` being partitioned
    pub range: Option<(usize, usize)>,
    pub pivot: Option<i64>,
    pub pivot_index: Option<usize>,
    pub comparing: Option<(usize, usize)>,
    pub swapped: bool,
    pub phase: QuickPhase,
}

impl QuickStep {
    pub(crate) fn mark(&self, marks: &mut [Mark]) {
        if self.phase == QuickPhase::Done {
            fill(marks, 0..marks.len(), Mark::Sorted);
            return;
        }
        if let Some((low, high)) = self.range {
            fill(marks, 0..low, Mark::Inactive);
            fill(marks, high + 1..marks.len(), Mark::Inactive);
        }
        let mark = if self.swapped {
            Mark::Swapped
        } else {
            Mark::Comparing
        };
        set_pair(marks, self.comparing, mark);
        if let Some(index) = self.pivot_index {
            set(marks, index, Mark::Pivot);
        }
    }

    pub(crate) fn describe(&self, array: &[i64]) -> String {
        let pivot = self.pivot.unwrap_or_default();
        match self.phase {
            QuickPhase::Start => "Initial array".to_string(),
            QuickPhase::Partition => match self.range {
                Some((low, high)) => {
                    format!("Partition a[{}..={}] around pivot {}", low, high, pivot)
                }
                None => format!("Partition around pivot {}", pivot),
            },
            QuickPhase::Scan => match self.comparing {
                Some((index, _)) => format!("Compare {} with pivot {}", slot(array, index), pivot),
                None => format!("Compare with pivot {}", pivot),
            },
            QuickPhase::Swap => match self.comparing {
                Some((a, b)) => format!("Swap: {} and {}", slot(array, a), slot(array, b)),
                None => "Swap".to_string(),
            },
            QuickPhase::Placed => match self.pivot_index {
                Some(index) => format!("Pivot {} placed at index {}", pivot, index),
                None => format!("Pivot {} placed", pivot),
            },
            QuickPhase::Done => "Array is sorted".to_string(),
        }
    }
}

/// Generate the Quick Sort trace for `input`
pub fn trace(input: &[i64]) -> Trace {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut recorder = TraceRecorder::new();

    recorder.record(&arr, QuickStep::default());

    let mut pending = Vec::new();
    if n > 1 {
        pending.push((0, n - 1));
    }
    while let Some((low, high)) = pending.pop() {
        if low >= high {
            continue;
        }
        let pivot_index = partition(&mut arr, low, high, &mut recorder);
        // Pushed right first so the left part is processed first
        if pivot_index + 1 < high {
            pending.push((pivot_index + 1, high));
        }
        if pivot_index > low + 1 {
            pending.push((low, pivot_index - 1));
        }
    }

    recorder.record(
        &arr,
        QuickStep {
            phase: QuickPhase::Done,
            ..QuickStep::default()
        },
    );
    recorder.finish(Algorithm::Quick, input)
}

/// Partition `arr[low..=high]` around `arr[high]`, returning the pivot's final index
fn partition(arr: &mut [i64], low: usize, high: usize, recorder: &mut TraceRecorder) -> usize {
    let pivot = arr[high];
    let step = QuickStep {
        range: Some((low, high)),
        pivot: Some(pivot),
        pivot_index: Some(high),
        comparing: None,
        swapped: false,
        phase: QuickPhase::Partition,
    };
    recorder.record(arr, step.clone());

    // Everything in [low, store) is <= pivot
    let mut store = low;
    for j in low..high {
        recorder.record(
            arr,
            QuickStep {
                comparing: Some((j, high)),
                phase: QuickPhase::Scan,
                ..step.clone()
            },
        );
        if arr[j] <= pivot {
            if store != j {
                arr.swap(store, j);
                recorder.record(
                    arr,
                    QuickStep {
                        comparing: Some((store, j)),
                        swapped: true,
                        phase: QuickPhase::Swap,
                        ..step.clone()
                    },
                );
            }
            store += 1;
        }
    }

    arr.swap(store, high);
    recorder.record(
        arr,
        QuickStep {
            pivot_index: Some(store),
            comparing: Some((store, high)),
            swapped: store != high,
            phase: QuickPhase::Placed,
            ..step
        },
    );
    store
}
