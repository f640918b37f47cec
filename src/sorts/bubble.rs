//! Bubble Sort trace generator
//!
//! Each pass walks the unsorted prefix comparing neighbours and swapping
//! them when out of order, so the largest remaining value bubbles to the end
//! of the prefix. A pass without any swap proves the prefix is sorted and
//! ends the run early.

use super::{slot, Algorithm};
use crate::trace::marks::{fill, set_pair};
use crate::trace::{Mark, Trace, TraceRecorder};

/// Bubble Sort state at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BubbleStep {
    /// Neighbouring indices under comparison
    pub comparing: Option<(usize, usize)>,
    /// Whether `comparing` was just swapped
    pub swapped: bool,
    /// Indices from here to the end hold their final values
    pub sorted_from: usize,
    pub done: bool,
}

impl BubbleStep {
    pub(crate) fn mark(&self, marks: &mut [Mark]) {
        if self.done {
            fill(marks, 0..marks.len(), Mark::Sorted);
            return;
        }
        fill(marks, self.sorted_from..marks.len(), Mark::Sorted);
        let mark = if self.swapped {
            Mark::Swapped
        } else {
            Mark::Comparing
        };
        set_pair(marks, self.comparing, mark);
    }

    pub(crate) fn describe(&self, array: &[i64]) -> String {
        match self.comparing {
            Some((a, b)) if self.swapped => {
                format!("Swap: {} and {}", slot(array, a), slot(array, b))
            }
            Some((a, b)) => format!("Compare {} with {}", slot(array, a), slot(array, b)),
            None if self.done => "Array is sorted".to_string(),
            None => "Initial array".to_string(),
        }
    }
}

/// Generate the Bubble Sort trace for `input`
pub fn trace(input: &[i64]) -> Trace {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut recorder = TraceRecorder::new();

    recorder.record(
        &arr,
        BubbleStep {
            sorted_from: n,
            ..BubbleStep::default()
        },
    );

    let mut sorted_from = n;
    while sorted_from > 1 {
        let mut swapped_any = false;
        for j in 0..sorted_from - 1 {
            recorder.record(
                &arr,
                BubbleStep {
                    comparing: Some((j, j + 1)),
                    swapped: false,
                    sorted_from,
                    done: false,
                },
            );
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped_any = true;
                recorder.record(
                    &arr,
                    BubbleStep {
                        comparing: Some((j, j + 1)),
                        swapped: true,
                        sorted_from,
                        done: false,
                    },
                );
            }
        }
        // No swaps: everything left of the boundary is already in order
        sorted_from = if swapped_any { sorted_from - 1 } else { 0 };
    }

    recorder.record(
        &arr,
        BubbleStep {
            done: true,
            ..BubbleStep::default()
        },
    );
    recorder.finish(Algorithm::Bubble, input)
}
