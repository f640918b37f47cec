//! Selection Sort trace generator

use super::{slot, Algorithm};
use crate::trace::marks::{fill, set, set_pair};
use crate::trace::{Mark, Trace, TraceRecorder};

/// Selection Sort state at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStep {
    /// Slot currently being filled with the minimum of the suffix
    pub position: Option<usize>,
    /// Index of the smallest value seen so far in this scan
    pub min_index: Option<usize>,
    /// `(min_index, candidate)` while scanning, `(position, old_min)` after a swap
    pub comparing: Option<(usize, usize)>,
    pub swapped: bool,
    /// Prefix `[0, sorted_upto)` holds its final values
    pub sorted_upto: usize,
    pub done: bool,
}

impl SelectionStep {
    pub(crate) fn mark(&self, marks: &mut [Mark]) {
        if self.done {
            fill(marks, 0..marks.len(), Mark::Sorted);
            return;
        }
        fill(marks, 0..self.sorted_upto, Mark::Sorted);
        if self.swapped {
            set_pair(marks, self.comparing, Mark::Swapped);
            return;
        }
        set_pair(marks, self.comparing, Mark::Comparing);
        if let Some(min) = self.min_index {
            set(marks, min, Mark::Pivot);
        }
    }

    pub(crate) fn describe(&self, array: &[i64]) -> String {
        match (self.position, self.comparing) {
            (Some(position), Some((_, from))) if self.swapped => format!(
                "Swap minimum into position {}: {} and {}",
                position,
                slot(array, position),
                slot(array, from)
            ),
            (Some(_), Some((min, candidate))) => format!(
                "Compare minimum {} with {}",
                slot(array, min),
                slot(array, candidate)
            ),
            (Some(position), None) => format!("Find the minimum of a[{}..]", position),
            _ if self.done => "Array is sorted".to_string(),
            _ => "Initial array".to_string(),
        }
    }
}

/// Generate the Selection Sort trace for `input`
pub fn trace(input: &[i64]) -> Trace {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut recorder = TraceRecorder::new();

    recorder.record(&arr, SelectionStep::default());

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        recorder.record(
            &arr,
            SelectionStep {
                position: Some(i),
                min_index: Some(min),
                sorted_upto: i,
                ..SelectionStep::default()
            },
        );

        for j in i + 1..n {
            recorder.record(
                &arr,
                SelectionStep {
                    position: Some(i),
                    min_index: Some(min),
                    comparing: Some((min, j)),
                    swapped: false,
                    sorted_upto: i,
                    done: false,
                },
            );
            if arr[j] < arr[min] {
                min = j;
            }
        }

        if min != i {
            arr.swap(i, min);
            recorder.record(
                &arr,
                SelectionStep {
                    position: Some(i),
                    min_index: Some(i),
                    comparing: Some((i, min)),
                    swapped: true,
                    sorted_upto: i + 1,
                    done: false,
                },
            );
        }
    }

    recorder.record(
        &arr,
        SelectionStep {
            sorted_upto: n,
            done: true,
            ..SelectionStep::default()
        },
    );
    recorder.finish(Algorithm::Selection, input)
}
