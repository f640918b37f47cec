//! Shell Sort trace generator
//!
//! Gapped insertion sort with the halving sequence `n/2, n/4, ..., 1`. The
//! current gap is carried by every snapshot; a snapshot announcing each new
//! gap separates the rounds.

use super::{slot, Algorithm};
use crate::trace::marks::{fill, set, set_pair};
use crate::trace::{Mark, Trace, TraceRecorder};

/// Shell Sort state at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellStep {
    /// Stride between compared elements
    pub gap: usize,
    pub comparing: Option<(usize, usize)>,
    /// `comparing` was just shifted one gap apart
    pub shifted: bool,
    /// Index the key came to rest at
    pub placed: Option<usize>,
    /// Untouched input before the first round
    pub start: bool,
    pub done: bool,
}

impl ShellStep {
    pub(crate) fn mark(&self, marks: &mut [Mark]) {
        if self.done {
            fill(marks, 0..marks.len(), Mark::Sorted);
            return;
        }
        let mark = if self.shifted {
            Mark::Swapped
        } else {
            Mark::Comparing
        };
        set_pair(marks, self.comparing, mark);
        if let Some(index) = self.placed {
            set(marks, index, Mark::Swapped);
        }
    }

    pub(crate) fn describe(&self, array: &[i64]) -> String {
        match (self.placed, self.comparing) {
            (Some(index), _) => format!("Gap {}: key settles at {}", self.gap, slot(array, index)),
            (None, Some((a, b))) if self.shifted => format!(
                "Gap {}: shift {} right past the key at a[{}]",
                self.gap,
                slot(array, a),
                b
            ),
            (None, Some((a, b))) => format!(
                "Gap {}: compare {} with {}",
                self.gap,
                slot(array, a),
                slot(array, b)
            ),
            _ if self.start => "Initial array".to_string(),
            _ if self.done => "Array is sorted".to_string(),
            _ => format!("Start round with gap {}", self.gap),
        }
    }
}

/// Generate the Shell Sort trace for `input`
pub fn trace(input: &[i64]) -> Trace {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut recorder = TraceRecorder::new();

    let mut gap = n / 2;
    recorder.record(
        &arr,
        ShellStep {
            gap,
            start: true,
            ..ShellStep::default()
        },
    );

    while gap > 0 {
        for i in gap..n {
            recorder.record(
                &arr,
                ShellStep {
                    gap,
                    comparing: Some((i, i - gap)),
                    ..ShellStep::default()
                },
            );

            let mut j = i;
            // arr[j] always holds the key while it walks left
            while j >= gap && arr[j - gap] > arr[j] {
                arr.swap(j - gap, j);
                recorder.record(
                    &arr,
                    ShellStep {
                        gap,
                        comparing: Some((j, j - gap)),
                        shifted: true,
                        ..ShellStep::default()
                    },
                );
                j -= gap;
            }

            recorder.record(
                &arr,
                ShellStep {
                    gap,
                    comparing: Some((j, i)),
                    placed: Some(j),
                    ..ShellStep::default()
                },
            );
        }

        gap /= 2;
        if gap > 0 {
            recorder.record(
                &arr,
                ShellStep {
                    gap,
                    ..ShellStep::default()
                },
            );
        }
    }

    recorder.record(
        &arr,
        ShellStep {
            done: true,
            ..ShellStep::default()
        },
    );
    recorder.finish(Algorithm::Shell, input)
}
