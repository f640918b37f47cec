//! Insertion Sort trace generator
//!
//! The key at index `i` walks left past every larger value of the sorted
//! prefix, each of which shifts one slot right. The key travels with the
//! shift (it is swapped, not overwritten), so every snapshot still holds the
//! full set of input values. The insertion point is recorded explicitly.

use super::{slot, Algorithm};
use crate::trace::marks::{fill, set, set_pair};
use crate::trace::{Mark, Trace, TraceRecorder};

/// Insertion Sort state at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertionStep {
    pub comparing: Option<(usize, usize)>,
    /// `comparing` was just shifted (larger value moved right, key moved left)
    pub shifted: bool,
    /// Index the key came to rest at
    pub inserted: Option<usize>,
    pub done: bool,
}

impl InsertionStep {
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
        if let Some(index) = self.inserted {
            set(marks, index, Mark::Swapped);
        }
    }

    pub(crate) fn describe(&self, array: &[i64]) -> String {
        match (self.inserted, self.comparing) {
            (Some(index), Some((_, from))) => {
                format!("Insert key from position {} at {}", from, slot(array, index))
            }
            (None, Some((a, b))) if self.shifted => {
                format!("Shift {} right past the key at a[{}]", slot(array, b), a)
            }
            (None, Some((a, b))) => format!("Compare {} with {}", slot(array, a), slot(array, b)),
            _ if self.done => "Array is sorted".to_string(),
            _ => "Initial array".to_string(),
        }
    }
}

/// Generate the Insertion Sort trace for `input`
pub fn trace(input: &[i64]) -> Trace {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut recorder = TraceRecorder::new();

    recorder.record(&arr, InsertionStep::default());

    for i in 1..n {
        recorder.record(
            &arr,
            InsertionStep {
                comparing: Some((i, i - 1)),
                ..InsertionStep::default()
            },
        );

        let mut j = i;
        // arr[j] always holds the key while it walks left
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            recorder.record(
                &arr,
                InsertionStep {
                    comparing: Some((j - 1, j)),
                    shifted: true,
                    ..InsertionStep::default()
                },
            );
            j -= 1;
        }

        recorder.record(
            &arr,
            InsertionStep {
                comparing: Some((j, i)),
                inserted: Some(j),
                ..InsertionStep::default()
            },
        );
    }

    recorder.record(
        &arr,
        InsertionStep {
            done: true,
            ..InsertionStep::default()
        },
    );
    recorder.finish(Algorithm::Insertion, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Detail;

    fn steps(trace: &Trace) -> Vec<InsertionStep> {
        trace
            .iter()
            .filter_map(|s| match &s.detail {
                Detail::Insertion(step) => Some(step.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_shift_then_insert() {
        let trace = trace(&[2, 1]);
        let steps = steps(&trace);
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[1].comparing, Some((1, 0)));
        // shift: 2 moves right, key moves left
        assert!(steps[2].shifted);
        assert_eq!(trace.get(2).map(|s| s.array.clone()), Some(vec![1, 2]));
        assert_eq!(steps[3].inserted, Some(0));
        assert_eq!(trace.get(3).map(|s| s.array.clone()), Some(vec![1, 2]));
        assert!(steps[4].done);
    }

    #[test]
    fn test_captions() {
        let trace = trace(&[2, 1]);
        let captions: Vec<String> = trace.iter().map(|s| s.describe()).collect();
        assert_eq!(captions[0], "Initial array");
        assert_eq!(captions[1], "Compare a[1]=1 with a[0]=2");
        assert_eq!(captions[2], "Shift a[1]=2 right past the key at a[0]");
        assert_eq!(captions[3], "Insert key from position 1 at a[0]=1");
        assert_eq!(captions[4], "Array is sorted");
    }
}
