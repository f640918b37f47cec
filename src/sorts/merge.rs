//! Merge Sort trace generator
//!
//! Top-down merge sort with the recursion flattened into the snapshot
//! stream. While two runs are merged the backing array still holds the old
//! contents of the range, so each snapshot carries the `left` and `right`
//! runs and the `merged` prefix explicitly.

use super::Algorithm;
use crate::trace::marks::{fill, set};
use crate::trace::{Mark, Trace, TraceRecorder};

/// Where in a merge a snapshot was taken
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergePhase {
    #[default]
    Start,
    /// About to merge `left` and `right`
    Split,
    /// Comparing the heads of `left` and `right`
    Compare,
    /// `merged` has been written back into `range`
    Merged,
    Done,
}

/// Merge Sort state at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeStep {
    /// Half-open range `[start, end)` being merged
    pub range: Option<(usize, usize)>,
    pub left: Vec<i64>,
    pub right: Vec<i64>,
    pub merged: Vec<i64>,
    /// Positions of the current heads within `left` and `right`
    pub comparing: Option<(usize, usize)>,
    pub phase: MergePhase,
}

impl MergeStep {
    pub(crate) fn mark(&self, marks: &mut [Mark]) {
        if self.phase == MergePhase::Done {
            fill(marks, 0..marks.len(), Mark::Sorted);
            return;
        }
        let Some((start, end)) = self.range else {
            return;
        };
        fill(marks, 0..start, Mark::Inactive);
        fill(marks, end..marks.len(), Mark::Inactive);

        match self.phase {
            MergePhase::Compare => {
                if let Some((i, j)) = self.comparing {
                    let mid = start + self.left.len();
                    set(marks, start + i, Mark::Comparing);
                    set(marks, mid + j, Mark::Comparing);
                }
            }
            MergePhase::Merged => fill(marks, start..end, Mark::Swapped),
            _ => {}
        }
    }

    pub(crate) fn describe(&self, _array: &[i64]) -> String {
        match self.phase {
            MergePhase::Start => "Initial array".to_string(),
            MergePhase::Split => format!("Merge {:?} with {:?}", self.left, self.right),
            MergePhase::Compare => match self.comparing {
                Some((i, j)) => match (self.left.get(i), self.right.get(j)) {
                    (Some(l), Some(r)) => format!(
                        "Compare left head {} with right head {}, take {}",
                        l,
                        r,
                        if l <= r { l } else { r }
                    ),
                    _ => "Compare run heads".to_string(),
                },
                None => "Compare run heads".to_string(),
            },
            MergePhase::Merged => match self.range {
                Some((start, end)) => {
                    format!("Merged a[{}..{}] = {:?}", start, end, self.merged)
                }
                None => format!("Merged {:?}", self.merged),
            },
            MergePhase::Done => "Array is sorted".to_string(),
        }
    }
}

/// Generate the Merge Sort trace for `input`
pub fn trace(input: &[i64]) -> Trace {
    let mut arr = input.to_vec();
    let mut recorder = TraceRecorder::new();

    recorder.record(&arr, MergeStep::default());
    let len = arr.len();
    sort_range(&mut arr, 0, len, &mut recorder);
    recorder.record(
        &arr,
        MergeStep {
            phase: MergePhase::Done,
            ..MergeStep::default()
        },
    );

    recorder.finish(Algorithm::Merge, input)
}

fn sort_range(arr: &mut [i64], start: usize, end: usize, recorder: &mut TraceRecorder) {
    if end - start <= 1 {
        return;
    }

    let mid = start + (end - start) / 2;
    sort_range(arr, start, mid, recorder);
    sort_range(arr, mid, end, recorder);

    let left = arr[start..mid].to_vec();
    let right = arr[mid..end].to_vec();
    let range = Some((start, end));

    recorder.record(
        arr,
        MergeStep {
            range,
            left: left.clone(),
            right: right.clone(),
            merged: Vec::new(),
            comparing: None,
            phase: MergePhase::Split,
        },
    );

    let mut merged = Vec::with_capacity(end - start);
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        recorder.record(
            arr,
            MergeStep {
                range,
                left: left.clone(),
                right: right.clone(),
                merged: merged.clone(),
                comparing: Some((i, j)),
                phase: MergePhase::Compare,
            },
        );
        // `<=` keeps equal values in their original order
        if left[i] <= right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);

    arr[start..end].copy_from_slice(&merged);
    recorder.record(
        arr,
        MergeStep {
            range,
            left: Vec::new(),
            right: Vec::new(),
            merged,
            comparing: None,
            phase: MergePhase::Merged,
        },
    );
}
