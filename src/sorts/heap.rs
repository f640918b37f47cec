//! Heap Sort trace generator
//!
//! A max-heap is built bottom-up, then the root is repeatedly swapped to the
//! end of the active heap region, which shrinks by one per extraction. The
//! suffix past `heap_size` is the sorted output.

use super::{slot, Algorithm};
use crate::trace::marks::{fill, set_pair};
use crate::trace::{Mark, Trace, TraceRecorder};

/// Where in the run a snapshot was taken
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeapPhase {
    #[default]
    Start,
    /// Sifting down while building the heap
    Build,
    /// The whole array is a valid max-heap
    Built,
    /// Moving the root out, or restoring the heap afterwards
    Extract,
    Done,
}

/// Heap Sort state at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeapStep {
    /// Length of the active heap region `[0, heap_size)`
    pub heap_size: usize,
    /// Parent and larger child about to be compared
    pub comparing: Option<(usize, usize)>,
    /// Pair that was just swapped
    pub swapping: Option<(usize, usize)>,
    /// Root value being extracted
    pub extracting: Option<i64>,
    pub phase: HeapPhase,
}

impl HeapStep {
    pub(crate) fn mark(&self, marks: &mut [Mark]) {
        match self.phase {
            HeapPhase::Done => fill(marks, 0..marks.len(), Mark::Sorted),
            HeapPhase::Extract => fill(marks, self.heap_size..marks.len(), Mark::Sorted),
            _ => {}
        }
        set_pair(marks, self.comparing, Mark::Comparing);
        set_pair(marks, self.swapping, Mark::Swapped);
    }

    pub(crate) fn describe(&self, array: &[i64]) -> String {
        match (self.phase, self.comparing, self.swapping) {
            (HeapPhase::Start, _, _) => "Initial array".to_string(),
            (HeapPhase::Built, _, _) => "Max-heap built".to_string(),
            (HeapPhase::Done, _, _) => "Array is sorted".to_string(),
            (_, Some((parent, child)), _) => format!(
                "Sift down: parent {} is smaller than child {}",
                slot(array, parent),
                slot(array, child)
            ),
            (HeapPhase::Extract, None, Some((0, end))) if self.extracting.is_some() => format!(
                "Move max {} to a[{}], heap shrinks to {}",
                self.extracting.unwrap_or_default(),
                end,
                self.heap_size
            ),
            (_, None, Some((a, b))) => format!("Swap: {} and {}", slot(array, a), slot(array, b)),
            (HeapPhase::Extract, None, None) => format!(
                "Extract max {} from the root",
                self.extracting.unwrap_or_default()
            ),
            (HeapPhase::Build, None, None) => "Build heap".to_string(),
        }
    }
}

/// Generate the Heap Sort trace for `input`
pub fn trace(input: &[i64]) -> Trace {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut recorder = TraceRecorder::new();

    recorder.record(
        &arr,
        HeapStep {
            heap_size: n,
            ..HeapStep::default()
        },
    );

    if n > 1 {
        for root in (0..n / 2).rev() {
            sift_down(&mut arr, n, root, HeapPhase::Build, &mut recorder);
        }
        recorder.record(
            &arr,
            HeapStep {
                heap_size: n,
                phase: HeapPhase::Built,
                ..HeapStep::default()
            },
        );

        for end in (1..n).rev() {
            recorder.record(
                &arr,
                HeapStep {
                    heap_size: end + 1,
                    extracting: Some(arr[0]),
                    phase: HeapPhase::Extract,
                    ..HeapStep::default()
                },
            );
            arr.swap(0, end);
            recorder.record(
                &arr,
                HeapStep {
                    heap_size: end,
                    swapping: Some((0, end)),
                    extracting: Some(arr[end]),
                    phase: HeapPhase::Extract,
                    ..HeapStep::default()
                },
            );
            sift_down(&mut arr, end, 0, HeapPhase::Extract, &mut recorder);
        }
    }

    recorder.record(
        &arr,
        HeapStep {
            phase: HeapPhase::Done,
            ..HeapStep::default()
        },
    );
    recorder.finish(Algorithm::Heap, input)
}

/// Restore the max-heap property below `root` within `arr[..heap_size]`
fn sift_down(
    arr: &mut [i64],
    heap_size: usize,
    mut root: usize,
    phase: HeapPhase,
    recorder: &mut TraceRecorder,
) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;
        if left < heap_size && arr[left] > arr[largest] {
            largest = left;
        }
        if right < heap_size && arr[right] > arr[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }

        recorder.record(
            arr,
            HeapStep {
                heap_size,
                comparing: Some((root, largest)),
                phase,
                ..HeapStep::default()
            },
        );
        arr.swap(root, largest);
        recorder.record(
            arr,
            HeapStep {
                heap_size,
                swapping: Some((root, largest)),
                phase,
                ..HeapStep::default()
            },
        );
        root = largest;
    }
}
