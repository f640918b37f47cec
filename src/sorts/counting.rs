//! Counting Sort trace generator
//!
//! Three passes over three different arrays, each recorded as its own phase:
//!
//! 1. **Count**: tally every input value into `counts`
//! 2. **Cumulate**: prefix-sum `counts` so each entry is an end position
//! 3. **Output**: scan the input in reverse, placing each value at
//!    `counts[value] - 1` (reverse order keeps equal values stable)
//!
//! The input itself is never reordered. The terminal `Done` snapshot
//! relabels `array` to the finished output.
//!
//! Values are used directly as indices into `counts`, so the input must be
//! non-empty, non-negative, and at most [`COUNTING_SORT_MAX_VALUE`].

use super::{slot, Algorithm};
use crate::constants::COUNTING_SORT_MAX_VALUE;
use crate::trace::marks::{fill, set};
use crate::trace::{InvalidInputReason, Mark, Trace, TraceError, TraceRecorder};

/// Counting Sort pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountingPhase {
    /// Untouched input, nothing counted yet
    #[default]
    Start,
    Count,
    Cumulate,
    Output,
    Done,
}

/// Counting Sort state at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountingStep {
    /// Tallies during `Count`, end positions from `Cumulate` on
    pub counts: Vec<usize>,
    /// Output slots; `None` until placed
    pub output: Vec<Option<i64>>,
    /// Input element being read
    pub input_index: Option<usize>,
    /// Entry of `counts` just updated
    pub count_index: Option<usize>,
    /// Output slot just written
    pub output_index: Option<usize>,
    pub phase: CountingPhase,
}

impl CountingStep {
    pub(crate) fn mark(&self, marks: &mut [Mark]) {
        if self.phase == CountingPhase::Done {
            fill(marks, 0..marks.len(), Mark::Sorted);
            return;
        }
        if self.phase == CountingPhase::Cumulate {
            fill(marks, 0..marks.len(), Mark::Inactive);
        }
        if let Some(index) = self.input_index {
            set(marks, index, Mark::Comparing);
        }
    }

    pub(crate) fn describe(&self, array: &[i64]) -> String {
        let count_at = |k: usize| self.counts.get(k).copied().unwrap_or_default();
        match (self.phase, self.input_index, self.count_index) {
            (CountingPhase::Count, Some(i), Some(k)) => format!(
                "Count {}: count[{}] = {}",
                slot(array, i),
                k,
                count_at(k)
            ),
            (CountingPhase::Start, _, _) => "Initial array".to_string(),
            (CountingPhase::Count, _, _) => "Count occurrences of each value".to_string(),
            (CountingPhase::Cumulate, _, Some(k)) => format!(
                "count[{}] += count[{}], now {}",
                k,
                k.saturating_sub(1),
                count_at(k)
            ),
            (CountingPhase::Cumulate, _, _) => {
                "Accumulate counts into end positions".to_string()
            }
            (CountingPhase::Output, Some(i), _) => match self.output_index {
                Some(position) => format!("Place {} at output[{}]", slot(array, i), position),
                None => format!("Place {}", slot(array, i)),
            },
            (CountingPhase::Output, _, _) => {
                "Place values into the output, scanning the input in reverse".to_string()
            }
            (CountingPhase::Done, _, _) => "Array is sorted".to_string(),
        }
    }
}

/// Check the input can be used to index the count array, returning its maximum
fn validate(input: &[i64]) -> Result<usize, TraceError> {
    let invalid = |reason| TraceError::invalid_input(Algorithm::Counting, reason);

    if let Some(&value) = input.iter().find(|&&v| v < 0) {
        return Err(invalid(InvalidInputReason::NegativeValue { value }));
    }
    let max = input
        .iter()
        .copied()
        .max()
        .ok_or_else(|| invalid(InvalidInputReason::Empty))?;
    if max > COUNTING_SORT_MAX_VALUE {
        return Err(invalid(InvalidInputReason::ValueTooLarge {
            value: max,
            max: COUNTING_SORT_MAX_VALUE,
        }));
    }
    usize::try_from(max).map_err(|_| {
        invalid(InvalidInputReason::ValueTooLarge {
            value: max,
            max: COUNTING_SORT_MAX_VALUE,
        })
    })
}

/// Generate the Counting Sort trace for `input`
///
/// # Errors
///
/// Returns [`TraceError::InvalidInput`] for empty input, negative values, or
/// values above [`COUNTING_SORT_MAX_VALUE`]. Nothing is recorded in that case.
pub fn trace(input: &[i64]) -> Result<Trace, TraceError> {
    let max = match validate(input) {
        Ok(max) => max,
        Err(e) => {
            tracing::warn!(input_len = input.len(), "{}", e);
            return Err(e);
        }
    };
    let n = input.len();
    let mut counts = vec![0usize; max + 1];
    let mut output: Vec<Option<i64>> = vec![None; n];
    let mut recorder = TraceRecorder::new();

    let step = |phase: CountingPhase, counts: &[usize], output: &[Option<i64>]| CountingStep {
        counts: counts.to_vec(),
        output: output.to_vec(),
        phase,
        ..CountingStep::default()
    };

    recorder.record(input, step(CountingPhase::Start, &counts, &output));
    for (i, &value) in input.iter().enumerate() {
        let k = value as usize;
        counts[k] += 1;
        recorder.record(
            input,
            CountingStep {
                input_index: Some(i),
                count_index: Some(k),
                ..step(CountingPhase::Count, &counts, &output)
            },
        );
    }

    recorder.record(input, step(CountingPhase::Cumulate, &counts, &output));
    for k in 1..=max {
        counts[k] += counts[k - 1];
        recorder.record(
            input,
            CountingStep {
                count_index: Some(k),
                ..step(CountingPhase::Cumulate, &counts, &output)
            },
        );
    }

    recorder.record(input, step(CountingPhase::Output, &counts, &output));
    for i in (0..n).rev() {
        let value = input[i];
        let k = value as usize;
        counts[k] -= 1;
        let position = counts[k];
        output[position] = Some(value);
        recorder.record(
            input,
            CountingStep {
                input_index: Some(i),
                count_index: Some(k),
                output_index: Some(position),
                ..step(CountingPhase::Output, &counts, &output)
            },
        );
    }

    let sorted: Vec<i64> = output.iter().flatten().copied().collect();
    recorder.record(&sorted, step(CountingPhase::Done, &counts, &output));

    Ok(recorder.finish(Algorithm::Counting, input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_INPUT_LEN;
    use crate::trace::Detail;

    fn step_at(trace: &Trace, index: usize) -> CountingStep {
        match trace.get(index).map(|s| &s.detail) {
            Some(Detail::Counting(step)) => step.clone(),
            other => panic!("expected counting step, got {:?}", other),
        }
    }

    #[test]
    fn test_phase_lengths() {
        let input = [4, 2, 1, 4, 1, 3, 2, 1];
        let trace = trace(&input).expect("valid input");
        // start: 1, count: 8, cumulate: 1 + 4, output: 1 + 8, done: 1
        assert_eq!(trace.len(), 9 + 5 + 9 + 1);
    }

    #[test]
    fn test_counts_after_tally_and_cumulate() {
        let trace = trace(&[4, 2, 1, 4, 1, 3, 2, 1]).expect("valid input");
        assert_eq!(step_at(&trace, 8).counts, vec![0, 3, 2, 1, 2]);
        assert_eq!(step_at(&trace, 13).counts, vec![0, 3, 5, 6, 8]);
    }

    #[test]
    fn test_reverse_scan_is_stable() {
        let trace = trace(&[1, 0, 1]).expect("valid input");
        // First placement reads the last input element
        let first_placement = trace
            .iter()
            .find_map(|s| match &s.detail {
                Detail::Counting(step)
                    if step.phase == CountingPhase::Output && step.input_index.is_some() =>
                {
                    Some(step.clone())
                }
                _ => None,
            })
            .expect("output placement");
        assert_eq!(first_placement.input_index, Some(2));
        assert_eq!(first_placement.output_index, Some(2));
    }

    #[test]
    fn test_largest_accepted_input_stays_small() {
        let input: Vec<i64> = (0..MAX_INPUT_LEN as i64)
            .map(|i| COUNTING_SORT_MAX_VALUE - i % 7)
            .collect();
        let trace = trace(&input).expect("values at the cap are accepted");
        assert_eq!(
            trace.last().map(|s| s.array.len()),
            Some(MAX_INPUT_LEN)
        );
        assert!(
            trace.estimated_size() < 1_000_000,
            "trace holds {} bytes",
            trace.estimated_size()
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            trace(&[]),
            Err(TraceError::InvalidInput {
                algorithm: Algorithm::Counting,
                reason: InvalidInputReason::Empty,
            })
        );
    }

    #[test]
    fn test_rejects_negative_and_huge() {
        assert!(matches!(
            trace(&[3, -1]),
            Err(TraceError::InvalidInput {
                reason: InvalidInputReason::NegativeValue { value: -1 },
                ..
            })
        ));
        assert!(matches!(
            trace(&[COUNTING_SORT_MAX_VALUE + 1]),
            Err(TraceError::InvalidInput {
                reason: InvalidInputReason::ValueTooLarge { .. },
                ..
            })
        ));
    }
}
