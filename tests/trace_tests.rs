// Integration tests for the trace generators

use sortty::constants::{COUNTING_SORT_DEFAULT_INPUT, DEFAULT_INPUT};
use sortty::sorts::{self, Algorithm, TraceSource};
use sortty::trace::{Detail, InvalidInputReason, Mark, Trace, TraceError};

/// Inputs every algorithm (including Counting Sort) accepts
fn sample_inputs() -> Vec<Vec<i64>> {
    vec![
        DEFAULT_INPUT.to_vec(),
        COUNTING_SORT_DEFAULT_INPUT.to_vec(),
        vec![1, 2, 3, 4, 5, 6],
        vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
        vec![3, 3, 3, 3],
        vec![2, 1],
        vec![0, 12, 7, 12, 0, 5, 5, 1, 30, 2, 9],
    ]
}

fn generate(algorithm: Algorithm, input: &[i64]) -> Trace {
    sorts::generate(algorithm, input).expect("input is valid for every algorithm")
}

fn sorted(values: &[i64]) -> Vec<i64> {
    let mut values = values.to_vec();
    values.sort_unstable();
    values
}

#[test]
fn test_first_snapshot_is_input_and_last_is_sorted() {
    for algorithm in Algorithm::ALL {
        for input in sample_inputs() {
            let trace = generate(algorithm, &input);
            let first = trace.first().expect("trace is never empty");
            let last = trace.last().expect("trace is never empty");
            assert_eq!(first.array, input, "{} first snapshot", algorithm);
            assert_eq!(last.array, sorted(&input), "{} last snapshot", algorithm);
            assert!(trace.len() >= 2, "{} produced {} snapshots", algorithm, trace.len());
        }
    }
}

#[test]
fn test_every_snapshot_keeps_the_input_values() {
    for algorithm in Algorithm::ALL {
        for input in sample_inputs() {
            let expected = sorted(&input);
            let trace = generate(algorithm, &input);
            for (i, snapshot) in trace.iter().enumerate() {
                assert_eq!(
                    sorted(&snapshot.array),
                    expected,
                    "{} snapshot {} changed the multiset",
                    algorithm,
                    i
                );
            }
        }
    }
}

#[test]
fn test_generation_is_deterministic() {
    for algorithm in Algorithm::ALL {
        for input in sample_inputs() {
            assert_eq!(generate(algorithm, &input), generate(algorithm, &input));
        }
    }
}

#[test]
fn test_caller_input_is_not_mutated() {
    for algorithm in Algorithm::ALL {
        let input = DEFAULT_INPUT.to_vec();
        let trace = generate(algorithm, &input);
        assert_eq!(input, DEFAULT_INPUT.to_vec());
        assert_eq!(trace.input(), &DEFAULT_INPUT[..]);
        assert_eq!(trace.algorithm(), algorithm);
    }
}

#[test]
fn test_comparing_indices_are_in_bounds() {
    for algorithm in Algorithm::ALL {
        for input in sample_inputs() {
            let trace = generate(algorithm, &input);
            for snapshot in &trace {
                if let Some((a, b)) = snapshot.detail.comparing() {
                    let len = snapshot.array.len();
                    assert!(a < len && b < len, "{} compared ({}, {})", algorithm, a, b);
                }
                assert_eq!(snapshot.marks().len(), snapshot.array.len());
            }
        }
    }
}

#[test]
fn test_single_element_input() {
    for algorithm in Algorithm::ALL {
        let trace = generate(algorithm, &[7]);
        assert!(trace.len() >= 2, "{}", algorithm);
        for snapshot in &trace {
            assert_eq!(snapshot.array, vec![7]);
        }
        let last = trace.last().expect("trace is never empty");
        assert_eq!(last.marks(), vec![Mark::Sorted], "{}", algorithm);
    }
}

#[test]
fn test_empty_input() {
    for algorithm in Algorithm::ALL {
        let result = sorts::generate(algorithm, &[]);
        if algorithm == Algorithm::Counting {
            assert_eq!(
                result,
                Err(TraceError::invalid_input(
                    Algorithm::Counting,
                    InvalidInputReason::Empty
                ))
            );
        } else {
            let trace = result.expect("empty input is valid");
            assert_eq!(trace.len(), 2, "{}", algorithm);
            assert!(trace.iter().all(|s| s.array.is_empty()));
            let captions: Vec<String> = trace.iter().map(|s| s.describe()).collect();
            assert_eq!(captions, vec!["Initial array", "Array is sorted"], "{}", algorithm);
        }
    }
}

#[test]
fn test_comparison_sorts_accept_negative_values() {
    let input = [3, -7, 0, -1, 12, -7];
    for algorithm in Algorithm::ALL {
        if algorithm == Algorithm::Counting {
            continue;
        }
        let trace = generate(algorithm, &input);
        let last = trace.last().expect("trace is never empty");
        assert_eq!(last.array, vec![-7, -7, -1, 0, 3, 12]);
    }
}

#[test]
fn test_counting_sort_rejects_out_of_range_values() {
    let err = sorts::generate(Algorithm::Counting, &[3, -2, 1]).unwrap_err();
    assert_eq!(
        err,
        TraceError::invalid_input(
            Algorithm::Counting,
            InvalidInputReason::NegativeValue { value: -2 }
        )
    );
    assert_eq!(err.to_string(), "Counting Sort cannot sort this input: value -2 is negative");

    let err = sorts::generate(Algorithm::Counting, &[1, 1_000_000]).unwrap_err();
    assert!(matches!(
        err,
        TraceError::InvalidInput {
            reason: InvalidInputReason::ValueTooLarge { value: 1_000_000, .. },
            ..
        }
    ));
}

#[test]
fn test_insertion_sort_scenario() {
    let trace = generate(Algorithm::Insertion, &[6, 5, 3, 1, 8, 7, 2, 4]);
    let first = trace.first().expect("trace is never empty");
    let last = trace.last().expect("trace is never empty");
    assert_eq!(first.detail.comparing(), None);
    assert_eq!(last.array, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_counting_sort_scenario() {
    let trace = generate(Algorithm::Counting, &[4, 2, 1, 4, 1, 3, 2, 1]);
    match trace.last().map(|s| &s.detail) {
        Some(Detail::Counting(step)) => {
            let output: Vec<i64> = step.output.iter().flatten().copied().collect();
            assert_eq!(output, vec![1, 1, 1, 2, 2, 3, 4, 4]);
            assert!(step.output.iter().all(Option::is_some));
        }
        other => panic!("expected a counting step, got {:?}", other),
    }
}

#[test]
fn test_quick_sort_scenario() {
    let trace = generate(Algorithm::Quick, &[6, 5, 3, 1, 8, 7, 2, 4]);
    let first_pivot = trace.iter().find_map(|s| match &s.detail {
        Detail::Quick(step) => step.pivot,
        _ => None,
    });
    assert_eq!(first_pivot, Some(4));
}

#[test]
fn test_captions_are_never_empty() {
    for algorithm in Algorithm::ALL {
        let trace = generate(algorithm, algorithm.default_input());
        for snapshot in &trace {
            assert!(!snapshot.describe().is_empty(), "{}", algorithm);
        }
        assert_eq!(
            trace.first().map(|s| s.describe()),
            Some("Initial array".to_string()),
            "{}",
            algorithm
        );
        assert_eq!(
            trace.last().map(|s| s.describe()),
            Some("Array is sorted".to_string()),
            "{}",
            algorithm
        );
    }
}

#[test]
fn test_closure_source() {
    let reversed = |input: &[i64]| -> Result<Trace, TraceError> {
        let mut values = input.to_vec();
        values.reverse();
        sorts::generate(Algorithm::Merge, &values)
    };
    let trace = reversed.generate(&[1, 2, 3]).expect("valid input");
    assert_eq!(trace.input(), &[3, 2, 1]);
    assert_eq!(trace.last().map(|s| s.array.clone()), Some(vec![1, 2, 3]));
}
