//! Property tests for the step tracer
//!
//! These tests verify, for arbitrary inputs and all three algorithms, that:
//! - Every trace ends with a terminal step holding the sorted input
//! - Every step is a permutation of the input
//! - Sorted indices only ever accumulate
//! - Quick sort annotations stay inside their partition
//! - Tracing is deterministic

use proptest::prelude::*;
use sortvis_core::{trace, Algorithm, Step, Value};

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Bubble),
        Just(Algorithm::Selection),
        Just(Algorithm::Quick),
    ]
}

fn input() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(-50i64..150, 0..40)
}

fn sorted_copy(values: &[Value]) -> Vec<Value> {
    let mut v = values.to_vec();
    v.sort_unstable();
    v
}

fn in_bounds(step: &Step) -> bool {
    let n = step.values.len();
    step.active.iter().all(|&i| i < n) && step.sorted.iter().all(|&i| i < n)
}

proptest! {
    #[test]
    fn trace_ends_sorted(values in input(), algorithm in algorithm()) {
        let steps = trace(&values, algorithm);
        prop_assert!(!steps.is_empty());

        let last = steps.last().unwrap();
        prop_assert!(last.active.is_empty());
        prop_assert_eq!(&last.sorted, &(0..values.len()).collect::<Vec<_>>());
        prop_assert_eq!(&last.values, &sorted_copy(&values));
    }

    #[test]
    fn every_step_is_a_permutation(values in input(), algorithm in algorithm()) {
        let expected = sorted_copy(&values);
        for step in trace(&values, algorithm) {
            prop_assert_eq!(step.values.len(), values.len());
            prop_assert_eq!(sorted_copy(&step.values), expected.clone());
            prop_assert!(in_bounds(&step));
            prop_assert!(step.active.len() <= 2);
        }
    }

    #[test]
    fn sorted_membership_is_monotonic(values in input(), algorithm in algorithm()) {
        let steps = trace(&values, algorithm);
        for pair in steps.windows(2) {
            for index in &pair[0].sorted {
                prop_assert!(pair[1].sorted.contains(index));
            }
        }
    }

    #[test]
    fn quick_annotations_stay_in_partition(values in input()) {
        for step in trace(&values, Algorithm::Quick) {
            let Some(meta) = step.quick else { continue };
            prop_assert!(meta.low <= meta.high);
            prop_assert!(meta.high < step.values.len());
            prop_assert!(meta.contains(meta.pivot));
            if let Some(scan) = meta.scan {
                prop_assert!(meta.contains(scan));
            }
            if let Some(probe) = meta.probe {
                prop_assert!(meta.contains(probe));
            }
        }
    }

    #[test]
    fn non_quick_steps_carry_no_annotation(values in input()) {
        for algorithm in [Algorithm::Bubble, Algorithm::Selection] {
            prop_assert!(trace(&values, algorithm).iter().all(|s| s.quick.is_none()));
        }
    }

    #[test]
    fn trace_is_deterministic(values in input(), algorithm in algorithm()) {
        prop_assert_eq!(trace(&values, algorithm), trace(&values, algorithm));
    }
}

#[test]
fn already_sorted_bubble_input_never_swaps() {
    let steps = trace(&[1, 2, 3, 4], Algorithm::Bubble);
    // 3 + 2 + 1 comparisons, no swap steps, then the terminal step
    assert_eq!(steps.len(), 7);
    assert!(steps.iter().all(|s| s.values == vec![1, 2, 3, 4]));
}

#[test]
fn selection_step_count_is_quadratic() {
    let n = 6;
    let values: Vec<Value> = (0..n).rev().collect();
    let steps = trace(&values, Algorithm::Selection);
    let comparisons = (n * (n - 1) / 2) as usize;
    let swaps = (n - 1) as usize;
    assert_eq!(steps.len(), comparisons + swaps + 1);
}

#[test]
fn duplicates_are_preserved() {
    for algorithm in Algorithm::ALL {
        let steps = trace(&[3, 1, 3, 1, 2], algorithm);
        assert_eq!(steps.last().unwrap().values, vec![1, 1, 2, 3, 3]);
    }
}
