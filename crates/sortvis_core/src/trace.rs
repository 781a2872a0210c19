//! Step tracer
//!
//! Runs one of the supported sorts over a copy of the input and records a
//! [`Step`] at every observable comparison, swap and partition event. The
//! output is a pure function of `(input, algorithm)`; every trace ends with
//! the terminal step.

use std::sync::Arc;

use crate::step::{ActivePair, Algorithm, QuickMeta, Step, Value};

/// Trace `input` with `algorithm`.
///
/// Never fails. Inputs of length 0 or 1 produce only the terminal step.
pub fn trace(input: &[Value], algorithm: Algorithm) -> Vec<Step> {
    let mut recorder = Recorder::new(input);
    match algorithm {
        Algorithm::Bubble => recorder.bubble(),
        Algorithm::Selection => recorder.selection(),
        Algorithm::Quick => recorder.quick_all(),
    }
    recorder.finish()
}

/// A trace together with the input it was produced from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    input: Arc<[Value]>,
    algorithm: Algorithm,
    steps: Arc<[Step]>,
}

impl Trace {
    pub fn new(input: impl Into<Arc<[Value]>>, algorithm: Algorithm) -> Self {
        let input = input.into();
        let steps: Arc<[Step]> = trace(&input, algorithm).into();
        tracing::debug!(
            algorithm = %algorithm,
            len = input.len(),
            steps = steps.len(),
            "traced input"
        );
        Self {
            input,
            algorithm,
            steps,
        }
    }

    /// The pre-trace input
    pub fn input(&self) -> &[Value] {
        &self.input
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a trace built by [`Trace::new`]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The last step, i.e. the fully sorted array
    pub fn terminal(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Trace the same input again (restart)
    pub fn retrace(&self) -> Self {
        Self::new(self.input.clone(), self.algorithm)
    }
}

/// Working state shared by the three tracers
struct Recorder {
    a: Vec<Value>,
    sorted: Vec<usize>,
    steps: Vec<Step>,
}

impl Recorder {
    fn new(input: &[Value]) -> Self {
        Self {
            a: input.to_vec(),
            sorted: Vec::new(),
            steps: Vec::new(),
        }
    }

    fn push(&mut self, active: &[usize], quick: Option<QuickMeta>) {
        self.steps.push(Step {
            values: self.a.clone(),
            active: ActivePair::from_slice(active),
            sorted: self.sorted.clone(),
            quick,
        });
    }

    fn finish(mut self) -> Vec<Step> {
        self.steps.push(Step::terminal(self.a));
        self.steps
    }

    fn bubble(&mut self) {
        let n = self.a.len();
        for i in 0..n.saturating_sub(1) {
            for j in 0..n - 1 - i {
                self.push(&[j, j + 1], None);
                if self.a[j] > self.a[j + 1] {
                    self.a.swap(j, j + 1);
                    self.push(&[j, j + 1], None);
                }
            }
            self.sorted.push(n - 1 - i);
        }
    }

    fn selection(&mut self) {
        let n = self.a.len();
        for i in 0..n.saturating_sub(1) {
            let mut min_idx = i;
            for j in i + 1..n {
                self.push(&[j, min_idx], None);
                if self.a[j] < self.a[min_idx] {
                    min_idx = j;
                }
            }
            self.a.swap(i, min_idx);
            self.sorted.push(i);
            self.push(&[i, min_idx], None);
        }
    }

    fn quick_all(&mut self) {
        if self.a.len() > 1 {
            self.quick(0, self.a.len() - 1);
        }
    }

    fn quick(&mut self, low: usize, high: usize) {
        if low >= high {
            return;
        }

        let pivot = self.partition(low, high);

        self.sorted.push(pivot);
        self.push(
            &[],
            Some(QuickMeta {
                low,
                high,
                pivot,
                scan: None,
                probe: None,
            }),
        );

        if pivot > low {
            self.quick(low, pivot - 1);
        }
        if pivot < high {
            self.quick(pivot + 1, high);
        }
    }

    /// Middle-element pivot, moved to `high` before scanning
    fn partition(&mut self, low: usize, high: usize) -> usize {
        let mid = low + (high - low) / 2;
        self.a.swap(mid, high);
        let pivot_value = self.a[high];
        let mut i = low;

        for j in low..high {
            let meta = QuickMeta {
                low,
                high,
                pivot: high,
                scan: Some(i),
                probe: Some(j),
            };
            self.push(&[j, high], Some(meta));
            if self.a[j] < pivot_value {
                self.a.swap(i, j);
                self.push(&[i, j], Some(meta));
                i += 1;
            }
        }

        self.a.swap(i, high);
        self.push(
            &[i, high],
            Some(QuickMeta {
                low,
                high,
                pivot: i,
                scan: Some(i),
                probe: Some(high),
            }),
        );
        i
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(steps: &[Step]) -> Vec<Vec<usize>> {
        steps.iter().map(|s| s.active.to_vec()).collect()
    }

    #[test]
    fn bubble_three_elements() {
        let steps = trace(&[5, 3, 1], Algorithm::Bubble);

        let values: Vec<Vec<Value>> = steps.iter().map(|s| s.values.clone()).collect();
        assert_eq!(
            values,
            vec![
                vec![5, 3, 1],
                vec![3, 5, 1],
                vec![3, 5, 1],
                vec![3, 1, 5],
                vec![3, 1, 5],
                vec![1, 3, 5],
                vec![1, 3, 5],
            ]
        );
        assert_eq!(
            pairs(&steps),
            vec![
                vec![0, 1],
                vec![0, 1],
                vec![1, 2],
                vec![1, 2],
                vec![0, 1],
                vec![0, 1],
                vec![],
            ]
        );
        assert!(steps[..4].iter().all(|s| s.sorted.is_empty()));
        assert_eq!(steps[4].sorted, vec![2]);
        assert_eq!(steps[5].sorted, vec![2]);
        assert_eq!(steps[6].sorted, vec![0, 1, 2]);
    }

    #[test]
    fn bubble_skips_second_step_without_swap() {
        let steps = trace(&[1, 2], Algorithm::Bubble);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].active.as_slice(), &[0, 1]);
        assert!(steps[1].is_terminal());
    }

    #[test]
    fn selection_two_elements() {
        let steps = trace(&[4, 2], Algorithm::Selection);
        assert_eq!(steps.len(), 3);

        assert_eq!(steps[0].values, vec![4, 2]);
        assert_eq!(steps[0].active.as_slice(), &[1, 0]);
        assert!(steps[0].sorted.is_empty());

        assert_eq!(steps[1].values, vec![2, 4]);
        assert_eq!(steps[1].active.as_slice(), &[0, 1]);
        assert_eq!(steps[1].sorted, vec![0]);

        assert_eq!(steps[2].values, vec![2, 4]);
        assert_eq!(steps[2].sorted, vec![0, 1]);
        assert!(steps[2].active.is_empty());
    }

    #[test]
    fn selection_tracks_running_minimum_in_active_pair() {
        let steps = trace(&[3, 1, 2], Algorithm::Selection);
        // i = 0: compare (1, 0), min moves to 1, then compare (2, 1)
        assert_eq!(steps[0].active.as_slice(), &[1, 0]);
        assert_eq!(steps[1].active.as_slice(), &[2, 1]);
        // swap 0 <-> 1
        assert_eq!(steps[2].values, vec![1, 3, 2]);
        assert_eq!(steps[2].active.as_slice(), &[0, 1]);
    }

    #[test]
    fn quick_two_elements() {
        let steps = trace(&[2, 1], Algorithm::Quick);
        // mid = 0 swapped to high: [1, 2], pivot value 2
        // j = 0: compare, 1 < 2 so swap(0, 0) and i = 1
        // pivot placed at 1, then marked sorted
        assert_eq!(steps.len(), 5);

        let first = steps[0].quick.unwrap();
        assert_eq!((first.low, first.high, first.pivot), (0, 1, 1));
        assert_eq!((first.scan, first.probe), (Some(0), Some(0)));
        assert_eq!(steps[0].active.as_slice(), &[0, 1]);
        assert_eq!(steps[0].values, vec![1, 2]);

        assert_eq!(steps[1].active.as_slice(), &[0, 0]);

        let placed = steps[2].quick.unwrap();
        assert_eq!(placed.pivot, 1);
        assert_eq!(steps[2].active.as_slice(), &[1, 1]);

        assert!(steps[3].active.is_empty());
        assert_eq!(steps[3].sorted, vec![1]);
        assert_eq!(steps[3].quick.unwrap().pivot, 1);
        assert_eq!(steps[3].quick.unwrap().scan, None);

        assert!(steps[4].is_terminal());
        assert_eq!(steps[4].values, vec![1, 2]);
    }

    #[test]
    fn quick_traces_left_partition_before_right() {
        let steps = trace(&[5, 4, 3, 2, 1], Algorithm::Quick);
        let fixed: Vec<usize> = steps
            .iter()
            .filter(|s| s.active.is_empty() && s.quick.is_some())
            .map(|s| s.quick.unwrap().pivot)
            .collect();
        // first pivot splits the array; every later left-side pivot is
        // reported before any right-side one
        let first = fixed[0];
        let rest = &fixed[1..];
        let split = rest.iter().position(|&p| p > first).unwrap_or(rest.len());
        assert!(rest[..split].iter().all(|&p| p < first));
        assert!(rest[split..].iter().all(|&p| p > first));
        assert_eq!(steps.last().unwrap().values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn short_inputs_yield_only_terminal_step() {
        for algorithm in Algorithm::ALL {
            let empty = trace(&[], algorithm);
            assert_eq!(empty.len(), 1);
            assert!(empty[0].is_terminal());
            assert!(empty[0].values.is_empty());

            let single = trace(&[7], algorithm);
            assert_eq!(single.len(), 1);
            assert_eq!(single[0].values, vec![7]);
            assert_eq!(single[0].sorted, vec![0]);
        }
    }

    #[test]
    fn trace_struct_keeps_input_and_retraces_identically() {
        let t = Trace::new(vec![9, 4, 7, 1], Algorithm::Quick);
        assert_eq!(t.input(), &[9, 4, 7, 1]);
        assert_eq!(t.terminal().unwrap().values, vec![1, 4, 7, 9]);
        assert!(!t.is_empty());
        assert_eq!(t.retrace(), t);
    }
}
