//! Input generation
//!
//! Sources of element sequences to trace. The tracer itself accepts any
//! finite sequence; the bounds here only apply to generated data.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::step::Value;

/// Smallest generated input
pub const MIN_SIZE: usize = 5;
/// Largest generated input
pub const MAX_SIZE: usize = 100;
pub const DEFAULT_SIZE: usize = 20;
/// Generated values are drawn from `1..=DEFAULT_MAX_VALUE` unless configured
pub const DEFAULT_MAX_VALUE: Value = 100;

/// Clamp a requested input length to the generator bounds
pub fn clamp_size(size: usize) -> usize {
    size.clamp(MIN_SIZE, MAX_SIZE)
}

/// Produces element sequences on demand
pub trait InputSource {
    fn generate(&mut self, len: usize) -> Vec<Value>;
}

/// Uniformly random positive integers
pub struct RandomInput {
    rng: StdRng,
    max_value: Value,
}

impl RandomInput {
    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_value: DEFAULT_MAX_VALUE,
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            max_value: DEFAULT_MAX_VALUE,
        }
    }

    /// Largest value to draw; anything below 1 is raised to 1
    pub fn with_max_value(mut self, max_value: Value) -> Self {
        self.max_value = max_value.max(1);
        self
    }

    pub fn max_value(&self) -> Value {
        self.max_value
    }
}

impl InputSource for RandomInput {
    fn generate(&mut self, len: usize) -> Vec<Value> {
        (0..len)
            .map(|_| self.rng.gen_range(1..=self.max_value))
            .collect()
    }
}

/// A fixed sequence, repeated or truncated to the requested length
#[derive(Clone, Debug)]
pub struct FixedInput {
    values: Vec<Value>,
}

impl FixedInput {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl InputSource for FixedInput {
    fn generate(&mut self, len: usize) -> Vec<Value> {
        if self.values.is_empty() {
            return Vec::new();
        }
        self.values.iter().copied().cycle().take(len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_input_is_reproducible_and_in_range() {
        let a = RandomInput::seeded(7).generate(50);
        let b = RandomInput::seeded(7).generate(50);
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
        assert!(a.iter().all(|v| (1..=DEFAULT_MAX_VALUE).contains(v)));
    }

    #[test]
    fn max_value_is_respected() {
        let mut source = RandomInput::seeded(1).with_max_value(3);
        assert!(source.generate(40).iter().all(|v| (1..=3).contains(v)));

        let source = RandomInput::seeded(1).with_max_value(-5);
        assert_eq!(source.max_value(), 1);
    }

    #[test]
    fn fixed_input_cycles_to_length() {
        let mut source = FixedInput::new(vec![5, 3, 1]);
        assert_eq!(source.generate(3), vec![5, 3, 1]);
        assert_eq!(source.generate(5), vec![5, 3, 1, 5, 3]);
        assert_eq!(source.generate(2), vec![5, 3]);
        assert!(FixedInput::new(Vec::new()).generate(4).is_empty());
    }

    #[test]
    fn size_is_clamped_to_slider_bounds() {
        assert_eq!(clamp_size(0), MIN_SIZE);
        assert_eq!(clamp_size(42), 42);
        assert_eq!(clamp_size(1_000), MAX_SIZE);
    }
}
