//! Random-number capabilities
//!
//! Spawn decisions and spawn placement consume randomness through the
//! [`RandomSource`] trait rather than a global generator, so the foam
//! system can be replayed exactly in tests. Production hosts use
//! [`EntropySource`]; tests use [`ScriptedSource`] with a fixed sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Capability supplying uniform random values
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`
    fn next_unit(&mut self) -> f32;

    /// Uniform value between `a` and `b`
    ///
    /// The bounds may be given in either order; the range is normalized
    /// before sampling, so `sample_range(5.0, 2.0)` yields values in
    /// `[2, 5]`.
    fn sample_range(&mut self, a: f32, b: f32) -> f32 {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        lo + self.next_unit() * (hi - lo)
    }
}

/// [`RandomSource`] backed by a seedable PRNG
pub struct EntropySource {
    rng: StdRng,
}

impl EntropySource {
    /// Create a source seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a source from a fixed seed, for reproducible runs
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for EntropySource {
    fn next_unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }
}

/// [`RandomSource`] that plays back a fixed sequence of unit values
///
/// Once the sequence is exhausted it returns the fallback value (default
/// 0.5), which keeps spawn decisions inert and range samples at midpoint.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: VecDeque<f32>,
    fallback: f32,
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self {
            values: VecDeque::new(),
            fallback: 0.5,
        }
    }
}

impl ScriptedSource {
    /// Create a source that will return the given values in order
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            fallback: 0.5,
        }
    }

    /// Set the value returned after the scripted sequence runs out
    pub fn with_fallback(mut self, fallback: f32) -> Self {
        self.fallback = fallback;
        self
    }

    /// Number of scripted values not yet consumed
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f32 {
        self.values.pop_front().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_source_stays_in_unit_interval() {
        let mut source = EntropySource::from_seed(7);
        for _ in 0..1000 {
            let v = source.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_sample_range_within_bounds() {
        let mut source = EntropySource::from_seed(42);
        for _ in 0..1000 {
            let v = source.sample_range(0.05, 0.15);
            assert!((0.05..=0.15).contains(&v));
        }
    }

    #[test]
    fn test_sample_range_normalizes_inverted_bounds() {
        let mut source = EntropySource::from_seed(42);
        for _ in 0..1000 {
            let v = source.sample_range(5.0, 2.0);
            assert!((2.0..=5.0).contains(&v), "value {v} escaped [2, 5]");
        }
    }

    #[test]
    fn test_scripted_source_plays_back_in_order() {
        let mut source = ScriptedSource::new([0.1, 0.2, 0.3]);
        assert_eq!(source.remaining(), 3);
        assert_eq!(source.next_unit(), 0.1);
        assert_eq!(source.next_unit(), 0.2);
        assert_eq!(source.next_unit(), 0.3);
        assert_eq!(source.remaining(), 0);
        // Exhausted: fallback
        assert_eq!(source.next_unit(), 0.5);
    }

    #[test]
    fn test_scripted_source_midpoint_fallback_for_ranges() {
        let mut source = ScriptedSource::default();
        assert_eq!(source.sample_range(0.0, 2.0), 1.0);
    }
}
