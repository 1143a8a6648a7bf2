//! Randomness capability used by [`Matrix::random`](crate::numerics::types::matrix::Matrix::random).
//!
//! Callers always pass the source in; nothing in the crate creates or holds
//! one, so tests can substitute a seeded generator or a scripted stub.

use rand::Rng;

/// Produces integers in a requested closed interval.
pub trait RandomSource {
    /// Return a value in `[min, max]`. Callers guarantee `min <= max`.
    fn next_in_range(&mut self, min: i32, max: i32) -> i32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_in_range(&mut self, min: i32, max: i32) -> i32 {
        self.gen_range(min..=max)
    }
}

/// Deterministic stand-in for a random generator, meant for tests and
/// reproducible demos.
///
/// Replays a fixed sequence, cycling when it runs out. Values outside the
/// requested interval are clamped into it rather than rejected, so the
/// output is not uniformly distributed.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<i32>,
    position: usize,
}

impl SequenceSource {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            position: 0,
        }
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for SequenceSource {
    fn next_in_range(&mut self, min: i32, max: i32) -> i32 {
        if self.values.is_empty() {
            self.position += 1;
            return min;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value.clamp(min, max)
    }
}
