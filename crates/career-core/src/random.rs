//! Random Source
//!
//! Uniform draws consumed by action effects, the event generator, and the
//! election resolver. The session owns one source; tests inject a scripted
//! one so traces are reproducible without a seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws.
///
/// Only `next_unit` is required; every other draw is derived from it so a
/// scripted source controls the whole sequence.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform draw in `[low, high)`
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_unit()
    }

    /// Uniform integer in `[low, high)`. Returns `low` for an empty range.
    fn int_range(&mut self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        let span = high - low;
        let offset = (self.next_unit() * span as f64).floor() as i64;
        low + offset.clamp(0, span - 1)
    }

    /// True with probability `p`
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }

    /// Uniform index into a collection of `len` items (0 when empty)
    fn pick(&mut self, len: usize) -> usize {
        self.int_range(0, len as i64) as usize
    }
}

/// Seeded production source
#[derive(Debug, Clone)]
pub struct SimRng(pub SmallRng);

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Returns the same unit value forever.
///
/// `FixedRandom(0.5)` turns every symmetric noise draw into exactly zero and
/// never fires a 10% chance.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        clamp_unit(self.0)
    }
}

/// Cycles through a scripted list of unit values
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        clamp_unit(value)
    }
}

/// Keep scripted values inside `[0, 1)`
fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0 - f64::EPSILON)
}
