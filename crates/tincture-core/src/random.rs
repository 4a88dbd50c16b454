//! Injectable uniform random integers.
//!
//! All randomized generation in Tincture draws from a [`RandomSource`] passed
//! in by the caller, so a test can substitute a [`SequenceRandom`] and get the
//! same colors every run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Return an integer in `[min, max]`, both ends inclusive.
    ///
    /// Reversed bounds are swapped.
    fn next_in_range(&mut self, min: i64, max: i64) -> i64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in_range(&mut self, min: i64, max: i64) -> i64 {
        (**self).next_in_range(min, max)
    }
}

#[inline]
fn ordered(min: i64, max: i64) -> (i64, i64) {
    if min <= max { (min, max) } else { (max, min) }
}

/// The process-wide thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_in_range(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = ordered(min, max);
        rand::thread_rng().gen_range(lo..=hi)
    }
}

/// A reproducible generator seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a generator from a seed. Equal seeds give equal sequences.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_in_range(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = ordered(min, max);
        self.rng.gen_range(lo..=hi)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Each value is clamped into the requested range, so a sequence of zeros
/// always yields the lower bound and a sequence of `i64::MAX` the upper one.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<i64>,
    cursor: usize,
}

impl SequenceRandom {
    /// Create a source from the given values.
    ///
    /// An empty sequence behaves like a single `0`.
    pub fn new(values: impl Into<Vec<i64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn next_in_range(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = ordered(min, max);
        let raw = if self.values.is_empty() {
            0
        } else {
            self.values[self.cursor % self.values.len()]
        };
        self.cursor += 1;
        raw.clamp(lo, hi)
    }
}

/// Fisher-Yates (Knuth) shuffle, in place.
///
/// Walks from the last index down to 1, swapping each position `i` with a
/// uniformly chosen `j` in `[0, i]`.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_in_range(0, i as i64) as usize;
        if i != j {
            items.swap(i, j);
        }
    }
}
