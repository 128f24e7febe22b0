//! Injected randomness.
//!
//! Construction never touches a global generator. Callers hand in a
//! [`RandomSource`]; reproducibility is entirely a matter of how that source
//! was seeded. Concurrent runs must each own their source.

use std::collections::VecDeque;

use rand::prelude::*;

/// Bounded uniform integer draws.
pub trait RandomSource {
    /// Uniform draw from the closed range `[low, high]`. Requires `low <= high`.
    fn draw_inclusive(&mut self, low: i64, high: i64) -> i64;

    /// Uniform draw from the half-open range `[0, upper)`. Requires `upper > 0`.
    fn draw_below(&mut self, upper: i64) -> i64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn draw_inclusive(&mut self, low: i64, high: i64) -> i64 {
        (**self).draw_inclusive(low, high)
    }

    fn draw_below(&mut self, upper: i64) -> i64 {
        (**self).draw_below(upper)
    }
}

/// `StdRng` seeded from a `u64`. Same seed, same draws.
#[derive(Debug)]
pub struct SeededSource {
    seed: u64,
    rng: StdRng,
}

impl SeededSource {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed for an entropy-backed run. Log it to make the run reproducible.
    #[must_use]
    pub fn fresh_seed() -> u64 {
        rand::random::<u64>()
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededSource {
    fn draw_inclusive(&mut self, low: i64, high: i64) -> i64 {
        self.rng.random_range(low..=high)
    }

    fn draw_below(&mut self, upper: i64) -> i64 {
        self.rng.random_range(0..upper)
    }
}

/// Always returns the smallest value of the requested range.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumSource;

impl RandomSource for MinimumSource {
    fn draw_inclusive(&mut self, low: i64, _high: i64) -> i64 {
        low
    }

    fn draw_below(&mut self, _upper: i64) -> i64 {
        0
    }
}

/// Replays a fixed list of values, then falls back to range minimums.
///
/// Values are returned verbatim, even when they lie outside the requested
/// range. That lets tests drive admission checks that a well-behaved source
/// can never fail.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<i64>,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            script: values.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedSource {
    fn draw_inclusive(&mut self, low: i64, _high: i64) -> i64 {
        self.script.pop_front().unwrap_or(low)
    }

    fn draw_below(&mut self, _upper: i64) -> i64 {
        self.script.pop_front().unwrap_or(0)
    }
}

/// Counts draws made through an inner source.
#[derive(Debug, Clone, Default)]
pub struct CountingSource<R> {
    inner: R,
    draws: usize,
}

impl<R> CountingSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, draws: 0 }
    }

    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RandomSource> RandomSource for CountingSource<R> {
    fn draw_inclusive(&mut self, low: i64, high: i64) -> i64 {
        self.draws += 1;
        self.inner.draw_inclusive(low, high)
    }

    fn draw_below(&mut self, upper: i64) -> i64 {
        self.draws += 1;
        self.inner.draw_below(upper)
    }
}
