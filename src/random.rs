// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use rand::{
    rngs::SmallRng,
    Rng,
    SeedableRng,
};

use crate::errs::SkipListError;

/// A source of independent draws uniformly distributed over `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<SmallRng> {
    /// A fast, non-cryptographic source seeded from the operating system.
    pub fn from_entropy() -> Self {
        RngSource::new(SmallRng::from_entropy())
    }

    /// A reproducible source for benchmarks and debugging.
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed sequence of draws, wrapping back to the start once the
/// sequence is exhausted.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    sequence: Vec<f64>,
    idx: usize,
}

impl SequenceSource {
    pub fn new(sequence: impl Into<Vec<f64>>) -> Result<Self, SkipListError> {
        let sequence = sequence.into();
        if sequence.is_empty() {
            return Err(SkipListError::EmptySequence);
        }
        if let Some(bad) = sequence.iter().find(|v| !(0.0..1.0).contains(*v)) {
            return Err(SkipListError::DrawOutOfRange(*bad));
        }
        Ok(SequenceSource { sequence, idx: 0 })
    }

    /// How many values have been drawn so far.
    pub fn draws(&self) -> usize {
        self.idx
    }
}

impl RandomSource for SequenceSource {
    fn next_f64(&mut self) -> f64 {
        let res = self.sequence[self.idx % self.sequence.len()];
        self.idx += 1;
        res
    }
}
