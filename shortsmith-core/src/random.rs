//! Randomness capability for the generators.
//!
//! Every uniform draw and every fresh id goes through a [`RandomSource`], so
//! a run can be reproduced from a seed and tests can script the draws.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// Source of uniform choices and opaque ids.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    /// A fresh opaque id, unique within one generation call.
    fn token(&mut self) -> String;

    /// Pick one item uniformly.
    ///
    /// Callers only pass the fixed, non-empty catalogs or keyword lists that
    /// already fall back to the niche.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        &items[self.index(items.len())]
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }

    fn token(&mut self) -> String {
        (**self).token()
    }
}

/// Thread-local OS-seeded randomness with UUID v4 ids.
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn token(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Seeded randomness. The same seed replays the same draws and ids.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn token(&mut self) -> String {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string()
    }
}
