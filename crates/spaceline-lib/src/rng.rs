//! Injectable random sources for ticket generation.
//!
//! Generation never touches process-wide random state. Callers hand a
//! [`RandomSource`] to the generator, so tests can seed it (or script it)
//! and get the same table every time.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform integer sampling used by the table generator.
///
/// Bounds follow the half-open convention: [`RandomSource::next_below`]
/// returns a value in `[0, bound)`. Implementations return `0` when
/// `bound` is `0`.
pub trait RandomSource {
    /// Draw a value uniformly from `[0, bound)`.
    fn next_below(&mut self, bound: u32) -> u32;

    /// Draw a value uniformly from `[min, max]`, inclusive at both ends.
    ///
    /// Consumes exactly one [`RandomSource::next_below`] draw with
    /// `bound = max - min + 1`.
    fn next_in_range(&mut self, min: u32, max: u32) -> u32 {
        let span = max.saturating_sub(min).saturating_add(1);
        min + self.next_below(span)
    }

    /// Fair coin: `true` when a draw over `{0, 1}` comes up `1`.
    fn coin_flip(&mut self) -> bool {
        self.next_below(2) == 1
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}

/// ChaCha8-backed source, deterministic for a given seed on every platform.
#[derive(Debug, Clone)]
pub struct SeededSource(ChaCha8Rng);

impl SeededSource {
    /// Create a source whose stream is fully determined by `seed`.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Create a source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}

impl RandomSource for SeededSource {
    fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.0.gen_range(0..bound)
    }
}
