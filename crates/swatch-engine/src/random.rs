//! Injected randomness for palette synthesis.
//!
//! Generation modes never reach for a global RNG. Callers pass a
//! [`RandomSource`]: the deterministic [`Xorshift32`] in tests and replays,
//! or [`EntropySource`] at the UI edge.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

// ---------------------------------------------------------------------------
// RandomSource
// ---------------------------------------------------------------------------

/// A source of uniformly distributed `u32` values.
///
/// Only [`next_u32`](Self::next_u32) is required; the range helpers are
/// derived from it so every source draws the same way.
pub trait RandomSource {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Random value in [0.0, 1.0].
    fn unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }

    /// Random integer in `lo..=hi`. Bounds may be given in either order.
    fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let span = u64::from(hi - lo) + 1;
        // span <= 2^32, so the remainder always fits back into u32.
        lo + (u64::from(self.next_u32()) % span) as u32
    }

    /// Pick a random element from a non-empty slice.
    ///
    /// # Panics
    ///
    /// Panics if `slice` is empty.
    fn pick<'a, T>(&mut self, slice: &'a [T]) -> &'a T {
        let idx = (self.next_u32() as usize) % slice.len();
        &slice[idx]
    }
}

impl<R: RandomSource> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

// ---------------------------------------------------------------------------
// Xorshift32: a minimal deterministic PRNG
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG, reproducible from a 32-bit seed.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Seed the generator. A zero seed is bumped to 1 (xorshift's fixed point).
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }
}

impl RandomSource for Xorshift32 {
    fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }
}

// ---------------------------------------------------------------------------
// EntropySource
// ---------------------------------------------------------------------------

/// Production randomness: a `StdRng` seeded from the operating system.
#[derive(Debug, Clone)]
pub struct EntropySource {
    rng: StdRng,
}

impl EntropySource {
    /// Seed from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seed from a fixed value (reproducible runs with the full-strength RNG).
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for EntropySource {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
