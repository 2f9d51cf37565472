use fastrand::Rng;

/// Uniform randomness used to pick corrupting offsets and byte values.
///
/// These two draws are the only non-determinism in the engine, so a
/// seeded implementation makes the exact set of altered offsets and
/// values reproducible in tests.
pub trait RandomSource {
    /// Uniform draw over `[0, bound)`.
    fn offset(&mut self, bound: u64) -> u64;

    /// Uniform byte value over the full `0..=255` range.
    fn byte(&mut self) -> u8;
}

/// Source backed by `fastrand`.
///
/// Not cryptographically secure; fault injection doesn't need it to be.
pub struct FastRandom(Rng);

impl FastRandom {
    pub fn new() -> Self {
        Self(Rng::new())
    }

    /// Deterministic generator, same seed gives same draw sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self(Rng::with_seed(seed))
    }
}

impl Default for FastRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastRandom {
    fn offset(&mut self, bound: u64) -> u64 {
        self.0.u64(..bound)
    }

    fn byte(&mut self) -> u8 {
        self.0.u8(..)
    }
}
