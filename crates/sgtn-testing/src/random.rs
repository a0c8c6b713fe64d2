//! Random fixture values.
//!
//! Every generator is an owned, explicitly seeded value. Nothing is shared
//! between tests, so parallel tests never contend on one source, and a run
//! can be replayed by pinning `SGTN_TEST_SEED`.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Seed derived from the wall clock, for runs without a pinned seed.
pub fn clock_seed() -> u64 {
    chrono::Utc::now()
        .timestamp_nanos_opt()
        .map(|n| n as u64)
        .unwrap_or_default()
}

/// Seeded generator for fixture integers and strings.
pub struct FixtureRng {
    rng: StdRng,
    seed: u64,
}

impl FixtureRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this generator started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[min, max)`.
    ///
    /// # Panics
    ///
    /// Panics if `max <= min`; an empty range is a bug in the calling test.
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        assert!(max > min, "random int range is empty: [{min}, {max})");
        self.rng.random_range(min..max)
    }

    /// `len` independent, uniformly drawn letters `a`-`z`.
    pub fn string(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(self.rng.random_range(b'a'..=b'z')))
            .collect()
    }
}
