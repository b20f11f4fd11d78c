//! Deterministic random source used by every profile.
//!
//! A non-zero seed drives a [`ChaCha8Rng`], whose output stream is stable
//! across platforms and releases, so identical seeds reproduce identical
//! names everywhere. A zero seed requests a wall-clock seeded source that is
//! deliberately non-reproducible.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::pick::pick;

/// Seed value that requests a time-seeded, non-reproducible source.
pub const RANDOM_SEED: u64 = 0;

static TIME_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Odd 64-bit constant used to spread the counter across the seed bits.
const COUNTER_SPREAD: u64 = 0x9E37_79B9_7F4A_7C15;

/// A seeded source of uniform draws.
///
/// # Example
///
/// ```
/// use namegen::RandomSource;
///
/// let mut first = RandomSource::new(42);
/// let mut second = RandomSource::new(42);
///
/// let a: Vec<usize> = (0..5).map(|_| first.index(10)).collect();
/// let b: Vec<usize> = (0..5).map(|_| second.index(10)).collect();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct RandomSource {
    inner: ChaCha8Rng,
    deterministic: bool,
}

impl RandomSource {
    /// Creates a source from a seed; `0` selects a time-seeded source.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        if seed == RANDOM_SEED {
            return Self::from_time();
        }
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            deterministic: true,
        }
    }

    /// Creates a source seeded from the current time.
    ///
    /// A process-wide counter is folded into the seed so two sources created
    /// within the same clock tick still diverge.
    #[must_use]
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| {
                elapsed
                    .as_secs()
                    .wrapping_mul(1_000_000_000)
                    .wrapping_add(u64::from(elapsed.subsec_nanos()))
            });
        let counter = TIME_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
        let seed = nanos ^ counter.wrapping_add(1).wrapping_mul(COUNTER_SPREAD);
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            deterministic: false,
        }
    }

    /// Returns `true` when the source replays the same sequence for the same
    /// seed.
    #[must_use]
    pub const fn is_deterministic(&self) -> bool {
        self.deterministic
    }

    /// Returns a uniform index in `[0, n)`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero. Callers hold static tables, so an empty range
    /// is a defect in the table, not a runtime condition.
    pub fn index(&mut self, n: usize) -> usize {
        assert!(n > 0, "RandomSource::index: empty range");
        self.inner.random_range(0..n)
    }

    /// Returns a uniform percentage roll in `[0, 100)`.
    pub fn percent(&mut self) -> u32 {
        self.inner.random_range(0..100)
    }

    /// Returns `true` with probability `pct` percent.
    pub fn chance(&mut self, pct: u32) -> bool {
        self.percent() < pct
    }

    /// Returns a uniform value in `[min, max]`; `min` when the range is
    /// empty or degenerate.
    pub fn between(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.inner.random_range(min..=max)
    }

    /// Picks one candidate uniformly.
    ///
    /// # Panics
    ///
    /// Panics if `candidates` is empty; see [`pick`].
    pub fn pick<'a, T>(&mut self, candidates: &'a [T]) -> &'a T {
        pick(candidates, Some(self))
    }
}
