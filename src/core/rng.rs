//! Session-owned random number generation.
//!
//! Every `GameState` owns one `GameRng`; nothing in the engine reaches for a
//! global or thread-local generator, so independent sessions never share
//! random state. The only consumer is deck shuffling.
//!
//! ```
//! use hex_legends::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut deck_a = vec![1, 2, 3, 4, 5];
//! let mut deck_b = deck_a.clone();
//! a.shuffle(&mut deck_a);
//! b.shuffle(&mut deck_b);
//! assert_eq!(deck_a, deck_b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic, seedable RNG.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the wall clock, the current thread, and a
    /// stack address.
    ///
    /// Two sessions created at the same instant on different threads still
    /// get different seeds.
    #[must_use]
    pub fn from_entropy() -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::time::{SystemTime, UNIX_EPOCH};

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let marker = 0u8;
        let stack_addr = std::ptr::addr_of!(marker) as usize;

        let mut hasher = DefaultHasher::new();
        nanos.hash(&mut hasher);
        std::thread::current().id().hash(&mut hasher);
        stack_addr.hash(&mut hasher);

        Self::new(hasher.finish())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range(0..1000), rng2.gen_range(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(GameRng::new(7).seed(), 7);
    }

    #[test]
    fn test_entropy_sessions_are_independent() {
        let handle = std::thread::spawn(|| GameRng::from_entropy().seed());
        let here = GameRng::from_entropy().seed();
        let there = handle.join().unwrap();
        assert_ne!(here, there);
    }
}
