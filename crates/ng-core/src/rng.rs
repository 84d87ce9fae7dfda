//! Random number generation
//!
//! Uses a seeded ChaCha RNG so a run can be reproduced from its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Game random number generator
///
/// Wraps ChaCha8Rng and remembers the seed it was built from, so a logged
/// seed is enough to replay the same secret numbers.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw from `lo..=hi`.
    ///
    /// Returns `lo` if the range is empty.
    pub fn range_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Returns 0..n-1, or 0 if n is 0
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.rn2(items.len() as u32) as usize])
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_inclusive_bounds() {
        let mut rng = GameRng::new(42);
        let mut saw_lo = false;
        let mut saw_hi = false;
        for _ in 0..2000 {
            let n = rng.range_inclusive(1, 10);
            assert!((1..=10).contains(&n));
            saw_lo |= n == 1;
            saw_hi |= n == 10;
        }
        assert!(saw_lo && saw_hi, "both ends of the range should be reachable");
    }

    #[test]
    fn test_range_inclusive_negative() {
        let mut rng = GameRng::new(7);
        for _ in 0..500 {
            let n = rng.range_inclusive(-5, -1);
            assert!((-5..=-1).contains(&n));
        }
    }

    #[test]
    fn test_empty_range() {
        let mut rng = GameRng::new(42);
        assert_eq!(rng.range_inclusive(5, 5), 5);
        assert_eq!(rng.range_inclusive(9, 3), 9);
        assert_eq!(rng.rn2(0), 0);
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.range_inclusive(1, 200), rng2.range_inclusive(1, 200));
        }
        assert_eq!(rng1.seed(), 42);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(3);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());

        let items = [1, 2, 3];
        for _ in 0..50 {
            assert!(items.contains(rng.choose(&items).unwrap()));
        }
    }
}
