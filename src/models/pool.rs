//! Character pool assembled from the enabled classes.

use rand::Rng;

use super::{CharacterClass, GenerationOptions};

/// Ordered sampling universe for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    /// Builds the pool for the enabled classes of `options`.
    ///
    /// Alphabets are concatenated uppercase, lowercase, digits, symbols.
    #[must_use]
    pub fn from_options(options: &GenerationOptions) -> Self {
        Self::from_classes(&options.enabled_classes())
    }

    /// Builds a pool from an explicit class list, still in pool order.
    #[must_use]
    pub fn from_classes(classes: &[CharacterClass]) -> Self {
        let chars = CharacterClass::ALL
            .into_iter()
            .filter(|class| classes.contains(class))
            .flat_map(|class| class.alphabet().chars())
            .collect();
        Self { chars }
    }

    /// Number of characters in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True if no class was enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The pool contents in order.
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Whether `c` can be drawn from this pool.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Draws one character with a uniform index. `None` for an empty pool.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<char> {
        if self.chars.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.chars.len());
        Some(self.chars[index])
    }

    /// Estimated entropy in bits of a `length` character password drawn from this pool.
    #[must_use]
    pub fn entropy_bits(&self, length: usize) -> f64 {
        estimate_entropy_bits(length, self.len())
    }
}

/// `length * log2(pool_len)`; zero when either side is empty.
#[must_use]
pub fn estimate_entropy_bits(length: usize, pool_len: usize) -> f64 {
    if length == 0 || pool_len == 0 {
        return 0.0;
    }
    length as f64 * (pool_len as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pool_order_is_fixed() {
        let pool = CharacterPool::from_classes(&[CharacterClass::Digits, CharacterClass::Uppercase]);
        let expected: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
        assert_eq!(pool.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_full_pool_size() {
        let pool = CharacterPool::from_classes(&CharacterClass::ALL);
        assert_eq!(pool.len(), 26 + 26 + 10 + 12);
    }

    #[test]
    fn test_empty_pool() {
        let options = GenerationOptions::with_classes(5, &[]);
        let pool = CharacterPool::from_options(&options);
        assert!(pool.is_empty());

        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pool.sample(&mut rng), None);
    }

    #[test]
    fn test_sample_stays_in_pool() {
        let pool = CharacterPool::from_classes(&[CharacterClass::Symbols]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let c = pool.sample(&mut rng).unwrap();
            assert!(pool.contains(c));
        }
    }

    #[test]
    fn test_entropy_bits() {
        // 16 chars from a 64-symbol pool is exactly 96 bits
        assert!((estimate_entropy_bits(16, 64) - 96.0).abs() < f64::EPSILON);
        assert!(estimate_entropy_bits(0, 26).abs() < f64::EPSILON);
        assert!(estimate_entropy_bits(8, 0).abs() < f64::EPSILON);

        let pool = CharacterPool::from_classes(&[CharacterClass::Digits]);
        let expected = 4.0 * 10f64.log2();
        assert!((pool.entropy_bits(4) - expected).abs() < 1e-9);
    }
}
