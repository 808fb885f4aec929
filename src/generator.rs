//! Password generation.
//!
//! Builds a [`CharacterPool`] from the enabled classes and draws `length`
//! characters from it, each with an independent uniform index. Repeats are
//! allowed. The default random source is `rand::thread_rng()`; this tool is
//! not intended as a building block for security-sensitive secrets.

use std::fmt;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::models::{
    estimate_entropy_bits, CharacterPool, GenerationOptions, MAX_LENGTH, MIN_LENGTH,
};

/// Why generation could not proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// No character class was enabled
    EmptyPool,
    /// Requested length is outside the accepted range
    InvalidLength(usize),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPool => write!(f, "Cannot generate a password: no character set selected"),
            Self::InvalidLength(length) => write!(
                f,
                "Cannot generate a password of length {length}: must be between {MIN_LENGTH} and {MAX_LENGTH}"
            ),
        }
    }
}

impl std::error::Error for GenerateError {}

/// A password produced by one successful generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPassword {
    value: String,
    pool_size: usize,
}

impl GeneratedPassword {
    /// The password text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Always false for a generated password; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Size of the pool the password was drawn from.
    #[must_use]
    pub const fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Estimated entropy in bits.
    #[must_use]
    pub fn entropy_bits(&self) -> f64 {
        estimate_entropy_bits(self.len(), self.pool_size)
    }

    /// Consumes the password and returns the text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }
}

/// Draws passwords from a random source.
///
/// Generic over the RNG so tests and `--seed` can use a reproducible
/// [`StdRng`].
#[derive(Debug, Clone)]
pub struct PasswordGenerator<R = ThreadRng> {
    rng: R,
}

impl PasswordGenerator<ThreadRng> {
    /// Generator backed by the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGenerator<StdRng> {
    /// Reproducible generator. Same seed and options yield the same password.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> PasswordGenerator<R> {
    /// Wraps an arbitrary RNG.
    pub const fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates one password for `options`.
    pub fn generate(
        &mut self,
        options: &GenerationOptions,
    ) -> Result<GeneratedPassword, GenerateError> {
        generate_with_rng(options, &mut self.rng)
    }
}

/// Generates one password using the thread-local RNG.
pub fn generate(options: &GenerationOptions) -> Result<GeneratedPassword, GenerateError> {
    generate_with_rng(options, &mut rand::thread_rng())
}

/// Generates one password drawing from `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<GeneratedPassword, GenerateError> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&options.length) {
        return Err(GenerateError::InvalidLength(options.length));
    }

    let pool = CharacterPool::from_options(options);
    if pool.is_empty() {
        return Err(GenerateError::EmptyPool);
    }

    let mut value = String::with_capacity(options.length);
    for _ in 0..options.length {
        let Some(c) = pool.sample(rng) else {
            return Err(GenerateError::EmptyPool);
        };
        value.push(c);
    }

    debug!(
        length = options.length,
        pool_size = pool.len(),
        "generated password"
    );

    Ok(GeneratedPassword {
        value,
        pool_size: pool.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CharacterClass;

    #[test]
    fn test_lowercase_and_digits_scenario() {
        let options =
            GenerationOptions::with_classes(8, &[CharacterClass::Lowercase, CharacterClass::Digits]);
        let password = generate(&options).unwrap();

        assert_eq!(password.len(), 8);
        assert!(password
            .as_str()
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert_eq!(password.pool_size(), 36);
    }

    #[test]
    fn test_every_valid_length() {
        let mut generator = PasswordGenerator::seeded(7);
        let options = GenerationOptions::with_classes(MIN_LENGTH, &CharacterClass::ALL);
        for length in MIN_LENGTH..=MAX_LENGTH {
            let password = generator
                .generate(&GenerationOptions { length, ..options })
                .unwrap();
            assert_eq!(password.len(), length);
        }
    }

    #[test]
    fn test_empty_pool_is_an_error() {
        let options = GenerationOptions::with_classes(5, &[]);
        assert_eq!(generate(&options), Err(GenerateError::EmptyPool));
    }

    #[test]
    fn test_length_out_of_range() {
        let too_short = GenerationOptions::new(3);
        let too_long = GenerationOptions::new(17);
        assert_eq!(generate(&too_short), Err(GenerateError::InvalidLength(3)));
        assert_eq!(generate(&too_long), Err(GenerateError::InvalidLength(17)));
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let options = GenerationOptions::with_classes(16, &CharacterClass::ALL);
        let a = PasswordGenerator::seeded(1234).generate(&options).unwrap();
        let b = PasswordGenerator::seeded(1234).generate(&options).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_disabled_classes_never_appear() {
        let mut generator = PasswordGenerator::seeded(99);
        let options = GenerationOptions::with_classes(16, &[CharacterClass::Symbols]);
        for _ in 0..50 {
            let password = generator.generate(&options).unwrap();
            assert!(password
                .as_str()
                .chars()
                .all(|c| CharacterClass::of(c) == Some(CharacterClass::Symbols)));
        }
    }

    #[test]
    fn test_from_rng_uses_the_given_source() {
        // A constant source always picks index 0, the first pool character
        let rng = rand::rngs::mock::StepRng::new(0, 0);
        let mut generator = PasswordGenerator::from_rng(rng);

        let lowercase = GenerationOptions::new(MAX_LENGTH);
        let password = generator.generate(&lowercase).unwrap();
        assert_eq!(password.len(), MAX_LENGTH);
        assert_eq!(password.as_str(), "a".repeat(MAX_LENGTH));

        let mixed = GenerationOptions::with_classes(MIN_LENGTH, &CharacterClass::ALL);
        let password = generator.generate(&mixed).unwrap();
        assert_eq!(password.as_str(), "A".repeat(MIN_LENGTH));
    }

    #[test]
    fn test_entropy_matches_pool() {
        let options = GenerationOptions::with_classes(10, &[CharacterClass::Digits]);
        let password = generate(&options).unwrap();
        let expected = 10.0 * 10f64.log2();
        assert!((password.entropy_bits() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GenerateError::InvalidLength(20).to_string(),
            "Cannot generate a password of length 20: must be between 4 and 16"
        );
    }
}
