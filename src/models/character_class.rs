//! Character classes and their fixed alphabets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Uppercase ASCII letters.
pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase ASCII letters.
pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
/// Decimal digits.
pub const DIGIT_CHARS: &str = "0123456789";
/// The fixed punctuation set used for symbols.
pub const SYMBOL_CHARS: &str = "!@#$%^&*()_+";

/// One of the four independently toggled alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    /// A-Z
    Uppercase,
    /// a-z
    Lowercase,
    /// 0-9
    Digits,
    /// `!@#$%^&*()_+`
    Symbols,
}

impl CharacterClass {
    /// All classes in pool order.
    ///
    /// The pool is always assembled in this order regardless of the order
    /// in which the user enabled the classes.
    pub const ALL: [Self; 4] = [
        Self::Uppercase,
        Self::Lowercase,
        Self::Digits,
        Self::Symbols,
    ];

    /// Returns the alphabet for this class.
    #[must_use]
    pub const fn alphabet(self) -> &'static str {
        match self {
            Self::Uppercase => UPPERCASE_CHARS,
            Self::Lowercase => LOWERCASE_CHARS,
            Self::Digits => DIGIT_CHARS,
            Self::Symbols => SYMBOL_CHARS,
        }
    }

    /// Human-readable label used by the form and CLI output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Uppercase => "Include uppercase letters",
            Self::Lowercase => "Include lowercase letters",
            Self::Digits => "Include numbers",
            Self::Symbols => "Include symbols",
        }
    }

    /// Checks whether `c` belongs to this class's alphabet.
    #[must_use]
    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    /// Finds the class owning `c`, if any. Alphabets are disjoint.
    #[must_use]
    pub fn of(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Digits => "digits",
            Self::Symbols => "symbols",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(CharacterClass::Uppercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Lowercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Digits.alphabet().len(), 10);
        assert_eq!(CharacterClass::Symbols.alphabet().len(), 12);
    }

    #[test]
    fn test_alphabets_are_disjoint() {
        for (i, a) in CharacterClass::ALL.iter().enumerate() {
            for b in &CharacterClass::ALL[i + 1..] {
                assert!(
                    !a.alphabet().chars().any(|c| b.contains(c)),
                    "{a} and {b} share characters"
                );
            }
        }
    }

    #[test]
    fn test_of_finds_owning_class() {
        assert_eq!(CharacterClass::of('Q'), Some(CharacterClass::Uppercase));
        assert_eq!(CharacterClass::of('q'), Some(CharacterClass::Lowercase));
        assert_eq!(CharacterClass::of('7'), Some(CharacterClass::Digits));
        assert_eq!(CharacterClass::of('+'), Some(CharacterClass::Symbols));
        assert_eq!(CharacterClass::of('~'), None);
    }

    #[test]
    fn test_pool_order() {
        assert_eq!(
            CharacterClass::ALL,
            [
                CharacterClass::Uppercase,
                CharacterClass::Lowercase,
                CharacterClass::Digits,
                CharacterClass::Symbols,
            ]
        );
    }
}
