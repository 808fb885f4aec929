//! Generation options consumed by the password generator.

use serde::{Deserialize, Serialize};

use super::CharacterClass;

/// Shortest password the generator accepts.
pub const MIN_LENGTH: usize = 4;
/// Longest password the generator accepts.
pub const MAX_LENGTH: usize = 16;

/// Validated input for a single generation run.
///
/// `length` must lie in [`MIN_LENGTH`]..=[`MAX_LENGTH`] and at least one
/// class must be enabled; the generator rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Include a-z
    pub include_lowercase: bool,
    /// Include A-Z
    pub include_uppercase: bool,
    /// Include 0-9
    pub include_digits: bool,
    /// Include the symbol set
    pub include_symbols: bool,
    /// Number of characters to draw
    pub length: usize,
}

impl GenerationOptions {
    /// Creates options with only lowercase enabled.
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self {
            include_lowercase: true,
            include_uppercase: false,
            include_digits: false,
            include_symbols: false,
            length,
        }
    }

    /// Creates options with exactly the given classes enabled.
    #[must_use]
    pub fn with_classes(length: usize, classes: &[CharacterClass]) -> Self {
        let mut options = Self {
            include_lowercase: false,
            include_uppercase: false,
            include_digits: false,
            include_symbols: false,
            length,
        };
        for class in classes {
            options = options.with_class(*class, true);
        }
        options
    }

    /// Returns a copy with `class` switched on or off.
    #[must_use]
    pub fn with_class(mut self, class: CharacterClass, enabled: bool) -> Self {
        match class {
            CharacterClass::Uppercase => self.include_uppercase = enabled,
            CharacterClass::Lowercase => self.include_lowercase = enabled,
            CharacterClass::Digits => self.include_digits = enabled,
            CharacterClass::Symbols => self.include_symbols = enabled,
        }
        self
    }

    /// Whether `class` is enabled.
    #[must_use]
    pub const fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Digits => self.include_digits,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    /// Enabled classes in pool order.
    #[must_use]
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }

    /// True if at least one class is enabled.
    #[must_use]
    pub const fn has_any_class(&self) -> bool {
        self.include_lowercase || self.include_uppercase || self.include_digits || self.include_symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_lowercase_only() {
        let options = GenerationOptions::new(8);
        assert!(options.include_lowercase);
        assert!(!options.include_uppercase);
        assert!(!options.include_digits);
        assert!(!options.include_symbols);
        assert_eq!(options.length, 8);
    }

    #[test]
    fn test_with_classes_enables_only_given() {
        let options =
            GenerationOptions::with_classes(10, &[CharacterClass::Digits, CharacterClass::Symbols]);
        assert_eq!(
            options.enabled_classes(),
            vec![CharacterClass::Digits, CharacterClass::Symbols]
        );
        assert!(!options.includes(CharacterClass::Lowercase));
    }

    #[test]
    fn test_enabled_classes_follow_pool_order() {
        let options = GenerationOptions::with_classes(
            6,
            &[CharacterClass::Symbols, CharacterClass::Lowercase, CharacterClass::Uppercase],
        );
        assert_eq!(
            options.enabled_classes(),
            vec![
                CharacterClass::Uppercase,
                CharacterClass::Lowercase,
                CharacterClass::Symbols
            ]
        );
    }

    #[test]
    fn test_has_any_class() {
        assert!(GenerationOptions::new(4).has_any_class());
        assert!(!GenerationOptions::with_classes(4, &[]).has_any_class());
        let toggled_off = GenerationOptions::new(4).with_class(CharacterClass::Lowercase, false);
        assert!(!toggled_off.has_any_class());
    }
}
