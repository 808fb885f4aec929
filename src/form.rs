//! Generator form state.
//!
//! The whole screen is one immutable [`FormState`] value. Every transition
//! consumes the current value and returns the next one, so generate and reset
//! can be tested without a terminal.

use rand::Rng;
use tracing::{debug, warn};

use crate::generator::{generate_with_rng, GenerateError, GeneratedPassword};
use crate::models::{CharacterClass, GenerationOptions, MAX_LENGTH};
use crate::validation::{validate_length, ClassSelectionError, FormErrors, LengthError};

/// Snapshot of the generator form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    length_input: String,
    include_lowercase: bool,
    include_uppercase: bool,
    include_digits: bool,
    include_symbols: bool,
    /// Length field was edited since the last reset
    length_touched: bool,
    /// A submit was attempted since the last reset
    submit_attempted: bool,
    errors: FormErrors,
    password: Option<GeneratedPassword>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Initial state: lowercase on, everything else off, length empty.
    #[must_use]
    pub fn new() -> Self {
        let state = Self {
            length_input: String::new(),
            include_lowercase: true,
            include_uppercase: false,
            include_digits: false,
            include_symbols: false,
            length_touched: false,
            submit_attempted: false,
            errors: FormErrors::default(),
            password: None,
        };
        state.revalidated()
    }

    /// Returns the defaults, dropping any password and error state.
    #[must_use]
    pub fn reset(self) -> Self {
        debug!("form reset");
        Self::new()
    }

    /// Replaces the raw length text and re-runs validation.
    #[must_use]
    pub fn with_length_input(mut self, input: impl Into<String>) -> Self {
        self.length_input = input.into();
        self.length_touched = true;
        self.revalidated()
    }

    /// Appends a typed character to the length field.
    ///
    /// Input is capped at a few characters; longer text can never be valid.
    #[must_use]
    pub fn push_length_char(self, c: char) -> Self {
        if self.length_input.chars().count() >= max_input_chars() {
            return self;
        }
        let mut input = self.length_input.clone();
        input.push(c);
        self.with_length_input(input)
    }

    /// Removes the last character of the length field.
    #[must_use]
    pub fn pop_length_char(self) -> Self {
        let mut input = self.length_input.clone();
        input.pop();
        self.with_length_input(input)
    }

    /// Flips one class toggle.
    #[must_use]
    pub fn toggle(self, class: CharacterClass) -> Self {
        let enabled = !self.includes(class);
        self.with_class(class, enabled)
    }

    /// Sets one class toggle.
    #[must_use]
    pub fn with_class(mut self, class: CharacterClass, enabled: bool) -> Self {
        match class {
            CharacterClass::Uppercase => self.include_uppercase = enabled,
            CharacterClass::Lowercase => self.include_lowercase = enabled,
            CharacterClass::Digits => self.include_digits = enabled,
            CharacterClass::Symbols => self.include_symbols = enabled,
        }
        self.revalidated()
    }

    /// Attempts to generate a password.
    ///
    /// Blocked while any field is invalid; the errors become visible and the
    /// previous password, if any, is kept.
    #[must_use]
    pub fn submit<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.submit_attempted = true;
        self = self.revalidated();

        let Some(options) = self.options() else {
            debug!(errors = ?self.errors, "submit blocked by validation");
            return self;
        };

        match generate_with_rng(&options, rng) {
            Ok(password) => {
                self.password = Some(password);
            }
            Err(GenerateError::EmptyPool) => {
                warn!("generator reported an empty pool after validation passed");
                self.errors.classes = Some(ClassSelectionError::NoClassSelected);
            }
            Err(GenerateError::InvalidLength(length)) => {
                warn!(length, "generator rejected a validated length");
                self.errors.length = Some(if length > MAX_LENGTH {
                    LengthError::TooLong
                } else {
                    LengthError::TooShort
                });
            }
        }
        self
    }

    /// Validated options, or `None` while any field is invalid.
    #[must_use]
    pub fn options(&self) -> Option<GenerationOptions> {
        let length = validate_length(&self.length_input).ok()?;
        let options = self.flags(length);
        options.has_any_class().then_some(options)
    }

    /// True while submission is allowed.
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        self.errors.is_empty()
    }

    /// Current raw length text.
    #[must_use]
    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    /// Whether `class` is toggled on.
    #[must_use]
    pub const fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Digits => self.include_digits,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    /// All current validation errors, shown or not.
    #[must_use]
    pub const fn errors(&self) -> FormErrors {
        self.errors
    }

    /// Errors the UI should display.
    ///
    /// The length error appears once the field was edited or a submit was
    /// attempted. The class error appears as soon as it exists.
    #[must_use]
    pub fn visible_errors(&self) -> FormErrors {
        FormErrors {
            length: self
                .errors
                .length
                .filter(|_| self.length_touched || self.submit_attempted),
            classes: self.errors.classes,
        }
    }

    /// Most recent generated password.
    #[must_use]
    pub const fn password(&self) -> Option<&GeneratedPassword> {
        self.password.as_ref()
    }

    fn flags(&self, length: usize) -> GenerationOptions {
        GenerationOptions {
            include_lowercase: self.include_lowercase,
            include_uppercase: self.include_uppercase,
            include_digits: self.include_digits,
            include_symbols: self.include_symbols,
            length,
        }
    }

    fn revalidated(mut self) -> Self {
        self.errors = FormErrors::check(&self.length_input, &self.flags(0));
        self
    }
}

/// Longest length text the field accepts.
fn max_input_chars() -> usize {
    MAX_LENGTH.to_string().len() + 1
}
