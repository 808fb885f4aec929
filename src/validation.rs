//! Field validation for the generator form.
//!
//! Length validation mirrors what the form shows inline: an empty field is
//! "required", anything that is not an integer is rejected, and the value
//! must lie within [`MIN_LENGTH`]..=[`MAX_LENGTH`]. The class rule is a
//! sibling check on the same layer: at least one class must be enabled.

use std::fmt;

use crate::models::{GenerationOptions, MAX_LENGTH, MIN_LENGTH};

/// Why a raw length input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthError {
    /// Field is empty or whitespace
    Required,
    /// Field does not parse as an integer
    NotANumber,
    /// Value is below [`MIN_LENGTH`]
    TooShort,
    /// Value is above [`MAX_LENGTH`]
    TooLong,
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "Length is required"),
            Self::NotANumber => write!(f, "Length must be a number"),
            Self::TooShort => write!(f, "Password should be at least {MIN_LENGTH} characters"),
            Self::TooLong => write!(f, "Password should not exceed {MAX_LENGTH} characters"),
        }
    }
}

impl std::error::Error for LengthError {}

/// Cross-field error raised when every class is switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassSelectionError {
    /// All four class flags are false
    NoClassSelected,
}

impl fmt::Display for ClassSelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoClassSelected => write!(f, "Select at least one character set"),
        }
    }
}

impl std::error::Error for ClassSelectionError {}

/// Validates a raw length field.
pub fn validate_length(raw: &str) -> Result<usize, LengthError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LengthError::Required);
    }

    // Parse as i64 so "-3" reports a bound error rather than "not a number"
    let value: i64 = trimmed.parse().map_err(|_| LengthError::NotANumber)?;

    if value < MIN_LENGTH as i64 {
        return Err(LengthError::TooShort);
    }
    if value > MAX_LENGTH as i64 {
        return Err(LengthError::TooLong);
    }

    usize::try_from(value).map_err(|_| LengthError::NotANumber)
}

/// Validates that at least one character class is enabled.
pub fn validate_classes(options: &GenerationOptions) -> Result<(), ClassSelectionError> {
    if options.has_any_class() {
        Ok(())
    } else {
        Err(ClassSelectionError::NoClassSelected)
    }
}

/// Validation state for the whole form.
///
/// Each field carries at most one error; the form may submit only when both are clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormErrors {
    /// Error on the length field
    pub length: Option<LengthError>,
    /// Error on the class toggles
    pub classes: Option<ClassSelectionError>,
}

impl FormErrors {
    /// Runs both validators against the current inputs.
    #[must_use]
    pub fn check(length_input: &str, options: &GenerationOptions) -> Self {
        Self {
            length: validate_length(length_input).err(),
            classes: validate_classes(options).err(),
        }
    }

    /// True if no field has an error.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length.is_none() && self.classes.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CharacterClass;

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(validate_length("4"), Ok(4));
        assert_eq!(validate_length("16"), Ok(16));
        assert_eq!(validate_length("3"), Err(LengthError::TooShort));
        assert_eq!(validate_length("17"), Err(LengthError::TooLong));
    }

    #[test]
    fn test_required_and_not_a_number() {
        assert_eq!(validate_length(""), Err(LengthError::Required));
        assert_eq!(validate_length("   "), Err(LengthError::Required));
        assert_eq!(validate_length("abc"), Err(LengthError::NotANumber));
        assert_eq!(validate_length("8.5"), Err(LengthError::NotANumber));
        assert_eq!(validate_length("1e1"), Err(LengthError::NotANumber));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(validate_length(" 12 "), Ok(12));
    }

    #[test]
    fn test_negative_and_huge_values_report_bounds() {
        assert_eq!(validate_length("-3"), Err(LengthError::TooShort));
        assert_eq!(validate_length("0"), Err(LengthError::TooShort));
        assert_eq!(validate_length("99999999999"), Err(LengthError::TooLong));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(LengthError::Required.to_string(), "Length is required");
        assert_eq!(
            LengthError::TooShort.to_string(),
            "Password should be at least 4 characters"
        );
        assert_eq!(
            LengthError::TooLong.to_string(),
            "Password should not exceed 16 characters"
        );
        assert_eq!(
            ClassSelectionError::NoClassSelected.to_string(),
            "Select at least one character set"
        );
    }

    #[test]
    fn test_validate_classes() {
        assert!(validate_classes(&GenerationOptions::new(8)).is_ok());
        let none = GenerationOptions::new(8).with_class(CharacterClass::Lowercase, false);
        assert_eq!(
            validate_classes(&none),
            Err(ClassSelectionError::NoClassSelected)
        );
    }

    #[test]
    fn test_form_errors_check_reports_both_fields() {
        let none = GenerationOptions::with_classes(0, &[]);
        let errors = FormErrors::check("2", &none);
        assert_eq!(errors.length, Some(LengthError::TooShort));
        assert_eq!(errors.classes, Some(ClassSelectionError::NoClassSelected));
        assert!(!errors.is_empty());

        let ok = FormErrors::check("8", &GenerationOptions::new(8));
        assert!(ok.is_empty());
    }

    #[test]
    fn test_revalidation_is_idempotent() {
        let options = GenerationOptions::new(10);
        let first = FormErrors::check("10", &options);
        let second = FormErrors::check("10", &options);
        assert_eq!(first, second);
    }
}
