//! Validation rules and error types

use super::field::FieldKey;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Minimum number of characters in a name
pub const NAME_MIN_LENGTH: usize = 2;

/// A single user-input validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("value is required")]
    Required,
    #[error("value must have at least {min} characters")]
    TooShort { min: usize },
    #[error("value may only contain letters and spaces")]
    InvalidCharacter,
    #[error("value must contain only digits")]
    NonNumeric,
}

impl ValidationError {
    /// User-facing message for this error on the given field
    pub fn message(&self, field: FieldKey) -> String {
        match (self, field) {
            (Self::Required, FieldKey::Name) => "Name is required".to_string(),
            (Self::Required, FieldKey::Phone) => "Phone is required".to_string(),
            (Self::Required, FieldKey::DateOfBirth) => "Date of birth is required".to_string(),
            (Self::Required, _) => "This field is required".to_string(),
            (Self::TooShort { min }, _) => format!("Name must have at least {min} characters"),
            (Self::InvalidCharacter, _) => "Name must contain only letters and spaces".to_string(),
            (Self::NonNumeric, _) => "Phone number must be numeric".to_string(),
        }
    }
}

/// The full error set of a form, keyed by field in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FieldKey, ValidationError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldKey) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// Record the outcome of one field's rule: an error replaces, `None` clears
    pub fn set(&mut self, field: FieldKey, error: Option<ValidationError>) {
        match error {
            Some(error) => {
                self.0.insert(field, error);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// First failing field in display order
    pub fn first(&self) -> Option<(FieldKey, ValidationError)> {
        self.0.iter().next().map(|(k, e)| (*k, *e))
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, ValidationError)> + '_ {
        self.0.iter().map(|(k, e)| (*k, *e))
    }
}

impl FromIterator<(FieldKey, ValidationError)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (FieldKey, ValidationError)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, error)| format!("{field}: {}", error.message(field)))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Name: required, at least two characters, letters (any script, accents
/// included) and whitespace only
///
/// Checked on the NFC form, so a decomposed "e\u{302}\u{303}" counts as the
/// single letter "ễ". Marks with no precomposed form are still accepted.
pub fn validate_name(value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        return Some(ValidationError::Required);
    }
    let composed: String = value.nfc().collect();
    if composed.chars().count() < NAME_MIN_LENGTH {
        return Some(ValidationError::TooShort {
            min: NAME_MIN_LENGTH,
        });
    }
    if !composed
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace() || is_combining_mark(c))
    {
        return Some(ValidationError::InvalidCharacter);
    }
    None
}

/// Phone: required, ASCII digits only
pub fn validate_phone(value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        return Some(ValidationError::Required);
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Some(ValidationError::NonNumeric);
    }
    None
}

/// Any optional value: required to be set
pub fn validate_required<T>(value: &Option<T>) -> Option<ValidationError> {
    match value {
        Some(_) => None,
        None => Some(ValidationError::Required),
    }
}
