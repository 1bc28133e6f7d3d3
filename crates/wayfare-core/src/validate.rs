//! Batch validation of drafts.
//!
//! Every check records into one [`ValidationErrors`] so the administrator
//! sees all failing fields together instead of one at a time.

use std::fmt;

use crate::parse::classify_image;

/// Lowest hotel rating a form accepts.
pub const MIN_HOTEL_RATING: u8 = 3;
/// Highest hotel rating a form accepts.
pub const MAX_HOTEL_RATING: u8 = 5;

/// A single failing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field path, e.g. `price` or `days[2].title`
    pub field: String,
    pub message: String,
}

/// Every failing field of one draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failing field.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Records `"<label> is required"` when `value` is blank.
    pub fn require(&mut self, field: &str, label: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, format!("{label} is required"));
        }
    }

    /// Checks an optional image reference; blank values pass.
    pub fn check_image(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            return;
        }
        if let Err(reason) = classify_image(value) {
            self.push(field, reason);
        }
    }

    /// Checks a hotel rating lies within the accepted star range.
    pub fn check_rating(&mut self, field: &str, rating: u8) {
        if !(MIN_HOTEL_RATING..=MAX_HOTEL_RATING).contains(&rating) {
            self.push(
                field,
                format!("Hotel rating must be between {MIN_HOTEL_RATING} and {MAX_HOTEL_RATING}"),
            );
        }
    }

    /// Moves the errors of a nested draft under `prefix`.
    pub fn extend_prefixed(&mut self, prefix: &str, other: ValidationErrors) {
        for error in other.errors {
            self.push(format!("{prefix}.{}", error.field), error.message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Names of the failing fields, in the order they were checked.
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// `Ok(value)` when nothing failed.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Please fix the following fields:")?;
        for error in &self.errors {
            write!(f, "\n- {}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Trims every entry and drops the blank ones.
pub(crate) fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
