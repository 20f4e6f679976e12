//! Field-level validation errors
//!
//! Errors are collected per field and reported together. A
//! `ValidationErrors` value is never empty.

use std::fmt;

use serde::Serialize;

/// Kind of rule a field violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldErrorKind {
    /// Text shorter than the field's minimum length
    TooShort,
    /// Value does not have the required shape (email, date, ZIP, choice)
    InvalidFormat,
    /// Numeric value outside the permitted range
    OutOfRange,
    /// Value has the wrong type (non-numeric GPA, fractional year)
    InvalidType,
}

impl FieldErrorKind {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            FieldErrorKind::TooShort => "TOO_SHORT",
            FieldErrorKind::InvalidFormat => "INVALID_FORMAT",
            FieldErrorKind::OutOfRange => "OUT_OF_RANGE",
            FieldErrorKind::InvalidType => "INVALID_TYPE",
        }
    }
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single field violation, shown inline next to the offending input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// Field name (e.g. "zip_code")
    pub field: &'static str,
    pub kind: FieldErrorKind,
    /// Human-readable message
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': [{}] {}", self.field, self.kind, self.message)
    }
}

/// Ordered, non-empty list of field violations
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Wraps a list of errors. Returns `None` when the list is empty.
    pub fn new(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// Collects the failures of a form that had at least one failing field
    pub(crate) fn from_failures(
        failures: impl IntoIterator<Item = Option<FieldError>>,
    ) -> Self {
        Self {
            errors: failures.into_iter().flatten().collect(),
        }
    }

    /// A single error
    pub fn single(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the first error reported for `field`
    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Names of the offending fields, in report order
    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.field).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} field(s) failed validation", self.errors.len())?;
        for error in &self.errors {
            write!(f, "; {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationErrors>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_not_an_error() {
        assert!(ValidationErrors::new(Vec::new()).is_none());
    }

    #[test]
    fn test_failures_skip_passing_fields() {
        let errors = ValidationErrors::from_failures([
            None,
            Some(FieldError::new("email", FieldErrorKind::InvalidFormat, "Invalid email address")),
            None,
        ]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.fields(), vec!["email"]);
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(FieldErrorKind::TooShort.code(), "TOO_SHORT");
        assert_eq!(FieldErrorKind::InvalidFormat.code(), "INVALID_FORMAT");
        assert_eq!(FieldErrorKind::OutOfRange.code(), "OUT_OF_RANGE");
        assert_eq!(FieldErrorKind::InvalidType.code(), "INVALID_TYPE");
    }

    #[test]
    fn test_display_lists_every_field() {
        let errors = ValidationErrors::new(vec![
            FieldError::new("city", FieldErrorKind::TooShort, "City is required"),
            FieldError::new("gpa", FieldErrorKind::OutOfRange, "GPA must be between 0 and 4"),
        ])
        .unwrap();

        let display = errors.to_string();
        assert!(display.starts_with("2 field(s)"));
        assert!(display.contains("city"));
        assert!(display.contains("OUT_OF_RANGE"));
        assert_eq!(errors.fields(), vec!["city", "gpa"]);
    }

    #[test]
    fn test_serializes_as_list() {
        let errors = ValidationErrors::single(FieldError::new(
            "zip_code",
            FieldErrorKind::InvalidFormat,
            "Invalid ZIP code",
        ));
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json[0]["field"], "zip_code");
        assert_eq!(json[0]["kind"], "InvalidFormat");
    }
}
