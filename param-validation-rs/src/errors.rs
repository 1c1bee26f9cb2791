//! Error handling for the validation engine
//!
//! Every validation failure is returned as a [`ValidationError`] value carrying
//! a kind, a human-readable message, a numeric classification code and an
//! optional caller annotation. Nothing in this crate panics to report bad input.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// The check that rejected a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Field is absent from the input and no default was supplied
    Required,
    /// Field is present but blank and no default was supplied
    Empty,
    /// Input is neither a bare string nor a string-to-string mapping
    UnsupportedInputType,
    /// Raw value failed the syntax gate or did not fit the target type
    TypeMismatch,
    /// Numeric value is below the minimum
    TooSmall,
    /// Numeric value is above the maximum
    TooBig,
    /// String has fewer code points than the minimum
    TooShort,
    /// String has more code points than the maximum
    TooLong,
    /// List has fewer elements than the minimum
    TooFewElements,
    /// List has more elements than the maximum
    TooManyElements,
    /// Coerced value is not one of the allowed values
    NotInEnum,
}

impl ErrorKind {
    /// Stable snake_case name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Required => "required",
            ErrorKind::Empty => "empty",
            ErrorKind::UnsupportedInputType => "unsupported_input_type",
            ErrorKind::TypeMismatch => "type_mismatch",
            ErrorKind::TooSmall => "too_small",
            ErrorKind::TooBig => "too_big",
            ErrorKind::TooShort => "too_short",
            ErrorKind::TooLong => "too_long",
            ErrorKind::TooFewElements => "too_few_elements",
            ErrorKind::TooManyElements => "too_many_elements",
            ErrorKind::NotInEnum => "not_in_enum",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error classification attached to every error a call produces
///
/// Plain `validate_*` calls use the configured default code and no note;
/// the `*_with` variants take an explicit class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorClass {
    /// Numeric classification code (typically an HTTP status)
    pub code: u16,
    /// Free-text annotation for the caller's own use
    pub note: Option<String>,
}

impl ErrorClass {
    /// Create a class with the given code and no note
    pub fn new(code: u16) -> Self {
        Self { code, note: None }
    }

    /// Attach a note to this class
    pub fn with_note<S: Into<String>>(mut self, note: S) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A structured, user-facing validation failure
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{message}")]
pub struct ValidationError {
    /// Which check failed
    pub kind: ErrorKind,
    /// Human-readable message naming the field and the violated constraint
    pub message: String,
    /// Classification code
    pub code: u16,
    /// Caller-supplied annotation, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ValidationError {
    /// Create a new error from its parts
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S, class: &ErrorClass) -> Self {
        Self {
            kind,
            message: message.into(),
            code: class.code,
            note: class.note.clone(),
        }
    }

    pub(crate) fn required(field: &str, class: &ErrorClass) -> Self {
        Self::new(ErrorKind::Required, format!("{} is required", field), class)
    }

    pub(crate) fn empty(field: &str, class: &ErrorClass) -> Self {
        Self::new(ErrorKind::Empty, format!("{} can't be empty", field), class)
    }

    pub(crate) fn unsupported_input(shape: &str, class: &ErrorClass) -> Self {
        Self::new(
            ErrorKind::UnsupportedInputType,
            format!("unsupported input type: {}", shape),
            class,
        )
    }

    pub(crate) fn type_mismatch(field: &str, expected: &str, class: &ErrorClass) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!("{} must be a valid {}", field, expected),
            class,
        )
    }

    pub(crate) fn too_small<B: fmt::Display>(field: &str, min: B, class: &ErrorClass) -> Self {
        Self::new(
            ErrorKind::TooSmall,
            format!("{} is too small (minimum is {})", field, min),
            class,
        )
    }

    pub(crate) fn too_big<B: fmt::Display>(field: &str, max: B, class: &ErrorClass) -> Self {
        Self::new(
            ErrorKind::TooBig,
            format!("{} is too big (maximum is {})", field, max),
            class,
        )
    }

    pub(crate) fn too_short(field: &str, min: usize, class: &ErrorClass) -> Self {
        Self::new(
            ErrorKind::TooShort,
            format!("{} is too short (minimum is {} characters)", field, min),
            class,
        )
    }

    pub(crate) fn too_long(field: &str, max: usize, class: &ErrorClass) -> Self {
        Self::new(
            ErrorKind::TooLong,
            format!("{} is too long (maximum is {} characters)", field, max),
            class,
        )
    }

    pub(crate) fn too_few_elements(field: &str, min: usize, class: &ErrorClass) -> Self {
        Self::new(
            ErrorKind::TooFewElements,
            format!("{} is too short (minimum is {} elements)", field, min),
            class,
        )
    }

    pub(crate) fn too_many_elements(field: &str, max: usize, class: &ErrorClass) -> Self {
        Self::new(
            ErrorKind::TooManyElements,
            format!("{} is too long (maximum is {} elements)", field, max),
            class,
        )
    }

    pub(crate) fn not_in_enum(field: &str, class: &ErrorClass) -> Self {
        Self::new(ErrorKind::NotInEnum, format!("{} is not valid", field), class)
    }

    /// Returns true if the field was missing or blank
    pub fn is_missing(&self) -> bool {
        matches!(self.kind, ErrorKind::Required | ErrorKind::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_carries_class() {
        let class = ErrorClass::new(422).with_note("uid");
        let err = ValidationError::too_big("uid", 200, &class);

        assert_eq!(err.kind, ErrorKind::TooBig);
        assert_eq!(err.code, 422);
        assert_eq!(err.note.as_deref(), Some("uid"));
        assert_eq!(err.to_string(), "uid is too big (maximum is 200)");
    }

    #[test]
    fn test_missing_kinds() {
        let class = ErrorClass::new(400);
        assert!(ValidationError::required("a", &class).is_missing());
        assert!(ValidationError::empty("a", &class).is_missing());
        assert!(!ValidationError::not_in_enum("a", &class).is_missing());
    }

    #[test]
    fn test_serialize_skips_empty_note() {
        let err = ValidationError::required("name", &ErrorClass::new(400));
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["kind"], "required");
        assert_eq!(json["message"], "name is required");
        assert_eq!(json["code"], 400);
        assert!(json.get("note").is_none());
    }
}
