//! Enum membership on top of the int, int64 and string coercions

use super::Validator;
use crate::errors::{ErrorClass, ValidationError, ValidationResult};
use crate::source::Source;

fn ensure_member<T, A>(value: T, allowed: &[A], field: &str, class: &ErrorClass) -> ValidationResult<T>
where
    A: PartialEq<T>,
{
    if allowed.iter().any(|candidate| *candidate == value) {
        Ok(value)
    } else {
        Err(ValidationError::not_in_enum(field, class))
    }
}

impl Validator {
    /// Validate a 32-bit integer field that must be one of `allowed`
    ///
    /// The default follows the integer coercion rules, and whatever value
    /// comes out, defaults included, must be a member of `allowed`.
    pub fn validate_enum_int(
        &self,
        source: &Source,
        field: &str,
        allowed: &[i32],
        default: Option<i32>,
    ) -> ValidationResult<i32> {
        self.validate_enum_int_with(source, field, allowed, default, &self.default_class())
    }

    /// [`Validator::validate_enum_int`] with an explicit error class
    pub fn validate_enum_int_with(
        &self,
        source: &Source,
        field: &str,
        allowed: &[i32],
        default: Option<i32>,
        class: &ErrorClass,
    ) -> ValidationResult<i32> {
        let value = self.validate_int_with(source, field, None, None, default, class)?;
        ensure_member(value, allowed, field, class)
    }

    /// Validate a 64-bit integer field that must be one of `allowed`
    pub fn validate_enum_int64(
        &self,
        source: &Source,
        field: &str,
        allowed: &[i64],
        default: Option<i64>,
    ) -> ValidationResult<i64> {
        self.validate_enum_int64_with(source, field, allowed, default, &self.default_class())
    }

    /// [`Validator::validate_enum_int64`] with an explicit error class
    pub fn validate_enum_int64_with(
        &self,
        source: &Source,
        field: &str,
        allowed: &[i64],
        default: Option<i64>,
        class: &ErrorClass,
    ) -> ValidationResult<i64> {
        let value = self.validate_int64_with(source, field, None, None, default, class)?;
        ensure_member(value, allowed, field, class)
    }

    /// Validate a string field that must be one of `allowed`
    pub fn validate_enum_string(
        &self,
        source: &Source,
        field: &str,
        allowed: &[&str],
        default: Option<&str>,
    ) -> ValidationResult<String> {
        self.validate_enum_string_with(source, field, allowed, default, &self.default_class())
    }

    /// [`Validator::validate_enum_string`] with an explicit error class
    pub fn validate_enum_string_with(
        &self,
        source: &Source,
        field: &str,
        allowed: &[&str],
        default: Option<&str>,
        class: &ErrorClass,
    ) -> ValidationResult<String> {
        let value = self.validate_string_with(source, field, None, None, default, class)?;
        ensure_member(value, allowed, field, class)
    }
}
