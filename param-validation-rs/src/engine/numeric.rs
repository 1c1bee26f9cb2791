//! Integer and float coercion

use std::fmt::Display;
use std::str::FromStr;

use super::Validator;
use crate::errors::{ErrorClass, ValidationError, ValidationResult};
use crate::predicates::{is_float, is_int};
use crate::source::{resolve, Resolved, Source};

/// Numeric target of a coercion
trait Number: FromStr + PartialOrd + Display + Copy {
    /// Name used in type mismatch messages
    const EXPECTED: &'static str;

    /// Syntax gate applied before parsing
    fn syntax_ok(raw: &str) -> bool;

    /// Reject parsed values that do not represent the input faithfully
    fn is_representable(&self) -> bool {
        true
    }
}

impl Number for i32 {
    const EXPECTED: &'static str = "integer";

    fn syntax_ok(raw: &str) -> bool {
        is_int(raw)
    }
}

impl Number for i64 {
    const EXPECTED: &'static str = "integer";

    fn syntax_ok(raw: &str) -> bool {
        is_int(raw)
    }
}

impl Number for f64 {
    const EXPECTED: &'static str = "float";

    fn syntax_ok(raw: &str) -> bool {
        is_float(raw)
    }

    // "1e400" parses to infinity; treat it as out of range for the type
    fn is_representable(&self) -> bool {
        self.is_finite()
    }
}

/// Gate, parse and bound-check a raw numeric string
fn check_number<T: Number>(
    raw: &str,
    field: &str,
    min: Option<T>,
    max: Option<T>,
    class: &ErrorClass,
) -> ValidationResult<T> {
    if !T::syntax_ok(raw) {
        return Err(ValidationError::type_mismatch(field, T::EXPECTED, class));
    }

    let value = raw
        .parse::<T>()
        .ok()
        .filter(|value| value.is_representable())
        .ok_or_else(|| ValidationError::type_mismatch(field, T::EXPECTED, class))?;

    if let Some(min) = min {
        if value < min {
            return Err(ValidationError::too_small(field, min, class));
        }
    }
    if let Some(max) = max {
        if value > max {
            return Err(ValidationError::too_big(field, max, class));
        }
    }

    Ok(value)
}

impl Validator {
    fn coerce_number<T: Number>(
        &self,
        source: &Source,
        field: &str,
        min: Option<T>,
        max: Option<T>,
        default: Option<T>,
        class: &ErrorClass,
    ) -> ValidationResult<T> {
        let raw = match resolve(source, field, default, class)? {
            Resolved::Default(value) => return Ok(value),
            Resolved::Raw(raw) => raw,
        };

        match check_number(raw, field, min, max, class) {
            Ok(value) => {
                log::trace!("field '{}' coerced to {}", field, value);
                Ok(value)
            }
            Err(err) => match default {
                Some(value) => {
                    log::debug!("field '{}' rejected ({}), using default", field, err.kind);
                    Ok(value)
                }
                None => Err(err),
            },
        }
    }

    /// Validate a 32-bit integer field
    ///
    /// `None` bounds are unbounded. With a default, every failure yields the
    /// default instead of an error.
    pub fn validate_int(
        &self,
        source: &Source,
        field: &str,
        min: Option<i32>,
        max: Option<i32>,
        default: Option<i32>,
    ) -> ValidationResult<i32> {
        self.validate_int_with(source, field, min, max, default, &self.default_class())
    }

    /// [`Validator::validate_int`] with an explicit error class
    pub fn validate_int_with(
        &self,
        source: &Source,
        field: &str,
        min: Option<i32>,
        max: Option<i32>,
        default: Option<i32>,
        class: &ErrorClass,
    ) -> ValidationResult<i32> {
        self.coerce_number(source, field, min, max, default, class)
    }

    /// Validate a 64-bit integer field
    pub fn validate_int64(
        &self,
        source: &Source,
        field: &str,
        min: Option<i64>,
        max: Option<i64>,
        default: Option<i64>,
    ) -> ValidationResult<i64> {
        self.validate_int64_with(source, field, min, max, default, &self.default_class())
    }

    /// [`Validator::validate_int64`] with an explicit error class
    pub fn validate_int64_with(
        &self,
        source: &Source,
        field: &str,
        min: Option<i64>,
        max: Option<i64>,
        default: Option<i64>,
        class: &ErrorClass,
    ) -> ValidationResult<i64> {
        self.coerce_number(source, field, min, max, default, class)
    }

    /// Validate a 64-bit float field
    pub fn validate_float(
        &self,
        source: &Source,
        field: &str,
        min: Option<f64>,
        max: Option<f64>,
        default: Option<f64>,
    ) -> ValidationResult<f64> {
        self.validate_float_with(source, field, min, max, default, &self.default_class())
    }

    /// [`Validator::validate_float`] with an explicit error class
    pub fn validate_float_with(
        &self,
        source: &Source,
        field: &str,
        min: Option<f64>,
        max: Option<f64>,
        default: Option<f64>,
        class: &ErrorClass,
    ) -> ValidationResult<f64> {
        self.coerce_number(source, field, min, max, default, class)
    }
}
