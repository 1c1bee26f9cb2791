//! String and delimited-list coercion
//!
//! Unlike the numeric coercions, a default here only stands in for an absent
//! or empty field. Once a non-empty value is resolved, length and count
//! violations are reported even when a default was supplied.

use super::Validator;
use crate::errors::{ErrorClass, ValidationError, ValidationResult};
use crate::source::{resolve, Resolved, Source};

/// Check an inclusive `[min, max]` bound; returns which side was violated
fn check_bounds(len: usize, min: Option<usize>, max: Option<usize>) -> Result<(), Bound> {
    if let Some(min) = min {
        if len < min {
            return Err(Bound::Min(min));
        }
    }
    if let Some(max) = max {
        if len > max {
            return Err(Bound::Max(max));
        }
    }
    Ok(())
}

enum Bound {
    Min(usize),
    Max(usize),
}

/// Split `raw` on `sep`, keeping empty pieces
///
/// An empty separator splits into individual characters.
fn split_list(raw: &str, sep: &str) -> Vec<String> {
    if sep.is_empty() {
        raw.chars().map(String::from).collect()
    } else {
        raw.split(sep).map(String::from).collect()
    }
}

impl Validator {
    /// Validate a string field, bounding its length in Unicode code points
    pub fn validate_string(
        &self,
        source: &Source,
        field: &str,
        min_len: Option<usize>,
        max_len: Option<usize>,
        default: Option<&str>,
    ) -> ValidationResult<String> {
        self.validate_string_with(source, field, min_len, max_len, default, &self.default_class())
    }

    /// [`Validator::validate_string`] with an explicit error class
    pub fn validate_string_with(
        &self,
        source: &Source,
        field: &str,
        min_len: Option<usize>,
        max_len: Option<usize>,
        default: Option<&str>,
        class: &ErrorClass,
    ) -> ValidationResult<String> {
        let raw = match resolve(source, field, default, class)? {
            Resolved::Default(value) => return Ok(value.to_string()),
            Resolved::Raw(raw) => raw,
        };

        match check_bounds(raw.chars().count(), min_len, max_len) {
            Ok(()) => Ok(raw.to_string()),
            Err(Bound::Min(min)) => Err(ValidationError::too_short(field, min, class)),
            Err(Bound::Max(max)) => Err(ValidationError::too_long(field, max, class)),
        }
    }

    /// Validate a delimited list field, bounding its element count
    ///
    /// Empty elements are kept: `"a,,b"` split on `","` has three elements.
    pub fn validate_list(
        &self,
        source: &Source,
        field: &str,
        sep: &str,
        min_count: Option<usize>,
        max_count: Option<usize>,
        default: Option<Vec<String>>,
    ) -> ValidationResult<Vec<String>> {
        self.validate_list_with(
            source,
            field,
            sep,
            min_count,
            max_count,
            default,
            &self.default_class(),
        )
    }

    /// [`Validator::validate_list`] with an explicit error class
    #[allow(clippy::too_many_arguments)]
    pub fn validate_list_with(
        &self,
        source: &Source,
        field: &str,
        sep: &str,
        min_count: Option<usize>,
        max_count: Option<usize>,
        default: Option<Vec<String>>,
        class: &ErrorClass,
    ) -> ValidationResult<Vec<String>> {
        let raw = match resolve(source, field, default, class)? {
            Resolved::Default(values) => return Ok(values),
            Resolved::Raw(raw) => raw,
        };

        let values = split_list(raw, sep);
        match check_bounds(values.len(), min_count, max_count) {
            Ok(()) => Ok(values),
            Err(Bound::Min(min)) => Err(ValidationError::too_few_elements(field, min, class)),
            Err(Bound::Max(max)) => Err(ValidationError::too_many_elements(field, max, class)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn params(pairs: &[(&str, &str)]) -> Source {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_string_in_bounds() {
        let v = Validator::default();
        let source = params(&[("nickname", "fengmoti")]);
        assert_eq!(
            v.validate_string(&source, "nickname", Some(0), Some(20), Some("default")),
            Ok("fengmoti".to_string())
        );
    }

    #[test]
    fn test_string_counts_code_points() {
        let v = Validator::default();
        // 3 code points, 9 bytes
        let source = params(&[("name", "日本語")]);

        assert_eq!(
            v.validate_string(&source, "name", None, Some(3), None),
            Ok("日本語".to_string())
        );

        let err = v.validate_string(&source, "name", None, Some(2), None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TooLong);
        assert_eq!(err.message, "name is too long (maximum is 2 characters)");
    }

    #[test]
    fn test_string_length_not_masked_by_default() {
        let v = Validator::default();
        let source = params(&[("code", "ab")]);

        let err = v
            .validate_string(&source, "code", Some(3), None, Some("xyz"))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::TooShort);
        assert_eq!(err.message, "code is too short (minimum is 3 characters)");
    }

    #[test]
    fn test_string_empty_field() {
        let v = Validator::default();
        let source = params(&[("name", "")]);

        let err = v.validate_string(&source, "name", Some(0), Some(10), None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Empty);

        assert_eq!(
            v.validate_string(&source, "name", Some(5), Some(10), Some("anon")),
            Ok("anon".to_string())
        );
    }

    #[test]
    fn test_list_keeps_empty_elements() {
        let v = Validator::default();
        let source = params(&[("tags", "a,,b")]);

        assert_eq!(
            v.validate_list(&source, "tags", ",", Some(2), Some(4), None),
            Ok(vec!["a".to_string(), String::new(), "b".to_string()])
        );
    }

    #[test]
    fn test_list_count_bounds() {
        let v = Validator::default();
        let source = params(&[("ids", "1|2|3")]);
        let fallback = Some(vec!["0".to_string()]);

        let err = v
            .validate_list(&source, "ids", "|", Some(4), None, fallback.clone())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::TooFewElements);
        assert_eq!(err.message, "ids is too short (minimum is 4 elements)");

        let err = v
            .validate_list(&source, "ids", "|", None, Some(2), fallback)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::TooManyElements);
        assert_eq!(err.message, "ids is too long (maximum is 2 elements)");
    }

    #[test]
    fn test_list_default_when_absent() {
        let v = Validator::default();
        let source = params(&[]);
        let fallback = vec!["x".to_string()];

        assert_eq!(
            v.validate_list(&source, "ids", ",", Some(2), None, Some(fallback.clone())),
            Ok(fallback)
        );

        let err = v.validate_list(&source, "ids", ",", None, None, None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Required);
    }

    #[test]
    fn test_explicit_class() {
        let v = Validator::default();
        let source = params(&[("name", "toolong"), ("ids", "1,2,3")]);
        let class = ErrorClass::new(422).with_note("check the form");

        let err = v
            .validate_string_with(&source, "name", None, Some(3), None, &class)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::TooLong);
        assert_eq!(err.code, 422);
        assert_eq!(err.note.as_deref(), Some("check the form"));

        let err = v
            .validate_list_with(&source, "ids", ",", None, Some(2), None, &class)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::TooManyElements);
        assert_eq!(err.code, 422);
        assert_eq!(err.note.as_deref(), Some("check the form"));

        let err = v
            .validate_list_with(&source, "absent", ",", None, None, None, &class)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Required);
        assert_eq!(err.code, 422);
    }

    #[test]
    fn test_list_empty_separator_splits_chars() {
        let v = Validator::default();
        let source = Source::from("aé");
        assert_eq!(
            v.validate_list(&source, "x", "", None, None, None),
            Ok(vec!["a".to_string(), "é".to_string()])
        );
    }
}
