//! Input sources and field resolution
//!
//! A [`Source`] is either one bare string or a flat map of field names to raw
//! strings. Resolution turns a (source, field, default) triple into the raw
//! string to coerce, the default to return unchanged, or a `Required`/`Empty`
//! error.

use std::collections::HashMap;

use serde_json::Value;

use crate::errors::{ErrorClass, ValidationError, ValidationResult};
use crate::DEFAULT_ERROR_CODE;

/// Loosely-typed input handed to the validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A single raw value; field names are ignored
    RawValue(String),
    /// Named raw values, e.g. query or form parameters
    FieldMap(HashMap<String, String>),
}

impl Source {
    /// Build a source from a JSON value
    ///
    /// Strings become [`Source::RawValue`] and objects whose members are all
    /// strings become [`Source::FieldMap`]. Anything else is rejected with
    /// `UnsupportedInputType`.
    pub fn from_json(value: &Value, class: &ErrorClass) -> ValidationResult<Self> {
        match value {
            Value::String(s) => Ok(Source::RawValue(s.clone())),
            Value::Object(obj) => {
                let mut fields = HashMap::with_capacity(obj.len());
                for (key, member) in obj {
                    match member {
                        Value::String(s) => {
                            fields.insert(key.clone(), s.clone());
                        }
                        other => {
                            return Err(ValidationError::unsupported_input(
                                &format!("object member '{}' is {}", key, json_shape(other)),
                                class,
                            ));
                        }
                    }
                }
                Ok(Source::FieldMap(fields))
            }
            other => Err(ValidationError::unsupported_input(json_shape(other), class)),
        }
    }

    /// Look up the raw value for a field without applying any policy
    pub fn get(&self, field: &str) -> Option<&str> {
        match self {
            Source::RawValue(s) => Some(s.as_str()),
            Source::FieldMap(fields) => fields.get(field).map(String::as_str),
        }
    }
}

fn json_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<&Value> for Source {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Source::from_json(value, &ErrorClass::new(DEFAULT_ERROR_CODE))
    }
}

impl From<&str> for Source {
    fn from(s: &str) -> Self {
        Source::RawValue(s.to_string())
    }
}

impl From<String> for Source {
    fn from(s: String) -> Self {
        Source::RawValue(s)
    }
}

impl From<HashMap<String, String>> for Source {
    fn from(fields: HashMap<String, String>) -> Self {
        Source::FieldMap(fields)
    }
}

impl<K, V> FromIterator<(K, V)> for Source
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Source::FieldMap(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Outcome of a successful field resolution
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Resolved<'a, T> {
    /// Non-empty raw string still to be coerced
    Raw(&'a str),
    /// The caller's default, returned without further checks
    Default(T),
}

/// Resolve `field` in `source`, applying the default-or-fail policy
///
/// An empty raw value is treated exactly like an absent one.
pub(crate) fn resolve<'a, T>(
    source: &'a Source,
    field: &str,
    default: Option<T>,
    class: &ErrorClass,
) -> ValidationResult<Resolved<'a, T>> {
    let raw = match source {
        Source::RawValue(s) => s.as_str(),
        Source::FieldMap(fields) => match fields.get(field) {
            Some(value) => value.as_str(),
            None => {
                return match default {
                    Some(d) => {
                        log::debug!("field '{}' absent, using default", field);
                        Ok(Resolved::Default(d))
                    }
                    None => Err(ValidationError::required(field, class)),
                };
            }
        },
    };

    if raw.is_empty() {
        return match default {
            Some(d) => {
                log::debug!("field '{}' empty, using default", field);
                Ok(Resolved::Default(d))
            }
            None => Err(ValidationError::empty(field, class)),
        };
    }

    Ok(Resolved::Raw(raw))
}
