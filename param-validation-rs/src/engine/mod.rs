//! Validation engine
//!
//! [`Validator`] resolves a named field from a [`Source`], coerces it to a
//! typed value and checks it against bounds or an allowed set. Every
//! operation returns a [`ValidationResult`]; none of them panic on bad input.
//!
//! Default handling differs by type and callers rely on the difference:
//!
//! - numeric coercions return the default for an absent or empty field *and*
//!   for any later syntax or bound failure;
//! - string and list coercions return the default only for an absent or empty
//!   field; length and count violations are always reported;
//! - enum membership failures are always reported.

mod enums;
mod numeric;
mod text;

use serde_json::Value;

use crate::errors::{ErrorClass, ValidationResult};
use crate::source::Source;
use crate::ValidatorConfig;

/// Field validator bound to a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Create a validator with the given configuration
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// The configuration this validator was built with
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Error class used by the operations without a `_with` suffix
    pub fn default_class(&self) -> ErrorClass {
        ErrorClass::new(self.config.default_code)
    }

    /// Build a [`Source`] from JSON, classifying rejections with the default code
    pub fn source_from_json(&self, value: &Value) -> ValidationResult<Source> {
        Source::from_json(value, &self.default_class())
    }
}
