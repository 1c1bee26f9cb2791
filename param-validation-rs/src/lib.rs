//! # Parameter Validation Library
//!
//! Declarative validation and coercion of loosely-typed request parameters.
//! Input arrives as a bare string or a flat map of field names to strings;
//! each `validate_*` call pulls one field out, coerces it to a typed value and
//! checks it against bounds or an allowed set, returning either the value or
//! a structured [`ValidationError`].
//!
//! ## Features
//!
//! - Integer, 64-bit integer, float, string, list and enum coercions
//! - Inclusive optional bounds, code-point string lengths
//! - Optional defaults for absent or empty fields
//! - Errors carrying a kind, message, classification code and note
//! - A library of standalone format predicates
//!
//! ```
//! use param_validation::prelude::*;
//!
//! let validator = Validator::default();
//! let params: Source = vec![("uid", "123")].into_iter().collect();
//!
//! assert_eq!(validator.validate_int(&params, "uid", Some(0), Some(200), Some(10)), Ok(123));
//! assert_eq!(validator.validate_int(&params, "page", Some(1), None, Some(1)), Ok(1));
//! ```

mod engine;
mod errors;
mod source;
pub mod predicates;

use std::env;

pub use engine::Validator;
pub use errors::{ErrorClass, ErrorKind, ValidationError, ValidationResult};
pub use source::Source;

/// Re-export commonly used items for convenience
pub mod prelude {
    pub use crate::engine::Validator;
    pub use crate::errors::{ErrorClass, ErrorKind, ValidationError, ValidationResult};
    pub use crate::predicates;
    pub use crate::source::Source;
    pub use crate::ValidatorConfig;
}

/// Version of the validation library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Classification code used when the caller does not supply one
pub const DEFAULT_ERROR_CODE: u16 = 400;

/// Environment variable overriding [`DEFAULT_ERROR_CODE`]
pub const DEFAULT_CODE_ENV: &str = "PARAM_VALIDATION_DEFAULT_CODE";

/// Configuration for a [`Validator`]
///
/// Built once at startup and handed to [`Validator::new`]; a validator never
/// changes its configuration afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Code attached to errors from calls without an explicit [`ErrorClass`]
    pub default_code: u16,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            default_code: DEFAULT_ERROR_CODE,
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from the environment
    ///
    /// Reads `PARAM_VALIDATION_DEFAULT_CODE`; a missing variable keeps the
    /// default and an unparsable one is logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_code = match lookup(DEFAULT_CODE_ENV) {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                log::warn!(
                    "Invalid error code in {}, using default {}",
                    DEFAULT_CODE_ENV,
                    DEFAULT_ERROR_CODE
                );
                DEFAULT_ERROR_CODE
            }),
            None => DEFAULT_ERROR_CODE,
        };

        Self { default_code }
    }
}
