//! Format predicates
//!
//! Pure `&str -> bool` checks. The validation engine uses [`is_int`] and
//! [`is_float`] as syntax gates; the rest are exposed for callers that need
//! format checks of their own. Patterns are compiled once and shared.

pub mod hash;
pub mod network;
pub mod numeric;
pub mod path;
pub mod text;
pub mod time;

// Re-export all predicates for convenience
pub use hash::*;
pub use network::*;
pub use numeric::*;
pub use path::*;
pub use text::*;
pub use time::*;
