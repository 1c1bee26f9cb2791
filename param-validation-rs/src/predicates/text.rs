//! Text format predicates

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ALPHA: Regex = Regex::new(r"^[a-zA-Z]+$").unwrap();
    static ref ALPHANUMERIC: Regex = Regex::new(r"^[a-zA-Z0-9]+$").unwrap();
    static ref ASCII: Regex = Regex::new(r"^[\x00-\x7F]+$").unwrap();
    static ref PRINTABLE_ASCII: Regex = Regex::new(r"^[\x20-\x7E]+$").unwrap();
    static ref BASE64: Regex = Regex::new(
        r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{4})$"
    )
    .unwrap();
    static ref SEMVER: Regex = Regex::new(concat!(
        r"^v?(?:0|[1-9]\d*)\.(?:0|[1-9]\d*)\.(?:0|[1-9]\d*)",
        r"(?:-(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*)?",
        r"(?:\+[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*)?$",
    ))
    .unwrap();
    static ref HEXCOLOR: Regex = Regex::new(r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap();
    static ref RGBCOLOR: Regex = Regex::new(concat!(
        r"^rgb\(\s*(?:0|[1-9]\d?|1\d\d?|2[0-4]\d|25[0-5])",
        r"\s*,\s*(?:0|[1-9]\d?|1\d\d?|2[0-4]\d|25[0-5])",
        r"\s*,\s*(?:0|[1-9]\d?|1\d\d?|2[0-4]\d|25[0-5])\s*\)$",
    ))
    .unwrap();
    static ref HAS_LOWER: Regex = Regex::new(r"[[:lower:]]").unwrap();
    static ref HAS_UPPER: Regex = Regex::new(r"[[:upper:]]").unwrap();
    static ref FULL_WIDTH: Regex = Regex::new(
        r"[^\x{0020}-\x{007E}\x{FF61}-\x{FF9F}\x{FFA0}-\x{FFDC}\x{FFE8}-\x{FFEE}0-9a-zA-Z]"
    )
    .unwrap();
    static ref HALF_WIDTH: Regex = Regex::new(
        r"[\x{0020}-\x{007E}\x{FF61}-\x{FF9F}\x{FFA0}-\x{FFDC}\x{FFE8}-\x{FFEE}0-9a-zA-Z]"
    )
    .unwrap();
}

/// Check that a string contains only ASCII letters
pub fn is_alpha(s: &str) -> bool {
    ALPHA.is_match(s)
}

/// Check that a string contains only ASCII letters and digits
pub fn is_alphanumeric(s: &str) -> bool {
    ALPHANUMERIC.is_match(s)
}

/// Check that a non-empty string is pure ASCII
pub fn is_ascii(s: &str) -> bool {
    ASCII.is_match(s)
}

/// Check that a non-empty string is printable ASCII (space through `~`)
pub fn is_printable_ascii(s: &str) -> bool {
    PRINTABLE_ASCII.is_match(s)
}

/// Check that a string is padded standard base64
pub fn is_base64(s: &str) -> bool {
    BASE64.is_match(s)
}

/// Check that a string is a semantic version, optionally prefixed with `v`
pub fn is_semver(s: &str) -> bool {
    SEMVER.is_match(s)
}

/// Check that a string is a 3 or 6 digit hex color, `#` optional
pub fn is_hexcolor(s: &str) -> bool {
    HEXCOLOR.is_match(s)
}

/// Check that a string is a color of the form `rgb(255, 255, 255)`
pub fn is_rgbcolor(s: &str) -> bool {
    RGBCOLOR.is_match(s)
}

/// Check that uppercasing the string leaves it unchanged
pub fn is_upper_case(s: &str) -> bool {
    s == s.to_uppercase()
}

/// Check that lowercasing the string leaves it unchanged
pub fn is_lower_case(s: &str) -> bool {
    s == s.to_lowercase()
}

/// Check that a string contains at least one ASCII lowercase letter
pub fn has_lower_case(s: &str) -> bool {
    HAS_LOWER.is_match(s)
}

/// Check that a string contains at least one ASCII uppercase letter
pub fn has_upper_case(s: &str) -> bool {
    HAS_UPPER.is_match(s)
}

/// Check that every character is a Unicode letter. The empty string passes.
pub fn is_utf_letter(s: &str) -> bool {
    s.chars().all(char::is_alphabetic)
}

/// Check that every character is a Unicode letter or number. The empty string passes.
pub fn is_utf_letter_numeric(s: &str) -> bool {
    s.chars().all(|c| c.is_alphabetic() || c.is_numeric())
}

/// Check that a string contains any full-width character
pub fn is_full_width(s: &str) -> bool {
    FULL_WIDTH.is_match(s)
}

/// Check that a string contains any half-width character
pub fn is_half_width(s: &str) -> bool {
    HALF_WIDTH.is_match(s)
}

/// Check that a string is a well-formed JSON document
pub fn is_json(s: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(s).is_ok()
}
