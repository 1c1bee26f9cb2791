//! Numeric format predicates

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NUMERIC: Regex = Regex::new(r"^[0-9]+$").unwrap();
    static ref INT: Regex = Regex::new(r"^[-+]?(?:0|[1-9][0-9]*)$").unwrap();
    static ref FLOAT: Regex =
        Regex::new(r"^[-+]?[0-9]*(?:\.[0-9]*)?(?:[eE][-+]?[0-9]+)?$").unwrap();
    static ref HEXADECIMAL: Regex = Regex::new(r"^[0-9a-fA-F]+$").unwrap();
    static ref LATITUDE: Regex = Regex::new(r"^[-+]?(?:[1-8]?\d(?:\.\d+)?|90(?:\.0+)?)$").unwrap();
    static ref LONGITUDE: Regex =
        Regex::new(r"^[-+]?(?:180(?:\.0+)?|(?:1[0-7]\d|[1-9]?\d)(?:\.\d+)?)$").unwrap();
}

/// Check that a string consists of ASCII digits only
pub fn is_numeric(s: &str) -> bool {
    NUMERIC.is_match(s)
}

/// Check that a string is a decimal integer
///
/// An optional sign is allowed; leading zeros are not, except for `0` itself.
pub fn is_int(s: &str) -> bool {
    INT.is_match(s)
}

/// Alias of [`is_int`]
pub fn is_integer(s: &str) -> bool {
    is_int(s)
}

/// Check that a string is a decimal floating point number
///
/// Sign, fractional part and exponent are all optional, but the mantissa
/// must contain at least one digit, so `"."`, `"+"` and `"e5"` are rejected.
pub fn is_float(s: &str) -> bool {
    if !FLOAT.is_match(s) {
        return false;
    }
    let mantissa = s.split(|c| c == 'e' || c == 'E').next().unwrap_or_default();
    mantissa.bytes().any(|b| b.is_ascii_digit())
}

/// Check that a string is a hexadecimal number (no `0x` prefix)
pub fn is_hexadecimal(s: &str) -> bool {
    HEXADECIMAL.is_match(s)
}

/// Check that a string is a latitude in decimal degrees
pub fn is_latitude(s: &str) -> bool {
    LATITUDE.is_match(s)
}

/// Check that a string is a longitude in decimal degrees
pub fn is_longitude(s: &str) -> bool {
    LONGITUDE.is_match(s)
}

/// Check that a string is a TCP/UDP port number (1-65535)
pub fn is_port(s: &str) -> bool {
    matches!(s.parse::<u32>(), Ok(n) if (1..=65535).contains(&n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("0", true ; "zero")]
    #[test_case("123", true ; "positive")]
    #[test_case("-123", true ; "negative")]
    #[test_case("+7", true ; "plus sign")]
    #[test_case("007", false ; "leading zero")]
    #[test_case("-0", true ; "negative zero")]
    #[test_case("1.5", false ; "decimal")]
    #[test_case("", false ; "empty")]
    #[test_case("abc", false ; "letters")]
    fn test_is_int(input: &str, expected: bool) {
        assert_eq!(is_int(input), expected);
    }

    #[test_case("1.5", true ; "decimal")]
    #[test_case("-1.5e10", true ; "signed exponent")]
    #[test_case("+.5", true ; "fraction only")]
    #[test_case("3.", true ; "trailing dot")]
    #[test_case("42", true ; "integer")]
    #[test_case("1E-3", true ; "upper exponent")]
    #[test_case(".", false ; "lone dot")]
    #[test_case("", false ; "empty")]
    #[test_case("-", false ; "lone sign")]
    #[test_case("e5", false ; "exponent only")]
    #[test_case(".e5", false ; "dot exponent")]
    #[test_case("1.2.3", false ; "two dots")]
    #[test_case("NaN", false ; "nan")]
    #[test_case("inf", false ; "infinity")]
    fn test_is_float(input: &str, expected: bool) {
        assert_eq!(is_float(input), expected);
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("0123"));
        assert!(!is_numeric("-1"));
        assert!(!is_numeric(""));
    }

    #[test]
    fn test_is_hexadecimal() {
        assert!(is_hexadecimal("deadBEEF"));
        assert!(!is_hexadecimal("0xff"));
    }

    #[test_case("90", true ; "upper bound")]
    #[test_case("-90.000", true ; "lower bound zeros")]
    #[test_case("45.123", true ; "fractional")]
    #[test_case("90.1", false ; "above bound")]
    #[test_case("91", false ; "above bound integer")]
    fn test_is_latitude(input: &str, expected: bool) {
        assert_eq!(is_latitude(input), expected);
    }

    #[test_case("180", true ; "upper bound")]
    #[test_case("-179.99", true ; "negative fractional")]
    #[test_case("0", true ; "zero")]
    #[test_case("180.5", false ; "above bound")]
    #[test_case("181", false ; "above bound integer")]
    fn test_is_longitude(input: &str, expected: bool) {
        assert_eq!(is_longitude(input), expected);
    }

    #[test]
    fn test_is_port() {
        assert!(is_port("1"));
        assert!(is_port("65535"));
        assert!(!is_port("0"));
        assert!(!is_port("65536"));
        assert!(!is_port("http"));
    }
}
