//! Hash digest predicates

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LOWER_HEX: Regex = Regex::new(r"^[a-f0-9]+$").unwrap();
}

/// Number of hex digits in a digest, or `None` for an unknown algorithm
fn digest_length(algorithm: &str) -> Option<usize> {
    match algorithm.to_lowercase().as_str() {
        "crc32" | "crc32b" => Some(8),
        "md4" | "md5" | "ripemd128" | "tiger128" => Some(32),
        "sha1" | "ripemd160" | "tiger160" => Some(40),
        "tiger192" => Some(48),
        "sha256" => Some(64),
        "sha384" => Some(96),
        "sha512" => Some(128),
        _ => None,
    }
}

/// Check that a string is a lowercase hex digest of the given algorithm
///
/// The algorithm name is case-insensitive. Unknown algorithms never match.
pub fn is_hash(s: &str, algorithm: &str) -> bool {
    match digest_length(algorithm) {
        Some(len) => s.len() == len && LOWER_HEX.is_match(s),
        None => false,
    }
}

/// Check that a string is an MD5 digest in either case
pub fn is_md5(s: &str) -> bool {
    is_hash(&s.to_lowercase(), "md5")
}
