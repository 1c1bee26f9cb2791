//! File path predicates

use lazy_static::lazy_static;
use regex::Regex;

/// Windows extended-length path limit
const MAX_WIN_PATH: usize = 32_767;

lazy_static! {
    static ref WIN_PATH: Regex =
        Regex::new(r#"^[a-zA-Z]:\\(?:[^\\/:*?"<>|\r\n]+\\)*[^\\/:*?"<>|\r\n]*$"#).unwrap();
    static ref UNIX_PATH: Regex = Regex::new(r"^(?:/[^/\x00]*)+/?$").unwrap();
}

/// Check that a string is an absolute Windows path such as `C:\dir\file.txt`
pub fn is_win_path(s: &str) -> bool {
    // The drive prefix (`C:\`) is three ASCII bytes once the pattern matched.
    WIN_PATH.is_match(s) && s[3..].len() <= MAX_WIN_PATH
}

/// Check that a string is an absolute Unix path
pub fn is_unix_path(s: &str) -> bool {
    UNIX_PATH.is_match(s)
}
