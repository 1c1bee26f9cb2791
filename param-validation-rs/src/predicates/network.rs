//! Network format predicates
//!
//! Addresses are checked with the standard library parsers, URLs with the
//! `url` crate and email addresses with a pattern.

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use std::net::IpAddr;
use url::Url;

/// Longest URL accepted by common browsers
const MAX_URL_LENGTH: usize = 2083;

/// URL schemes accepted by [`is_url`]
const URL_SCHEMES: &[&str] = &["http", "https", "ftp", "tcp", "udp", "ws", "wss"];

lazy_static! {
    static ref EMAIL: Regex = Regex::new(concat!(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@",
        r"[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
        r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    ))
    .unwrap();
    static ref URL_SCHEME_PREFIX: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://").unwrap();
}

/// Check that a string is an email address
pub fn is_email(s: &str) -> bool {
    EMAIL.is_match(s)
}

/// Check that a string is a URL with a host
///
/// The scheme is optional (`example.com/path` passes); when present it must
/// be one of http, https, ftp, tcp, udp, ws or wss.
pub fn is_url(s: &str) -> bool {
    if s.is_empty() || s.len() >= MAX_URL_LENGTH || s.starts_with('.') {
        return false;
    }
    if s.chars().any(char::is_whitespace) {
        return false;
    }

    // Only a leading scheme counts; "://" inside a path or query does not.
    let candidate = if URL_SCHEME_PREFIX.is_match(s) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(format!("http://{}", s))
    };

    match Url::parse(&candidate) {
        Ok(url) => URL_SCHEMES.contains(&url.scheme()) && url.host().is_some(),
        Err(_) => false,
    }
}

/// Check that a string is an IPv4 or IPv6 address
pub fn is_ip(s: &str) -> bool {
    s.parse::<IpAddr>().is_ok()
}

/// Check that a string is an IP address written with IPv4 dotted notation
///
/// IPv4-mapped IPv6 addresses such as `::ffff:1.2.3.4` also pass.
pub fn is_ipv4(s: &str) -> bool {
    is_ip(s) && s.contains('.')
}

/// Check that a string is an IP address written with IPv6 colon notation
pub fn is_ipv6(s: &str) -> bool {
    is_ip(s) && s.contains(':')
}

/// Check that a string is a MAC address
///
/// Accepts EUI-48, EUI-64 and 20-octet IP-over-InfiniBand addresses written
/// as `01:23:45:67:89:ab`, `01-23-45-67-89-ab` or `0123.4567.89ab`.
pub fn is_mac(s: &str) -> bool {
    if s.len() < 14 {
        return false;
    }

    let bytes = s.as_bytes();
    if bytes[2] == b':' || bytes[2] == b'-' {
        let sep = bytes[2] as char;
        let groups: Vec<&str> = s.split(sep).collect();
        is_octet_count(groups.len()) && groups.iter().all(|g| is_hex_group(g, 2))
    } else if bytes[4] == b'.' {
        let groups: Vec<&str> = s.split('.').collect();
        is_octet_count(groups.len() * 2) && groups.iter().all(|g| is_hex_group(g, 4))
    } else {
        false
    }
}

fn is_octet_count(n: usize) -> bool {
    matches!(n, 6 | 8 | 20)
}

fn is_hex_group(group: &str, width: usize) -> bool {
    group.len() == width && group.bytes().all(|b| b.is_ascii_hexdigit())
}
