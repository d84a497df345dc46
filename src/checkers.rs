use crate::character_sets::{is_scheme_char, is_scheme_start};

/// Parse a port string the way a browser coerces it to a number.
/// Surrounding ASCII whitespace is ignored and an empty string counts as 0.
/// Returns None if the port contains non-digit characters or overflows.
pub fn parse_port(port: &str) -> Option<u64> {
    let port = port.trim_matches(|c: char| c.is_ascii_whitespace());
    if port.is_empty() {
        return Some(0);
    }
    if !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u64>().ok()
}

/// Split a trailing `:<digits>` off a host. The digits may be empty.
/// Returns `(hostname, port)`.
pub fn split_port(host: &str) -> (&str, Option<&str>) {
    let digits_start = host.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    match host[..digits_start].strip_suffix(':') {
        Some(hostname) => (hostname, Some(&host[digits_start..])),
        None => (host, None),
    }
}

/// Check if a host ends in `:` followed by at least one digit.
pub fn has_port_suffix(host: &str) -> bool {
    matches!(split_port(host), (_, Some(port)) if !port.is_empty())
}

/// Check if input starts with a Windows drive letter (`C:`).
pub fn is_windows_drive_letter(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Check if `href` starts with `scheme://`.
pub fn has_scheme_slashes(href: &str) -> bool {
    let bytes = href.as_bytes();
    let Some(&first) = bytes.first() else {
        return false;
    };
    if !is_scheme_start(first) {
        return false;
    }
    let scheme_end = bytes
        .iter()
        .position(|&b| !is_scheme_char(b))
        .unwrap_or(bytes.len());
    bytes[scheme_end..].starts_with(b"://")
}
