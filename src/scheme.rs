use crate::checkers::parse_port;
use crate::types::SchemeType;

/// Get the scheme type from a scheme or protocol string.
/// A trailing `:` is ignored, so both `"http"` and `"http:"` are accepted.
/// Uses perfect hash based on length + first byte to minimize comparisons.
pub fn get_scheme_type(protocol: &str) -> SchemeType {
    let scheme = protocol.strip_suffix(':').unwrap_or(protocol);
    let bytes = scheme.as_bytes();
    let first = bytes.first().map(u8::to_ascii_lowercase);
    let is = |name: &[u8]| bytes.eq_ignore_ascii_case(name);

    // Perfect hash: filter by length first, then first byte, then full comparison
    match (bytes.len(), first) {
        (2, Some(b'w')) if is(b"ws") => SchemeType::Ws,
        (3, Some(b'w')) if is(b"wss") => SchemeType::Wss,
        (3, Some(b'f')) if is(b"ftp") => SchemeType::Ftp,
        (4, Some(b'h')) if is(b"http") => SchemeType::Http,
        (4, Some(b'f')) if is(b"file") => SchemeType::File,
        (5, Some(b'h')) if is(b"https") => SchemeType::Https,
        (6, Some(b'g')) if is(b"gopher") => SchemeType::Gopher,
        _ => SchemeType::NotSpecial,
    }
}

/// Whether `protocol` names a special scheme.
pub fn is_special(protocol: &str) -> bool {
    get_scheme_type(protocol).is_special()
}

/// Whether `port` has to be kept for `protocol`.
///
/// Empty, zero and non-numeric ports are never kept, nor is the scheme's
/// default port. `file:` URLs never keep a port.
pub fn port_required(port: &str, protocol: &str) -> bool {
    let Some(port) = parse_port(port) else {
        return false;
    };
    if port == 0 {
        return false;
    }

    match get_scheme_type(protocol) {
        SchemeType::File => false,
        scheme => scheme.default_port().map(u64::from) != Some(port),
    }
}
