use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Component percent-encode set.
/// Everything except ASCII alphanumerics and `-_.!~*'()`, matching what
/// browsers escape for a single URL component.
pub const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single URL component
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT_SET).to_string()
}

/// Strictly decode a percent-encoded component.
/// Returns None for a `%` not followed by two hex digits, or when the decoded
/// bytes are not UTF-8.
pub fn decode_component(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let well_formed = memchr::memchr_iter(b'%', bytes).all(|pos| {
        bytes
            .get(pos + 1..pos + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    });
    if !well_formed {
        return None;
    }

    percent_decode_str(input)
        .decode_utf8()
        .ok()
        .map(std::borrow::Cow::into_owned)
}

/// Normalize a credential: decode then re-encode, so already-escaped input is
/// not escaped twice. Malformed escapes are encoded as literal text.
pub fn normalize_userinfo(input: &str) -> String {
    match decode_component(input) {
        Some(decoded) => encode_component(&decoded),
        None => encode_component(input),
    }
}

/// Lenient decode used to unwrap the address embedded in a `blob:` pathname
pub fn unescape(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}
