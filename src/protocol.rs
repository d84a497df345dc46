use crate::character_sets::{is_scheme_char, is_scheme_start};
use crate::helpers::clean_input;
use crate::scheme::{get_scheme_type, is_special};
use crate::types::SchemeType;

/// The scheme and slash run found at the start of an address.
///
/// `rest` is what remains once the scheme and the slashes it consumes are
/// removed; which slashes are consumed depends on the scheme.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extracted {
    /// Lower-cased scheme including the trailing `:`, or `""`
    pub protocol: String,
    /// Whether the scheme is followed by `//` or is special
    pub slashes: bool,
    /// Number of `/` and `\` characters directly after the scheme
    pub slashes_count: usize,
    /// Remainder of the address
    pub rest: String,
}

/// Extract protocol information from an address.
///
/// Leading control characters and whitespace are skipped and tabs/newlines
/// are removed. Never fails: garbage input yields an empty protocol and the
/// cleaned input as `rest`.
///
/// # Examples
///
/// ```
/// use laxurl::extract_protocol;
///
/// let extracted = extract_protocol("HTTP://example.com/");
/// assert_eq!(extracted.protocol, "http:");
/// assert!(extracted.slashes);
/// assert_eq!(extracted.slashes_count, 2);
/// assert_eq!(extracted.rest, "example.com/");
/// ```
pub fn extract_protocol(address: &str) -> Extracted {
    extract_protocol_with_base(address, "")
}

/// Extract protocol information, taking the protocol of the base location
/// into account: a scheme-relative `//host` reference under a special base
/// drops its slash run just like an address with a special scheme would.
pub fn extract_protocol_with_base(address: &str, base_protocol: &str) -> Extracted {
    let address = clean_input(address);
    let scheme_end = scheme_prefix_len(address.as_bytes());
    let protocol = address[..scheme_end].to_ascii_lowercase();
    let after = &address[scheme_end..];

    let forward_slashes = after.starts_with("//");
    let run_start = if forward_slashes { 2 } else { 0 };
    let other_slashes = after.as_bytes()[run_start..]
        .iter()
        .take_while(|&&b| b == b'/' || b == b'\\')
        .count();
    let slashes_count = run_start + other_slashes;
    let tail = &after[slashes_count..];

    let rest = match get_scheme_type(&protocol) {
        SchemeType::File if slashes_count >= 2 => &after[2..],
        SchemeType::File => after,
        scheme if scheme.is_special() => tail,
        _ if !protocol.is_empty() => {
            if forward_slashes {
                &after[2..]
            } else {
                after
            }
        }
        _ if slashes_count >= 2 && is_special(base_protocol) => tail,
        _ => after,
    };

    Extracted {
        slashes: forward_slashes || is_special(&protocol),
        protocol,
        slashes_count,
        rest: rest.to_string(),
    }
}

/// Length of a leading `scheme:` including the colon, or 0 if there is none.
fn scheme_prefix_len(bytes: &[u8]) -> usize {
    match bytes.first() {
        Some(&b) if is_scheme_start(b) => {}
        _ => return 0,
    }
    let name_len = bytes
        .iter()
        .position(|&b| !is_scheme_char(b))
        .unwrap_or(bytes.len());
    if bytes.get(name_len) == Some(&b':') {
        name_len + 1
    } else {
        0
    }
}
