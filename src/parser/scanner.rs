use std::borrow::Cow;

use crate::checkers::split_port;
use crate::parser::State;

/// Component boundaries found by the scanner.
///
/// Offsets index into the scanned input; backslash normalization never
/// changes byte lengths, so they are valid for the normalized head as well.
///
/// Layout: "user:pass@example.com:8080/path?query#hash"
/// - `host_start`: start of "example.com" (after "@"), 0 without credentials
/// - `path_start`: start of "/path", end of the authority
/// - `query_start`: start of "?query"
/// - `hash_start`: start of "#hash"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Boundaries {
    pub host_start: usize,
    pub path_start: usize,
    pub query_start: usize,
    pub hash_start: usize,
}

/// Raw components of an address, before inheritance and normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Components {
    pub auth: String,
    pub host: String,
    pub hostname: String,
    pub port: String,
    pub pathname: String,
    pub query: String,
    pub hash: String,
}

/// Split the remainder of an address (scheme and leading slashes already
/// removed) into its components.
///
/// - `special`: backslashes in the authority and path act as `/`
/// - `path_only`: there is no authority; everything before the query is path
pub fn scan(input: &str, special: bool, path_only: bool) -> Components {
    let bytes = input.as_bytes();
    let mut bounds = Boundaries::default();
    let mut parts = Components::default();
    let mut head: Cow<'_, str> = Cow::Borrowed("");
    let mut state = State::Start;

    loop {
        state = match state {
            State::Start => {
                bounds.hash_start = memchr::memchr(b'#', bytes).unwrap_or(bytes.len());
                bounds.query_start =
                    memchr::memchr(b'?', &bytes[..bounds.hash_start]).unwrap_or(bounds.hash_start);

                let raw_head = &input[..bounds.query_start];
                head = if special && raw_head.contains('\\') {
                    Cow::Owned(raw_head.replace('\\', "/"))
                } else {
                    Cow::Borrowed(raw_head)
                };

                if path_only {
                    State::Path
                } else {
                    bounds.path_start =
                        memchr::memchr(b'/', head.as_bytes()).unwrap_or(bounds.query_start);
                    State::Credentials
                }
            }
            State::Credentials => {
                // Only the last `@` separates credentials from the host
                let authority = &head[..bounds.path_start];
                if let Some(at) = memchr::memrchr(b'@', authority.as_bytes()) {
                    parts.auth = authority[..at].to_string();
                    bounds.host_start = at + 1;
                }
                State::Host
            }
            State::Host => {
                parts.host = head[bounds.host_start..bounds.path_start].to_string();
                State::Port
            }
            State::Port => {
                let (hostname, port) = split_port(&parts.host);
                parts.hostname = hostname.to_string();
                parts.port = port.unwrap_or_default().to_string();
                State::Path
            }
            State::Path => {
                parts.pathname = head[bounds.path_start..].to_string();
                State::Query
            }
            State::Query => {
                parts.query = input[bounds.query_start..bounds.hash_start].to_string();
                State::Hash
            }
            State::Hash => {
                parts.hash = input[bounds.hash_start..].to_string();
                State::Done
            }
            State::Done => break,
        };
    }

    parts
}
