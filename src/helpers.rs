use std::borrow::Cow;

use crate::character_sets::{is_ascii_tab_or_newline, is_control_or_whitespace};

/// Fast check if string contains tabs or newlines
pub fn has_tabs_or_newline(input: &str) -> bool {
    memchr::memchr3(b'\t', b'\n', b'\r', input.as_bytes()).is_some()
}

/// Strip the leading run of control characters and whitespace.
pub fn trim_start_controls(input: &str) -> &str {
    input.trim_start_matches(is_control_or_whitespace)
}

/// Trim leading junk and remove tabs/newlines anywhere in the address.
/// Returns a Cow to avoid allocation when possible.
/// Trailing characters are kept so interior content is never truncated.
pub fn clean_input(input: &str) -> Cow<'_, str> {
    let trimmed = trim_start_controls(input);
    if !has_tabs_or_newline(trimmed) {
        return Cow::Borrowed(trimmed);
    }

    Cow::Owned(
        trimmed
            .chars()
            .filter(|&c| !is_ascii_tab_or_newline(c))
            .collect(),
    )
}
