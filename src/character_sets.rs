/// Check if a character is an ASCII tab or newline
pub fn is_ascii_tab_or_newline(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
}

/// Check if a character belongs to the leading junk browsers skip before an
/// address: C0 controls, space, and the Unicode whitespace characters a URL
/// bar ignores.
pub fn is_control_or_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..=' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// First character of a scheme: ASCII letter
pub fn is_scheme_start(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Remaining scheme characters: ASCII alphanumeric, `+`, `-`, `.`
pub fn is_scheme_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}
