// Helper function for matching u32s against chars.
// It would be pleasant if you could pattern-match u32s against chars, but Rust does not allow this.
// Convert a u32 to a char, except if the conversion fails, return the largest char.
// Be careful to not use the result of this conversion except to pattern match against literals.
#[inline]
pub fn to_char_sat(c: u32) -> char {
    char::from_u32(c).unwrap_or(core::char::MAX)
}

/// \return whether \p c has syntactic meaning outside of an escape.
/// These may not appear as bare literals, even inside a bracket.
#[inline]
pub fn is_metachar(c: char) -> bool {
    matches!(
        c,
        '|' | '*' | '?' | '+' | '^' | '$' | '.' | '\\' | '(' | ')' | '[' | '{' | '}'
    )
}

/// Format an element value for display: printable chars as themselves, the
/// rest as hex.
pub fn display_element(c: u32) -> String {
    match char::from_u32(c) {
        Some(ch) if !ch.is_control() => format!("'{}'", ch),
        _ => format!("0x{:x}", c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_char_sat() {
        assert_eq!(to_char_sat('a' as u32), 'a');
        assert_eq!(to_char_sat(0xD800), core::char::MAX);
        assert_eq!(to_char_sat(0x11_0000), core::char::MAX);
    }

    #[test]
    fn test_metachars() {
        for c in "|*?+^$.\\()[{}".chars() {
            assert!(is_metachar(c), "{} should be a metachar", c);
        }
        for c in "abc]-, 09".chars() {
            assert!(!is_metachar(c), "{} should not be a metachar", c);
        }
    }

    #[test]
    fn test_display_element() {
        assert_eq!(display_element('x' as u32), "'x'");
        assert_eq!(display_element('\n' as u32), "0xa");
    }
}
