//! Character classification and lossy UTF-8 decoding.
//!
//! The lexer only cares about a handful of characters: the two indentation
//! characters, the line terminators and the comment marker. Everything else
//! is opaque statement text.

/// Marker that starts a comment line.
pub const COMMENT_MARKER: char = '!';

/// UTF-8 encoding of the byte order mark, skipped at the start of input.
pub const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Returns true for the characters that make up line indentation.
///
/// # Example
///
/// ```
/// use icfg_lex::unicode::is_indent_space;
///
/// assert!(is_indent_space(' '));
/// assert!(is_indent_space('\t'));
/// assert!(!is_indent_space('\n'));
/// assert!(!is_indent_space('\u{00A0}'));
/// ```
#[inline]
pub fn is_indent_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Returns true for `\n` and `\r`, the two characters that can end a line.
#[inline]
pub fn is_line_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Decodes the first character of `bytes`.
///
/// Returns the character and the number of bytes it occupies, or `None` when
/// `bytes` is empty. An invalid or truncated sequence decodes as
/// [`char::REPLACEMENT_CHARACTER`] with a width of one byte, so a scan over
/// malformed input always makes progress.
///
/// # Example
///
/// ```
/// use icfg_lex::unicode::decode_char;
///
/// assert_eq!(decode_char(b"a"), Some(('a', 1)));
/// assert_eq!(decode_char("é".as_bytes()), Some(('é', 2)));
/// assert_eq!(decode_char(b"\xFFa"), Some((char::REPLACEMENT_CHARACTER, 1)));
/// assert_eq!(decode_char(b""), None);
/// ```
pub fn decode_char(bytes: &[u8]) -> Option<(char, usize)> {
    let &first = bytes.first()?;

    // Fast path for ASCII
    if first < 0x80 {
        return Some((first as char, 1));
    }

    let width = match first {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return Some((char::REPLACEMENT_CHARACTER, 1)),
    };

    // from_utf8 rejects overlong forms and surrogates for us.
    let decoded = bytes
        .get(..width)
        .and_then(|seq| std::str::from_utf8(seq).ok())
        .and_then(|s| s.chars().next());

    Some(match decoded {
        Some(c) => (c, width),
        None => (char::REPLACEMENT_CHARACTER, 1),
    })
}
