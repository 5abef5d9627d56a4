//! Character cursor for traversing configuration text.
//!
//! This module provides the `Cursor` struct which decodes the input one
//! character at a time. It works on raw bytes so that malformed UTF-8 can be
//! scanned (each bad byte reads as U+FFFD) and tracks line/column
//! information for token spans.

use std::borrow::Cow;

use crate::unicode::{decode_char, BOM};

/// A cursor for traversing source text character by character.
///
/// The cursor supports a single level of backtracking: [`Cursor::backup`]
/// undoes the most recent [`Cursor::next_char`], and nothing before it.
///
/// # Example
///
/// ```
/// use icfg_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("no shutdown");
///
/// assert_eq!(cursor.next_char(), Some('n'));
/// assert_eq!(cursor.next_char(), Some('o'));
/// cursor.backup();
/// assert_eq!(cursor.peek_char(), Some('o'));
/// ```
pub struct Cursor<'a> {
    /// The source bytes being traversed.
    source: &'a [u8],

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,

    /// State before the last `next_char`, consumed by `backup`.
    previous: Option<CursorSnapshot>,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Creates a new cursor over bytes that may not be valid UTF-8.
    ///
    /// # Example
    ///
    /// ```
    /// use icfg_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::from_bytes(b"\xFFok");
    /// assert_eq!(cursor.next_char(), Some(char::REPLACEMENT_CHARACTER));
    /// assert_eq!(cursor.position(), 1);
    /// assert_eq!(cursor.next_char(), Some('o'));
    /// ```
    pub fn from_bytes(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
            previous: None,
        }
    }

    /// Consumes and returns the next character, or `None` at end of input.
    ///
    /// The byte position advances by the encoded width of the character.
    /// `\n` starts a new line, as does a `\r` that is not immediately followed
    /// by `\n` (for `\r\n` the line changes on the `\n`).
    ///
    /// # Example
    ///
    /// ```
    /// use icfg_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("é\n");
    /// assert_eq!(cursor.next_char(), Some('é'));
    /// assert_eq!(cursor.position(), 2);
    /// assert_eq!(cursor.next_char(), Some('\n'));
    /// assert_eq!(cursor.line(), 2);
    /// assert_eq!(cursor.next_char(), None);
    /// ```
    pub fn next_char(&mut self) -> Option<char> {
        let Some((c, width)) = decode_char(self.remaining()) else {
            // Nothing was consumed, so there is nothing to back up over.
            self.previous = None;
            return None;
        };

        self.previous = Some(self.snapshot());
        self.position += width;

        let ends_line = match c {
            '\n' => true,
            '\r' => self.source.get(self.position) != Some(&b'\n'),
            _ => false,
        };
        if ends_line {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    /// Undoes the last [`Cursor::next_char`].
    ///
    /// Only one step is remembered: a second `backup` without an intervening
    /// `next_char` does nothing, as does a `backup` after `next_char`
    /// returned `None`.
    pub fn backup(&mut self) {
        if let Some(snapshot) = self.previous.take() {
            self.restore(snapshot);
        }
    }

    /// Returns the next character without consuming it.
    ///
    /// # Example
    ///
    /// ```
    /// use icfg_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("!");
    /// assert_eq!(cursor.peek_char(), Some('!'));
    /// assert_eq!(cursor.position(), 0);
    /// ```
    #[inline]
    pub fn peek_char(&self) -> Option<char> {
        decode_char(self.remaining()).map(|(c, _)| c)
    }

    /// Consumes one line terminator (`\n`, `\r` or `\r\n`) if the cursor is on
    /// one. Returns true if anything was consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use icfg_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("\r\nend");
    /// assert!(cursor.eat_line_terminator());
    /// assert_eq!(cursor.peek_char(), Some('e'));
    /// assert!(!cursor.eat_line_terminator());
    /// ```
    pub fn eat_line_terminator(&mut self) -> bool {
        match self.peek_char() {
            Some('\n') => {
                self.next_char();
                true
            },
            Some('\r') => {
                self.next_char();
                if self.peek_char() == Some('\n') {
                    self.next_char();
                }
                true
            },
            _ => false,
        }
    }

    /// Skips a UTF-8 byte order mark at the very start of the input.
    ///
    /// Returns true if one was skipped. The column is left untouched since the
    /// mark is not part of the text.
    pub fn skip_bom(&mut self) -> bool {
        if self.position == 0 && self.source.starts_with(BOM) {
            self.position = BOM.len();
            self.previous = None;
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the text from the given start position to the current position.
    ///
    /// Borrowed when the range is valid UTF-8. Otherwise the range is decoded
    /// the same way [`Cursor::next_char`] reads it, one U+FFFD per bad byte,
    /// into an owned copy.
    ///
    /// # Example
    ///
    /// ```
    /// use icfg_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("hostname r1");
    /// for _ in 0..8 {
    ///     cursor.next_char();
    /// }
    /// assert_eq!(cursor.slice_from(0), "hostname");
    /// ```
    pub fn slice_from(&self, start: usize) -> Cow<'a, str> {
        let bytes = &self.source[start..self.position];
        if let Ok(text) = std::str::from_utf8(bytes) {
            return Cow::Borrowed(text);
        }

        let mut text = String::with_capacity(bytes.len() + 2);
        let mut rest = bytes;
        while let Some((c, width)) = decode_char(rest) {
            text.push(c);
            rest = &rest[width..];
        }
        Cow::Owned(text)
    }

    fn remaining(&self) -> &'a [u8] {
        &self.source[self.position..]
    }

    /// Creates a snapshot of the current cursor state.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

impl Default for CursorSnapshot {
    fn default() -> Self {
        Self {
            position: 0,
            line: 1,
            column: 1,
        }
    }
}
