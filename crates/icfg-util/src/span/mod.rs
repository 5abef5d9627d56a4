//! Span module - Source location tracking.
//!
//! A [`Span`] pins a token to the text it was produced from: a half-open byte
//! range plus the human-readable line and column of its first character.
//!
//! # Examples
//!
//! ```
//! use icfg_util::span::Span;
//!
//! let span = Span::new(10, 20, 1, 5);
//! assert!(span.contains(15));
//!
//! let point = Span::point(20, 1, 15);
//! assert!(point.is_empty());
//! ```

use std::fmt;

/// Source location span
///
/// A `Span` represents a range in source text, identified by:
/// - Byte offsets (start, end), end exclusive
/// - Line and column numbers of `start` (for human-readable output)
///
/// Columns count characters, not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use icfg_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    ///
    /// # Examples
    ///
    /// ```
    /// use icfg_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        debug_assert!(start <= end, "span start {} past end {}", start, end);
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span sitting at a single byte offset.
    ///
    /// Synthesized tokens (block open/close, end of file) use point spans
    /// since they cover no source text.
    ///
    /// # Examples
    ///
    /// ```
    /// use icfg_util::span::Span;
    ///
    /// let point = Span::point(7, 2, 3);
    /// assert_eq!(point.start, 7);
    /// assert_eq!(point.start, point.end);
    /// ```
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use icfg_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.len(), 10);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Returns the slice of `source` this span covers, or `None` if the span
    /// does not fall on character boundaries of `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use icfg_util::span::Span;
    ///
    /// let source = "interface eth0";
    /// let span = Span::new(10, 14, 1, 11);
    /// assert_eq!(span.source_text(source), Some("eth0"));
    /// assert_eq!(Span::new(10, 40, 1, 11).source_text(source), None);
    /// ```
    pub fn source_text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_is_empty() {
        let span = Span::point(4, 1, 5);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert!(!span.contains(4));
    }

    #[test]
    fn test_contains_is_half_open() {
        let span = Span::new(2, 5, 1, 3);
        assert!(!span.contains(1));
        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(!span.contains(5));
    }

    #[test]
    fn test_display_line_column() {
        assert_eq!(Span::new(40, 45, 3, 9).to_string(), "3:9");
    }

    #[test]
    fn test_source_text_rejects_non_boundary() {
        let source = "αβ";
        assert_eq!(Span::new(0, 2, 1, 1).source_text(source), Some("α"));
        assert_eq!(Span::new(0, 1, 1, 1).source_text(source), None);
    }

    #[test]
    fn test_default_is_dummy() {
        assert_eq!(Span::default(), Span::DUMMY);
    }
}
