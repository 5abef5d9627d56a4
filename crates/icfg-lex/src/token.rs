//! Token definitions.
//!
//! A configuration dump lexes into very few kinds of token: the content of
//! each line (a statement or a comment) and the synthesized block structure
//! in between. The stream always ends with exactly one terminal token.

use std::borrow::Cow;
use std::fmt;

use icfg_util::Span;

/// The kind of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Lexing failed; the token text holds the message. Terminal.
    Error,
    /// End of input. Terminal.
    Eof,
    /// A line opened a new, deeper block.
    Indent,
    /// A block was closed. One per closed level.
    Dedent,
    /// Line content with indentation stripped.
    Statement,
    /// A comment line, from the marker to the end of the line.
    Comment,
}

impl TokenKind {
    /// Returns true for kinds that end the stream.
    ///
    /// # Example
    ///
    /// ```
    /// use icfg_lex::TokenKind;
    ///
    /// assert!(TokenKind::Eof.is_terminal());
    /// assert!(TokenKind::Error.is_terminal());
    /// assert!(!TokenKind::Dedent.is_terminal());
    /// ```
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, TokenKind::Error | TokenKind::Eof)
    }

    /// Returns true for the synthesized block tokens.
    #[inline]
    pub fn is_structural(self) -> bool {
        matches!(self, TokenKind::Indent | TokenKind::Dedent)
    }

    /// Short name used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Error => "error",
            TokenKind::Eof => "EOF",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Statement => "statement",
            TokenKind::Comment => "comment",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lexed token.
///
/// `text` borrows from the input whenever it can. It is owned for error
/// messages and for text that covered malformed UTF-8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// What the token is.
    pub kind: TokenKind,
    /// Where the token is. Structural tokens and EOF have empty spans.
    pub span: Span,
    /// Source text covered by the token, or the message for errors.
    pub text: Cow<'a, str>,
}

impl<'a> Token<'a> {
    /// Creates a token.
    pub fn new(kind: TokenKind, span: Span, text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
        }
    }

    /// Byte offset of the token in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.span.start
    }

    /// Returns true if this token ends the stream.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }

    /// Detaches the token from the input it was lexed from.
    pub fn into_owned(self) -> Token<'static> {
        Token {
            kind: self.kind,
            span: self.span,
            text: Cow::Owned(self.text.into_owned()),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Error => f.write_str(&self.text),
            TokenKind::Statement | TokenKind::Comment => write!(f, "{:?}", self.text),
            kind => f.write_str(kind.as_str()),
        }
    }
}
