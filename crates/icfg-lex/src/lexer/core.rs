//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, its constructors and the
//! dispatch loop that drives the scanning states.

use std::collections::VecDeque;

use icfg_util::Span;
use tracing::{debug, warn};

use crate::config::LexerConfig;
use crate::cursor::{Cursor, CursorSnapshot};
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Scanning states. Each state does one step of work, possibly queueing
/// tokens, and names its successor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum State {
    /// At the start of a line.
    Section,
    /// Measuring the indentation of the current line.
    Indent,
    /// On the first character of a statement.
    Statement,
    /// On a comment marker.
    Comment,
    /// Input exhausted; close open blocks.
    EndSection,
    /// A terminal token has been queued.
    Done,
}

/// Lexer for indentation-structured configuration text.
///
/// The lexer is pull-driven: each call to [`Lexer::next_token`] runs the
/// state machine just far enough to produce one token. Once the terminal
/// token (end of file or error) has been produced, every further call
/// returns it again.
///
/// # Example
///
/// ```
/// use icfg_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("r1.cfg", "interface eth0\n  mtu 9000\n");
/// assert_eq!(lexer.next_token().kind, TokenKind::Statement);
/// assert_eq!(lexer.next_token().kind, TokenKind::Indent);
/// assert_eq!(lexer.next_token().text, "mtu 9000");
/// assert_eq!(lexer.next_token().kind, TokenKind::Dedent);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'a> {
    /// Label for diagnostics, usually a file name.
    name: String,

    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Columns per tab.
    pub(super) tab_width: usize,

    /// Current scanning state.
    state: State,

    /// Open indentation levels above the implicit level 0, strictly increasing.
    pub(super) indents: Vec<usize>,

    /// Indentation width of the line being scanned.
    pub(super) line_indent: usize,

    /// Where the current token starts.
    pub(super) token_start: CursorSnapshot,

    /// Tokens produced but not yet handed out.
    pending: VecDeque<Token<'a>>,

    /// The end-of-file or error token, once produced.
    terminal: Option<Token<'a>>,

    /// Whether the terminal token has been handed out.
    terminal_returned: bool,

    /// Byte offset of the last token handed out.
    last_pos: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the default configuration.
    pub fn new(name: impl Into<String>, input: &'a str) -> Self {
        Self::with_config(name, input, LexerConfig::default())
    }

    /// Creates a lexer with the given configuration.
    pub fn with_config(name: impl Into<String>, input: &'a str, config: LexerConfig) -> Self {
        Self::build(name.into(), Cursor::new(input), input.len(), config)
    }

    /// Creates a lexer over bytes that may not be valid UTF-8.
    ///
    /// Malformed sequences are read as U+FFFD; they never stop the lexer.
    ///
    /// # Example
    ///
    /// ```
    /// use icfg_lex::{Lexer, TokenKind};
    ///
    /// let mut lexer = Lexer::from_bytes("dump", b"description caf\xE9\n");
    /// let token = lexer.next_token();
    /// assert_eq!(token.kind, TokenKind::Statement);
    /// assert_eq!(token.text, "description caf\u{FFFD}");
    /// ```
    pub fn from_bytes(name: impl Into<String>, input: &'a [u8]) -> Self {
        Self::from_bytes_with_config(name, input, LexerConfig::default())
    }

    /// Creates a lexer over possibly malformed bytes with the given configuration.
    pub fn from_bytes_with_config(
        name: impl Into<String>,
        input: &'a [u8],
        config: LexerConfig,
    ) -> Self {
        let name = name.into();
        if let Err(err) = std::str::from_utf8(input) {
            warn!(
                name = %name,
                offset = err.valid_up_to(),
                "input is not valid UTF-8, malformed bytes will read as U+FFFD"
            );
        }
        Self::build(name, Cursor::from_bytes(input), input.len(), config)
    }

    fn build(name: String, mut cursor: Cursor<'a>, len: usize, config: LexerConfig) -> Self {
        cursor.skip_bom();
        debug!(name = %name, tab_width = config.tab_width(), len, "created lexer");
        Self {
            name,
            token_start: cursor.snapshot(),
            cursor,
            tab_width: config.tab_width(),
            state: State::Section,
            indents: Vec::new(),
            line_indent: 0,
            pending: VecDeque::new(),
            terminal: None,
            terminal_returned: false,
            last_pos: 0,
        }
    }

    /// Returns the next token.
    ///
    /// After the stream has ended this keeps returning the terminal token.
    pub fn next_token(&mut self) -> Token<'a> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                self.terminal_returned |= token.is_terminal();
                self.last_pos = token.pos();
                return token;
            }
            if let Some(terminal) = &self.terminal {
                self.last_pos = terminal.pos();
                return terminal.clone();
            }
            self.step();
        }
    }

    /// Runs one state and moves to the state it returns.
    fn step(&mut self) {
        self.state = match self.state {
            State::Section => self.lex_section(),
            State::Indent => self.lex_indent(),
            State::Statement => self.lex_statement(),
            State::Comment => self.lex_comment(),
            State::EndSection => self.lex_end_section(),
            State::Done => State::Done,
        };
    }

    fn lex_section(&mut self) -> State {
        if self.cursor.is_at_end() {
            State::EndSection
        } else {
            State::Indent
        }
    }

    /// Marks the current cursor position as the start of the next token.
    pub(super) fn mark_token_start(&mut self) {
        self.token_start = self.cursor.snapshot();
    }

    /// Queues a token covering the text from the token start to the cursor.
    pub(super) fn emit(&mut self, kind: TokenKind) {
        let start = self.token_start;
        let span = Span::new(start.position, self.cursor.position(), start.line, start.column);
        let text = self.cursor.slice_from(start.position);
        self.push(Token::new(kind, span, text));
    }

    /// Queues an empty token at the token start.
    pub(super) fn emit_point(&mut self, kind: TokenKind) {
        let start = self.token_start;
        let span = Span::point(start.position, start.line, start.column);
        self.push(Token::new(kind, span, ""));
    }

    /// Queues an error token at the token start.
    pub(super) fn emit_error(&mut self, error: LexError) {
        let start = self.token_start;
        debug!(
            name = %self.name,
            line = start.line,
            column = start.column,
            %error,
            "lexing failed"
        );
        let span = Span::point(start.position, start.line, start.column);
        self.push(Token::new(TokenKind::Error, span, error.to_string()));
    }

    fn push(&mut self, token: Token<'a>) {
        if token.is_terminal() {
            self.terminal = Some(token.clone());
        }
        self.pending.push_back(token);
    }

    /// Returns the label given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the configured tab width.
    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// Number of blocks currently open.
    pub fn depth(&self) -> usize {
        self.indents.len()
    }

    /// Returns true once the terminal token has been produced.
    pub fn is_finished(&self) -> bool {
        self.terminal.is_some()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Byte offset of the last token returned by [`Lexer::next_token`].
    ///
    /// A parser holding only the token kinds can use this to locate an
    /// error. Zero before the first token.
    pub fn last_pos(&self) -> usize {
        self.last_pos
    }
}

/// Yields every token, the terminal one included, then `None`.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.terminal_returned {
            None
        } else {
            Some(self.next_token())
        }
    }
}

/// Lexes `input` to completion.
///
/// The returned tokens always end with exactly one end-of-file or error
/// token.
///
/// # Example
///
/// ```
/// use icfg_lex::{tokenize, TokenKind};
///
/// let kinds: Vec<_> = tokenize("inline", "! banner\nhostname r1")
///     .iter()
///     .map(|t| t.kind)
///     .collect();
/// assert_eq!(kinds, [TokenKind::Comment, TokenKind::Statement, TokenKind::Eof]);
/// ```
pub fn tokenize<'a>(name: &str, input: &'a str) -> Vec<Token<'a>> {
    Lexer::new(name, input).collect()
}
