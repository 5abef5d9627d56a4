//! Indentation handling.
//!
//! Every line starts here. The leading spaces and tabs are measured, then
//! the line is classified. Only statement lines touch the indent stack:
//! blank lines and comment lines pass through without opening or closing
//! anything.

use tracing::{debug, trace};

use super::core::{Lexer, State};
use crate::error::LexError;
use crate::token::TokenKind;
use crate::unicode::{is_indent_space, is_line_terminator, COMMENT_MARKER};

impl<'a> Lexer<'a> {
    /// Measures the indentation of the current line and decides what the
    /// rest of the line is.
    pub(super) fn lex_indent(&mut self) -> State {
        let mut width: usize = 0;
        loop {
            match self.cursor.next_char() {
                Some(c) if is_indent_space(c) => {
                    let columns = if c == '\t' { self.tab_width } else { 1 };
                    width = width.saturating_add(columns);
                },
                Some(_) => {
                    self.cursor.backup();
                    break;
                },
                None => break,
            }
        }
        self.line_indent = width;
        self.mark_token_start();

        match self.cursor.peek_char() {
            // Trailing whitespace with no newline.
            None => State::EndSection,
            Some(c) if is_line_terminator(c) => {
                self.cursor.eat_line_terminator();
                State::Section
            },
            Some(COMMENT_MARKER) => State::Comment,
            Some(_) => match self.align_blocks() {
                Ok(()) => State::Statement,
                Err(error) => {
                    self.emit_error(error);
                    State::Done
                },
            },
        }
    }

    /// Opens or closes blocks so that the innermost open level equals the
    /// current line's indentation.
    ///
    /// A deeper line opens exactly one block. A shallower line closes blocks
    /// until the innermost is no deeper than the line; if that leaves a level
    /// shallower than the line, the indentation is inconsistent.
    fn align_blocks(&mut self) -> Result<(), LexError> {
        let width = self.line_indent;
        let top = self.top_level();

        if width > top {
            self.indents.push(width);
            trace!(width, depth = self.indents.len(), "open block");
            self.emit_point(TokenKind::Indent);
            return Ok(());
        }

        let mut closed = top;
        while let Some(&level) = self.indents.last() {
            if level <= width {
                break;
            }
            self.indents.pop();
            closed = level;
            trace!(level, depth = self.indents.len(), "close block");
            self.emit_point(TokenKind::Dedent);
        }

        let below = self.top_level();
        if below == width {
            Ok(())
        } else {
            Err(LexError::InconsistentIndent {
                width,
                below,
                above: closed,
            })
        }
    }

    /// Closes every open block and ends the stream.
    pub(super) fn lex_end_section(&mut self) -> State {
        self.mark_token_start();
        while let Some(level) = self.indents.pop() {
            trace!(level, depth = self.indents.len(), "close block at end of input");
            self.emit_point(TokenKind::Dedent);
        }
        debug!(name = %self.name(), offset = self.cursor.position(), "reached end of input");
        self.emit_point(TokenKind::Eof);
        State::Done
    }

    /// Innermost open level; 0 when no block is open.
    fn top_level(&self) -> usize {
        self.indents.last().copied().unwrap_or(0)
    }
}
