//! Statement and comment lines.
//!
//! Both run from the token start to the end of the line. The terminator is
//! consumed afterwards but never becomes part of a token.

use super::core::{Lexer, State};
use crate::token::TokenKind;
use crate::unicode::is_line_terminator;

impl<'a> Lexer<'a> {
    /// Lexes a statement. Internal and trailing whitespace is kept.
    pub(super) fn lex_statement(&mut self) -> State {
        self.lex_rest_of_line(TokenKind::Statement)
    }

    /// Lexes a comment, marker included.
    pub(super) fn lex_comment(&mut self) -> State {
        self.lex_rest_of_line(TokenKind::Comment)
    }

    fn lex_rest_of_line(&mut self, kind: TokenKind) -> State {
        while let Some(c) = self.cursor.next_char() {
            if is_line_terminator(c) {
                self.cursor.backup();
                break;
            }
        }
        self.emit(kind);
        self.cursor.eat_line_terminator();
        State::Section
    }
}
