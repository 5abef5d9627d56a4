//! Edge case tests for icfg-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Lexer, Token, TokenKind};

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize("edge", source).iter().map(|t| t.kind).collect()
    }

    fn lex_bytes(source: &[u8]) -> Vec<Token<'_>> {
        Lexer::from_bytes("edge", source).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_newline() {
        assert_eq!(kinds("\n"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_edge_only_terminators() {
        assert_eq!(kinds("\r\n\r\r\n\n"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_edge_trailing_whitespace_line_at_end() {
        use TokenKind::*;
        assert_eq!(
            kinds("a\n  b\n    "),
            vec![Statement, Indent, Statement, Dedent, Eof]
        );
    }

    #[test]
    fn test_edge_eof_after_whitespace_inside_block() {
        let tokens = tokenize("edge", "a\n  b\n    ");
        let eof = tokens.last().unwrap();
        assert_eq!(eof.pos(), 10);
    }

    #[test]
    fn test_edge_no_trailing_newline() {
        let tokens = tokenize("edge", "a\n  b");
        assert_eq!(tokens[2].text, "b");
        assert_eq!(tokens.last().unwrap().pos(), 5);
    }

    #[test]
    fn test_edge_only_comments_at_odd_depths() {
        use TokenKind::*;
        assert_eq!(
            kinds("   !a\n!b\n\t\t!c\n !d"),
            vec![Comment, Comment, Comment, Comment, Eof]
        );
    }

    #[test]
    fn test_edge_comment_at_inconsistent_depth_is_fine() {
        use TokenKind::*;
        // The comment's width (2) matches no open level, but comments are
        // transparent so this is not an error.
        assert_eq!(
            kinds("a\n    b\n  ! note\n    c\n"),
            vec![Statement, Indent, Statement, Comment, Statement, Dedent, Eof]
        );
    }

    #[test]
    fn test_edge_comment_between_blocks() {
        use TokenKind::*;
        assert_eq!(
            kinds("a\n  b\n!\nc\n  d\n"),
            vec![
                Statement, Indent, Statement, Comment, Dedent, Statement, Indent, Statement,
                Dedent, Eof
            ]
        );
    }

    #[test]
    fn test_edge_same_width_tab_and_spaces() {
        use TokenKind::*;
        assert_eq!(
            kinds("a\n\tb\n        c\n    \t d"),
            vec![
                Statement, Indent, Statement, Statement, Indent, Statement, Dedent, Dedent,
                Eof
            ]
        );
    }

    #[test]
    fn test_edge_error_is_final() {
        let mut lexer = Lexer::new("edge", "a\n    b\n  c\n");
        let mut tokens = Vec::new();
        for _ in 0..10 {
            tokens.push(lexer.next_token());
        }
        let first_error = tokens
            .iter()
            .position(|t| t.kind == TokenKind::Error)
            .unwrap();
        assert!(tokens[first_error..].iter().all(|t| t.kind == TokenKind::Error));
        assert!(lexer.is_finished());
    }

    #[test]
    fn test_edge_malformed_utf8_in_statement() {
        let tokens = lex_bytes(b"interface \xFF\xFEeth0\n  mtu 1500\n");
        assert_eq!(tokens[0].kind, TokenKind::Statement);
        assert_eq!(tokens[0].text, "interface \u{FFFD}\u{FFFD}eth0");
        assert_eq!(tokens[1].kind, TokenKind::Indent);
        assert_eq!(tokens[2].text, "mtu 1500");
        assert_eq!(tokens[2].pos(), 19);
    }

    #[test]
    fn test_edge_truncated_utf8_text_matches_scanned_chars() {
        let tokens = lex_bytes(b"ab\xE2\x82cd\n  x");
        assert_eq!(tokens[0].text, "ab\u{FFFD}\u{FFFD}cd");
        assert_eq!(tokens[0].text.chars().count(), 6);
        assert_eq!(tokens[0].span.len(), 6);

        // Columns on the next line are unaffected by the bad bytes.
        assert_eq!(tokens[1].kind, TokenKind::Indent);
        assert_eq!(tokens[2].text, "x");
        assert_eq!(tokens[2].span.column, 3);
    }

    #[test]
    fn test_edge_malformed_utf8_as_indentation_breaker() {
        // A bad byte is content, not whitespace.
        let tokens = lex_bytes(b"\x80");
        assert_eq!(tokens[0].kind, TokenKind::Statement);
        assert_eq!(tokens[0].text, "\u{FFFD}");
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn test_edge_unicode_whitespace_is_content() {
        let tokens = tokenize("edge", "\u{00A0}x");
        assert_eq!(tokens[0].kind, TokenKind::Statement);
        assert_eq!(tokens[0].text, "\u{00A0}x");
    }

    #[test]
    fn test_edge_nul_is_content() {
        let tokens = tokenize("edge", "\0");
        assert_eq!(tokens[0].kind, TokenKind::Statement);
        assert_eq!(tokens[0].text, "\0");
    }

    #[test]
    fn test_edge_long_line() {
        let line = "x".repeat(100_000);
        let tokens = tokenize("edge", &line);
        assert_eq!(tokens[0].text.len(), 100_000);
    }

    #[test]
    fn test_edge_deep_nesting() {
        let source: String = (0..200)
            .map(|depth| format!("{}level {}\n", " ".repeat(depth), depth))
            .collect();
        let tokens = tokenize("edge", &source);
        let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
        let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
        assert_eq!(indents, 199);
        assert_eq!(dedents, 199);
    }

    #[test]
    fn test_edge_bom_then_indent() {
        use TokenKind::*;
        assert_eq!(kinds("\u{FEFF}  a"), vec![Indent, Statement, Dedent, Eof]);
    }

    #[test]
    fn test_edge_bom_not_at_start_is_content() {
        let tokens = tokenize("edge", "a\n\u{FEFF}b");
        assert_eq!(tokens[1].text, "\u{FEFF}b");
    }
}
