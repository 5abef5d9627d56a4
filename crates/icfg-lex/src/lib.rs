//! icfg-lex - Lexical Analyzer for indentation-structured configuration
//!
//! This crate turns a network-device style configuration dump into a flat
//! stream of tokens. Nesting in such dumps is carried only by leading
//! whitespace, so the lexer synthesizes explicit block tokens for the
//! parser:
//!
//! ```text
//! interface eth0            Statement("interface eth0")
//!   description uplink      Indent, Statement("description uplink")
//!   no shutdown             Statement("no shutdown")
//! interface eth1            Dedent, Statement("interface eth1")
//!                           Eof
//! ```
//!
//! # Example Usage
//!
//! ```
//! use icfg_lex::{Lexer, TokenKind};
//!
//! let source = "interface eth0\n  description uplink\n";
//! let mut lexer = Lexer::new("r1.cfg", source);
//!
//! loop {
//!     let token = lexer.next_token();
//!     if token.kind == TokenKind::Error {
//!         eprintln!("{}:{}: {}", lexer.name(), token.span, token.text);
//!     }
//!     if token.is_terminal() {
//!         break;
//!     }
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`config`] - Lexer configuration
//! - [`error`] - Error types
//! - [`unicode`] - Character classification and lossy decoding
//!
//! # Token Kinds
//!
//! - **Statement**: a line's content, indentation stripped
//! - **Comment**: a line whose first non-blank character is `!`
//! - **Indent** / **Dedent**: a block opened / closed
//! - **Eof**: end of input, after all open blocks are closed
//! - **Error**: inconsistent indentation; the text is the message
//!
//! Blank lines and comment lines never open or close a block.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::{ConfigError, ConfigResult, LexError};
pub use icfg_util::Span;
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
