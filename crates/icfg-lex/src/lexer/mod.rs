//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, the state dispatch loop and token emission
//! - `indent` - Indentation measurement and block open/close tokens
//! - `line` - Statement and comment lines

mod core;
mod indent;
mod line;

pub use self::core::{tokenize, Lexer};
