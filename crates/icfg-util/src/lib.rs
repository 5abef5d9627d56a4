//! icfg-util - Foundation types for the icfg toolchain
//!
//! Types in this crate are shared between the lexer and whatever consumes its
//! token stream (a parser, a formatter, a diagnostics renderer). They carry no
//! lexing logic of their own.
//!
//! # Example
//!
//! ```
//! use icfg_util::Span;
//!
//! let span = Span::new(15, 32, 2, 3);
//! assert_eq!(span.len(), 17);
//! assert_eq!(span.to_string(), "2:3");
//! ```

#![warn(missing_docs)]

pub mod span;

pub use span::Span;
