//! Error types for the icfg lexer.
//!
//! Lexing itself never returns these across the public API: a lexing
//! failure becomes the text of a terminal error token. Configuration
//! loading does return [`ConfigError`].

use thiserror::Error;

/// Error raised while producing the token stream.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    /// A dedent landed between two open levels instead of on one.
    #[error(
        "inconsistent indentation: width {width} does not match any open level \
         (nearest enclosing levels are {below} and {above})"
    )]
    InconsistentIndent {
        /// Indentation width of the offending line.
        width: usize,
        /// Deepest open level shallower than `width`.
        below: usize,
        /// Shallowest closed level deeper than `width`.
        above: usize,
    },
}

/// Error type for lexer configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Tab width must be at least one column
    #[error("Invalid tab width: {0} (must be greater than zero)")]
    InvalidTabWidth(usize),

    /// Configuration text could not be parsed
    #[error("Failed to parse lexer configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
