//! Lexer configuration.
//!
//! The only knob is the tab width. The struct derives serde traits so a
//! caller can embed it in its own TOML configuration, e.g. under a
//! `[lexer]` table.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Number of columns a tab contributes to indentation by default.
pub const DEFAULT_TAB_WIDTH: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(width) => width,
    None => panic!("default tab width must be non-zero"),
};

/// Lexer configuration.
///
/// # Example
///
/// ```
/// use icfg_lex::LexerConfig;
///
/// let config = LexerConfig::from_toml_str("tab_width = 4").unwrap();
/// assert_eq!(config.tab_width(), 4);
///
/// assert_eq!(LexerConfig::default().tab_width(), 8);
/// assert!(LexerConfig::default().with_tab_width(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexerConfig {
    /// Columns added to a line's indentation per tab character. Tabs do not
    /// round to tab stops.
    tab_width: NonZeroUsize,
}

impl LexerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with the given tab width.
    ///
    /// Fails with [`ConfigError::InvalidTabWidth`] for zero.
    pub fn with_tab_width(self, tab_width: usize) -> ConfigResult<Self> {
        let tab_width =
            NonZeroUsize::new(tab_width).ok_or(ConfigError::InvalidTabWidth(tab_width))?;
        Ok(Self { tab_width })
    }

    /// Parses a standalone TOML table such as `tab_width = 4`.
    ///
    /// Missing keys take their defaults; unknown keys and a zero tab width
    /// are rejected.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        tracing::debug!(tab_width = config.tab_width(), "loaded lexer configuration");
        Ok(config)
    }

    /// Columns per tab character.
    #[inline]
    pub fn tab_width(&self) -> usize {
        self.tab_width.get()
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}
