//! Terminal capability detection from the `TERM` variable.

use std::env;

/// Terminal identifiers known to render the banner glyphs.
pub const GLYPH_TERMINALS: &[&str] = &["xterm", "xterm-256color", "xterm-color"];

/// What the terminal can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    /// Block-element glyphs and color render correctly.
    Glyphs,
    /// Fall back to plain ASCII text.
    Plain,
}

impl TermKind {
    /// Reads `TERM` from the process environment.
    ///
    /// An unset or non-UTF-8 `TERM` is treated as [`TermKind::Plain`].
    pub fn from_env() -> Self {
        Self::from_term(env::var("TERM").ok().as_deref())
    }

    /// Classifies a terminal identifier.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shakedown_console::TermKind;
    ///
    /// assert_eq!(TermKind::from_term(Some("xterm-256color")), TermKind::Glyphs);
    /// assert_eq!(TermKind::from_term(Some("dumb")), TermKind::Plain);
    /// assert_eq!(TermKind::from_term(None), TermKind::Plain);
    /// ```
    pub fn from_term(term: Option<&str>) -> Self {
        match term {
            Some(term) if GLYPH_TERMINALS.contains(&term) => TermKind::Glyphs,
            _ => TermKind::Plain,
        }
    }

    pub fn supports_glyphs(&self) -> bool {
        matches!(self, TermKind::Glyphs)
    }
}
