//! Output mode selection.

use std::fmt;
use std::str::FromStr;

use console::Term;

/// How decorated text is emitted.
///
/// # Example
///
/// ```rust
/// use shakedown_console::OutputMode;
///
/// let mode: OutputMode = "term-debug".parse().unwrap();
/// assert!(mode.is_debug());
/// assert!(!OutputMode::Text.should_use_color());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Color when standard output is a color-capable terminal.
    #[default]
    Auto,
    /// Always emit ANSI styling.
    Term,
    /// Never emit ANSI styling; glyphs and spacing are kept.
    Text,
    /// Replace styling with `[name]...[/name]` tags.
    TermDebug,
}

impl OutputMode {
    /// All accepted names, in the order shown in help output.
    pub const NAMES: &'static [&'static str] = &["auto", "term", "text", "term-debug"];

    /// Returns true if decorations should carry ANSI escape sequences.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::TermDebug => false,
        }
    }

    /// Returns true if styles render as bracketed tags.
    pub fn is_debug(&self) -> bool {
        matches!(self, OutputMode::TermDebug)
    }

    /// Returns the canonical flag name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Auto => "auto",
            OutputMode::Term => "term",
            OutputMode::Text => "text",
            OutputMode::TermDebug => "term-debug",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an output mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutputModeError {
    name: String,
}

impl fmt::Display for ParseOutputModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown output mode '{}' (expected one of: {})",
            self.name,
            OutputMode::NAMES.join(", ")
        )
    }
}

impl std::error::Error for ParseOutputModeError {}

impl FromStr for OutputMode {
    type Err = ParseOutputModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(OutputMode::Auto),
            "term" => Ok(OutputMode::Term),
            "text" => Ok(OutputMode::Text),
            "term-debug" => Ok(OutputMode::TermDebug),
            other => Err(ParseOutputModeError {
                name: other.to_string(),
            }),
        }
    }
}
