//! Named text decorations.
//!
//! This module provides:
//!
//! - [`Decoration`]: the fixed set of styles (`step-maj`, `quote-pass`, `fail`, ...)
//! - [`Tone`]: the fail/pass/skip outcome that colors a decoration
//! - [`decorate`]: name-based lookup that falls back to plain text
//!
//! Styles are resolved by name at runtime, but the set itself is closed.
//! A name outside the set is not an error; the text passes through unchanged.

mod decoration;
mod tone;

pub use decoration::{Decoration, QUOTE_HEAD_MARKER, QUOTE_MARKER};
pub use tone::Tone;

use crate::output::OutputMode;

/// Decorates `text` with the style called `name`.
///
/// Unknown names leave the text untouched.
///
/// # Example
///
/// ```rust
/// use shakedown_console::{decorate, OutputMode};
///
/// assert_eq!(decorate("ok", "pass", OutputMode::Text), "ok ");
/// assert_eq!(decorate("ok", "no-such-style", OutputMode::Term), "ok");
/// ```
pub fn decorate(text: &str, name: &str, mode: OutputMode) -> String {
    match Decoration::from_name(name) {
        Some(decoration) => decoration.apply(text, mode),
        None => text.to_string(),
    }
}
