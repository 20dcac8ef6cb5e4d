//! # Shakedown Console - styled echo and stream redirection
//!
//! Console helpers for the shakedown test runner:
//!
//! - [`Echo`] writes text to standard output, decorated with a named style
//!   (`step-maj`, `quote-fail`, `pass`, ...). A quiet echo writes nothing.
//! - [`Banner`] renders the product banner, as glyph art on terminals that
//!   can show it ([`TermKind`]) and as a single line elsewhere.
//! - [`redirect`] points stdout or stderr at a file for the length of a
//!   scope, and always puts it back.
//!
//! ## Quick Start
//!
//! ```rust
//! use shakedown_console::{Echo, EchoOptions, OutputMode};
//!
//! let mut echo = Echo::builder()
//!     .quiet(false)
//!     .output_mode(OutputMode::Text)
//!     .build_with(Vec::new());
//!
//! echo.styled("Checking cluster", "step-maj").unwrap();
//! echo.echo("agents", &EchoOptions::new().style("step-min").newline(false)).unwrap();
//! echo.styled("ok", "pass").unwrap();
//!
//! let written = String::from_utf8(echo.into_inner()).unwrap();
//! assert_eq!(written, "\n> Checking cluster\n  - agents ok \n");
//! ```
//!
//! ## Styles
//!
//! | Name | Output |
//! |------|--------|
//! | `step-maj` | blank line, `> text`, bold yellow |
//! | `step-min` | `  - text `, bold |
//! | `item-maj` / `item-min` | `    - text ` / `      - text ` |
//! | `quote-head-{fail,pass,skip}` | blank line, `┍┈ text`, red/green/yellow |
//! | `quote-{fail,pass,skip}` | every line prefixed with a colored `┊ ` |
//! | `fail` / `pass` / `skip` | `text `, red/green/yellow |
//!
//! Any other name echoes the text unchanged.
//!
//! ## Output Modes
//!
//! [`OutputMode`] decides how styles are emitted: ANSI colors (`Term`), the
//! same text without escapes (`Text`), bracketed tags for inspecting which
//! style applied (`TermDebug`), or detection from the terminal (`Auto`).

mod banner;
mod echo;
mod output;
mod style;
mod term;
mod util;

#[cfg(unix)]
pub mod redirect;

pub use banner::{Banner, DEFAULT_PRODUCT, DEFAULT_VENDOR};
pub use echo::{Echo, EchoBuilder, EchoOptions};
pub use output::{OutputMode, ParseOutputModeError};
pub use style::{decorate, Decoration, Tone, QUOTE_HEAD_MARKER, QUOTE_MARKER};
pub use term::{TermKind, GLYPH_TERMINALS};
pub use util::prefix_lines;

#[cfg(unix)]
pub use redirect::{redirected, Channel, Redirect, RedirectError};
