//! Styled echo to standard output.
//!
//! [`Echo`] owns its configuration: the quiet flag and output mode are fixed
//! when it is built, and every call reads them. A quiet echo writes nothing.
//!
//! # Example
//!
//! ```rust
//! use shakedown_console::{Echo, EchoOptions, OutputMode};
//!
//! let mut echo = Echo::builder()
//!     .output_mode(OutputMode::Text)
//!     .build_with(Vec::new());
//!
//! echo.echo("Checking agents", &EchoOptions::new().style("step-min").newline(false)).unwrap();
//! echo.echo("done", &EchoOptions::new().style("pass")).unwrap();
//!
//! let written = String::from_utf8(echo.into_inner()).unwrap();
//! assert_eq!(written, "  - Checking agents done \n");
//! ```

use std::io::{self, Stdout, Write};

use crate::banner::Banner;
use crate::output::OutputMode;
use crate::style::Decoration;
use crate::term::TermKind;

/// Per-call echo options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EchoOptions {
    newline: bool,
    decoration: Option<Decoration>,
}

impl EchoOptions {
    /// Plain text followed by a newline.
    pub fn new() -> Self {
        Self {
            newline: true,
            decoration: None,
        }
    }

    /// Sets the style by name.
    ///
    /// An unknown name clears the style, so the text is echoed undecorated.
    pub fn style(mut self, name: &str) -> Self {
        self.decoration = Decoration::from_name(name);
        self
    }

    /// Sets the style directly.
    pub fn decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = Some(decoration);
        self
    }

    /// Controls whether a newline follows the text.
    pub fn newline(mut self, newline: bool) -> Self {
        self.newline = newline;
        self
    }

    /// The decoration to apply, if any.
    pub fn get_decoration(&self) -> Option<Decoration> {
        self.decoration
    }

    /// Whether a newline follows the text.
    pub fn has_newline(&self) -> bool {
        self.newline
    }
}

impl Default for EchoOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Echo`].
#[derive(Debug, Clone, Default)]
pub struct EchoBuilder {
    quiet: bool,
    output_mode: OutputMode,
}

impl EchoBuilder {
    /// A builder with output enabled in [`OutputMode::Auto`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppresses all output when set.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Sets how decorations are rendered. Defaults to [`OutputMode::Auto`].
    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    /// Builds an echo that writes to standard output.
    pub fn build(self) -> Echo<Stdout> {
        self.build_with(io::stdout())
    }

    /// Builds an echo that writes to `writer`.
    pub fn build_with<W: Write>(self, writer: W) -> Echo<W> {
        Echo {
            writer,
            quiet: self.quiet,
            output_mode: self.output_mode,
        }
    }
}

/// Writes optionally decorated text, unless configured to be quiet.
#[derive(Debug)]
pub struct Echo<W: Write = Stdout> {
    writer: W,
    quiet: bool,
    output_mode: OutputMode,
}

impl Echo<Stdout> {
    /// A non-quiet echo to standard output with automatic color detection.
    pub fn stdout() -> Self {
        EchoBuilder::new().build()
    }

    /// Starts an [`EchoBuilder`].
    pub fn builder() -> EchoBuilder {
        EchoBuilder::new()
    }
}

impl<W: Write> Echo<W> {
    /// Whether output is suppressed.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The mode decorations are rendered in.
    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    /// Echoes `text` according to `options`.
    ///
    /// Does nothing when quiet. Otherwise writes the decorated text, then a
    /// newline if requested, and flushes.
    pub fn echo(&mut self, text: &str, options: &EchoOptions) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        match options.decoration {
            Some(decoration) => {
                let decorated = decoration.apply(text, self.output_mode);
                self.writer.write_all(decorated.as_bytes())?;
            }
            None => self.writer.write_all(text.as_bytes())?,
        }
        if options.newline {
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()
    }

    /// Echoes plain text followed by a newline.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        self.echo(text, &EchoOptions::new())
    }

    /// Echoes text in the named style followed by a newline.
    pub fn styled(&mut self, text: &str, style: &str) -> io::Result<()> {
        self.echo(text, &EchoOptions::new().style(style))
    }

    /// Echoes the banner, choosing glyph art or the plain line by `kind`.
    pub fn banner(&mut self, banner: &Banner, kind: TermKind) -> io::Result<()> {
        let rendered = banner.render(kind, self.output_mode);
        self.echo(&rendered, &EchoOptions::new())
    }

    /// Borrows the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consumes the echo, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn quiet_echo_is_silent(
            text in "\\PC*",
            style in prop::option::of("[a-z-]{1,16}"),
            newline in prop::bool::ANY,
        ) {
            let mut echo = Echo::builder()
                .quiet(true)
                .output_mode(OutputMode::Term)
                .build_with(Vec::new());
            let mut options = EchoOptions::new().newline(newline);
            if let Some(style) = &style {
                options = options.style(style);
            }
            echo.echo(&text, &options).unwrap();
            prop_assert!(echo.into_inner().is_empty());
        }
    }
}
