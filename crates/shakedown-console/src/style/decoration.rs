//! The fixed set of named decorations.

use console::Style;

use super::tone::Tone;
use crate::output::OutputMode;
use crate::util::prefix_lines;

/// Marker prepended to every line of a quoted block.
pub const QUOTE_MARKER: &str = "\u{250A} ";

/// Opening glyphs of a quote header.
pub const QUOTE_HEAD_MARKER: &str = "\u{250D}\u{2508} ";

/// A named text decoration.
///
/// Style names are resolved with [`Decoration::from_name`]; an unknown name
/// resolves to `None`, which callers treat as "no decoration".
///
/// # Example
///
/// ```rust
/// use shakedown_console::{Decoration, OutputMode, Tone};
///
/// let pass = Decoration::from_name("pass").unwrap();
/// assert_eq!(pass, Decoration::Outcome(Tone::Pass));
/// assert_eq!(pass.apply("done", OutputMode::Text), "done ");
///
/// let quote = Decoration::from_name("quote-fail").unwrap();
/// assert_eq!(quote.apply("a\nb", OutputMode::Text), "\u{250A} a\n\u{250A} b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoration {
    /// `step-maj`: a blank line, then `> text` in bold yellow.
    StepMajor,
    /// `step-min`: `  - text ` in bold.
    StepMinor,
    /// `item-maj`: `    - text `.
    ItemMajor,
    /// `item-min`: `      - text `.
    ItemMinor,
    /// `quote-head-*`: a blank line, then the quote header glyphs and text.
    QuoteHead(Tone),
    /// `quote-*`: every line prefixed with a colored marker.
    Quote(Tone),
    /// `fail`/`pass`/`skip`: colored text with a trailing space.
    Outcome(Tone),
}

impl Decoration {
    /// Every decoration, in registry order.
    pub const ALL: [Decoration; 13] = [
        Decoration::StepMajor,
        Decoration::StepMinor,
        Decoration::ItemMajor,
        Decoration::ItemMinor,
        Decoration::QuoteHead(Tone::Fail),
        Decoration::QuoteHead(Tone::Pass),
        Decoration::QuoteHead(Tone::Skip),
        Decoration::Quote(Tone::Fail),
        Decoration::Quote(Tone::Pass),
        Decoration::Quote(Tone::Skip),
        Decoration::Outcome(Tone::Fail),
        Decoration::Outcome(Tone::Pass),
        Decoration::Outcome(Tone::Skip),
    ];

    /// Resolves a style name.
    ///
    /// Besides the canonical names, `step-major`, `step-minor`,
    /// `item-major`, and `item-minor` are accepted as long forms.
    pub fn from_name(name: &str) -> Option<Self> {
        let decoration = match name {
            "step-maj" | "step-major" => Decoration::StepMajor,
            "step-min" | "step-minor" => Decoration::StepMinor,
            "item-maj" | "item-major" => Decoration::ItemMajor,
            "item-min" | "item-minor" => Decoration::ItemMinor,
            _ => {
                if let Some(tone) = name.strip_prefix("quote-head-") {
                    Decoration::QuoteHead(Tone::from_name(tone)?)
                } else if let Some(tone) = name.strip_prefix("quote-") {
                    Decoration::Quote(Tone::from_name(tone)?)
                } else {
                    Decoration::Outcome(Tone::from_name(name)?)
                }
            }
        };
        Some(decoration)
    }

    /// Returns the canonical style name.
    pub fn name(&self) -> &'static str {
        match self {
            Decoration::StepMajor => "step-maj",
            Decoration::StepMinor => "step-min",
            Decoration::ItemMajor => "item-maj",
            Decoration::ItemMinor => "item-min",
            Decoration::QuoteHead(Tone::Fail) => "quote-head-fail",
            Decoration::QuoteHead(Tone::Pass) => "quote-head-pass",
            Decoration::QuoteHead(Tone::Skip) => "quote-head-skip",
            Decoration::Quote(Tone::Fail) => "quote-fail",
            Decoration::Quote(Tone::Pass) => "quote-pass",
            Decoration::Quote(Tone::Skip) => "quote-skip",
            Decoration::Outcome(tone) => tone.as_str(),
        }
    }

    /// Decorates `text` for the given output mode.
    pub fn apply(&self, text: &str, mode: OutputMode) -> String {
        let paint = Paint::for_mode(mode, self.name());
        match self {
            Decoration::StepMajor => paint.apply(
                &Style::new().yellow().bold(),
                &format!("\n> {}", text),
            ),
            Decoration::StepMinor => paint.apply(&Style::new().bold(), &format!("  - {} ", text)),
            Decoration::ItemMajor => format!("    - {} ", text),
            Decoration::ItemMinor => format!("      - {} ", text),
            Decoration::QuoteHead(tone) => paint.apply(
                &tone.style(),
                &format!("\n{}{}", QUOTE_HEAD_MARKER, text),
            ),
            Decoration::Quote(tone) => {
                prefix_lines(text, &paint.apply(&tone.style(), QUOTE_MARKER))
            }
            Decoration::Outcome(tone) => paint.apply(&tone.style(), &format!("{} ", text)),
        }
    }
}

/// Applies a style, a debug tag, or nothing, depending on the output mode.
enum Paint<'a> {
    Color,
    Debug(&'a str),
    Plain,
}

impl<'a> Paint<'a> {
    fn for_mode(mode: OutputMode, name: &'a str) -> Self {
        if mode.is_debug() {
            Paint::Debug(name)
        } else if mode.should_use_color() {
            Paint::Color
        } else {
            Paint::Plain
        }
    }

    fn apply(&self, style: &Style, text: &str) -> String {
        match self {
            Paint::Color => style.clone().force_styling(true).apply_to(text).to_string(),
            Paint::Debug(name) => format!("[{}]{}[/{}]", name, text, name),
            Paint::Plain => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_canonical_name_resolves() {
        for decoration in Decoration::ALL {
            assert_eq!(Decoration::from_name(decoration.name()), Some(decoration));
        }
    }

    #[test]
    fn test_long_form_aliases() {
        assert_eq!(Decoration::from_name("step-major"), Some(Decoration::StepMajor));
        assert_eq!(Decoration::from_name("step-minor"), Some(Decoration::StepMinor));
        assert_eq!(Decoration::from_name("item-major"), Some(Decoration::ItemMajor));
        assert_eq!(Decoration::from_name("item-minor"), Some(Decoration::ItemMinor));
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(Decoration::from_name(""), None);
        assert_eq!(Decoration::from_name("bold"), None);
        assert_eq!(Decoration::from_name("quote-"), None);
        assert_eq!(Decoration::from_name("quote-head-"), None);
        assert_eq!(Decoration::from_name("quote-error"), None);
        assert_eq!(Decoration::from_name("PASS"), None);
    }

    #[test]
    fn test_text_mode_layouts() {
        let mode = OutputMode::Text;
        assert_eq!(Decoration::StepMajor.apply("Setup", mode), "\n> Setup");
        assert_eq!(Decoration::StepMinor.apply("one", mode), "  - one ");
        assert_eq!(Decoration::ItemMajor.apply("two", mode), "    - two ");
        assert_eq!(Decoration::ItemMinor.apply("three", mode), "      - three ");
        assert_eq!(
            Decoration::QuoteHead(Tone::Fail).apply("trace", mode),
            "\n\u{250D}\u{2508} trace"
        );
        assert_eq!(Decoration::Outcome(Tone::Skip).apply("later", mode), "later ");
    }

    #[test]
    fn test_outcome_colors() {
        let mode = OutputMode::Term;
        assert!(Decoration::Outcome(Tone::Fail)
            .apply("x", mode)
            .starts_with("\x1b[31m"));
        assert!(Decoration::Outcome(Tone::Pass)
            .apply("x", mode)
            .starts_with("\x1b[32m"));
        assert!(Decoration::Outcome(Tone::Skip)
            .apply("x", mode)
            .starts_with("\x1b[33m"));
    }

    #[test]
    fn test_step_major_is_bold_yellow() {
        let output = Decoration::StepMajor.apply("Setup", OutputMode::Term);
        assert!(output.contains("\x1b[33m"));
        assert!(output.contains("\x1b[1m"));
        assert_eq!(console::strip_ansi_codes(&output), "\n> Setup");
    }

    #[test]
    fn test_item_styles_never_colored() {
        assert_eq!(Decoration::ItemMajor.apply("x", OutputMode::Term), "    - x ");
        assert_eq!(Decoration::ItemMinor.apply("x", OutputMode::Term), "      - x ");
    }

    #[test]
    fn test_quote_colors_marker_only() {
        let output = Decoration::Quote(Tone::Pass).apply("line one\nline two", OutputMode::Term);
        let lines: Vec<&str> = output.split('\n').collect();
        assert_eq!(lines.len(), 2);
        for (line, text) in lines.iter().zip(["line one", "line two"]) {
            assert!(line.starts_with("\x1b[32m"));
            assert!(line.ends_with(&format!("\x1b[0m{}", text)));
        }
    }

    #[test]
    fn test_debug_mode_tags() {
        let mode = OutputMode::TermDebug;
        assert_eq!(Decoration::Outcome(Tone::Pass).apply("done", mode), "[pass]done [/pass]");
        assert_eq!(
            Decoration::Quote(Tone::Skip).apply("a\nb", mode),
            "[quote-skip]\u{250A} [/quote-skip]a\n[quote-skip]\u{250A} [/quote-skip]b"
        );
        assert_eq!(Decoration::ItemMajor.apply("x", mode), "    - x ");
    }
}
