//! Product banner.
//!
//! Capable terminals get six rows of magenta block-element art with the
//! product name and version on the third row. Everything else gets a single
//! plain line.

use console::Style;

use crate::output::OutputMode;
use crate::term::TermKind;

/// Vendor label shown in the banner.
pub const DEFAULT_VENDOR: &str = "mesosphere";

/// Product label shown in the banner.
pub const DEFAULT_PRODUCT: &str = "shakedown";

/// One cell of the banner art.
#[derive(Debug, Clone, Copy)]
enum Cell {
    Glyph { text: &'static str, bold: bool },
    Vendor,
    Product,
    Version,
    Space,
}

const fn glyph(text: &'static str, bold: bool) -> Cell {
    Cell::Glyph { text, bold }
}

const A0: Cell = glyph("\u{2581}", false);
const A1: Cell = glyph("\u{2581}", true);
const B0: Cell = glyph("\u{2590}", false);
const C0: Cell = glyph("\u{259A}", false);
const C1: Cell = glyph("\u{259A}", true);
const D0: Cell = glyph("\u{2596}", false);
const D1: Cell = glyph("\u{2596}", true);
const E0: Cell = glyph("\u{2597}", false);
const E1: Cell = glyph("\u{2597}", true);
const F0: Cell = glyph("\u{259E}", false);
const F1: Cell = glyph("\u{259E}", true);
const G1: Cell = glyph("\u{258C}", true);
const H0: Cell = glyph("\u{2598}", false);
const H1: Cell = glyph("\u{2598}", true);
const I0: Cell = glyph("\u{259D}", false);
const I1: Cell = glyph("\u{259D}", true);
const J0: Cell = glyph("\u{300B}", false);
const K0: Cell = glyph("\u{2501}", false);
const V0: Cell = Cell::Vendor;
const X1: Cell = Cell::Product;
const Y0: Cell = Cell::Version;
const Z0: Cell = Cell::Space;

#[rustfmt::skip]
const ROWS: [&[Cell]; 6] = [
    &[
        Z0, Z0, Z0, A0, A0, A1, A0, A1, A1, A1, A1, A1, A1, A1,
    ],
    &[
        Z0, Z0, B0, Z0, C0, Z0, D0, Z0, Z0, Z0, Z0, E1, Z0, F1, Z0, G1,
    ],
    &[
        Z0, Z0, B0, Z0, Z0, C0, Z0, H0, E0, D1, I1, Z0, F1, Z0, Z0, G1,
        Z0, J0, V0, Z0, X1, Z0, Y0,
    ],
    &[
        K0, Z0, B0, Z0, Z0, F0, C0, I0, Z0, Z0, H1, F1, C1, Z0, Z0, G1,
        Z0, K0, K0, K0, K0, K0, K0, K0, K0, K0, K0, K0, K0, K0, K0, K0,
        K0, K0, K0, K0, K0, K0, K0, K0, K0, K0, K0, K0, K0, K0, Z0, K0,
        K0, Z0, Z0, K0,
    ],
    &[
        Z0, Z0, I0, F0, H0, Z0, Z0, C0, Z0, Z0, F0, Z0, Z0, I1, C1, H1,
    ],
    &[
        Z0, Z0, Z0, Z0, Z0, Z0, Z0, Z0, C0, F0,
    ],
];

/// The product banner.
///
/// # Example
///
/// ```rust
/// use shakedown_console::{Banner, OutputMode, TermKind};
///
/// let banner = Banner::new("1.4.0");
/// assert_eq!(
///     banner.render(TermKind::Plain, OutputMode::Term),
///     ">> mesosphere shakedown v1.4.0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    vendor: String,
    product: String,
    version: String,
}

impl Banner {
    /// Creates a banner for the given version with the default labels.
    pub fn new(version: impl Into<String>) -> Self {
        Self::with_labels(DEFAULT_VENDOR, DEFAULT_PRODUCT, version)
    }

    /// Creates a banner with custom vendor and product labels.
    pub fn with_labels(
        vendor: impl Into<String>,
        product: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            vendor: vendor.into(),
            product: product.into(),
            version: version.into(),
        }
    }

    /// The version shown after the product name.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Renders the banner for a terminal.
    ///
    /// Glyph art is drawn only for [`TermKind::Glyphs`]; its colors follow
    /// `mode`. Debug mode draws the art without color.
    pub fn render(&self, kind: TermKind, mode: OutputMode) -> String {
        if kind.supports_glyphs() {
            self.art(mode.should_use_color())
        } else {
            self.plain()
        }
    }

    /// The one-line fallback banner.
    pub fn plain(&self) -> String {
        format!(">> {} {} v{}", self.vendor, self.product, self.version)
    }

    fn art(&self, use_color: bool) -> String {
        let version = format!("v{}", self.version);
        let rows: Vec<String> = ROWS
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match *cell {
                        Cell::Glyph { text, bold } => paint(text, bold, use_color),
                        Cell::Vendor => paint(&self.vendor, false, use_color),
                        Cell::Product => paint(&self.product, true, use_color),
                        Cell::Version => paint(&version, false, use_color),
                        Cell::Space => " ".to_string(),
                    })
                    .collect()
            })
            .collect();
        rows.join("\n")
    }
}

fn paint(text: &str, bold: bool, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }
    let mut style = Style::new().magenta().force_styling(true);
    if bold {
        style = style.bold();
    }
    style.apply_to(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_widths() {
        let widths: Vec<usize> = ROWS.iter().map(|row| row.len()).collect();
        assert_eq!(widths, [14, 16, 23, 52, 16, 10]);
    }

    #[test]
    fn test_glyph_rows_without_labels() {
        let banner = Banner::with_labels("", "", "");
        let art = banner.render(TermKind::Glyphs, OutputMode::Text);
        let widths: Vec<usize> = art.lines().map(|line| line.chars().count()).collect();
        // Only the version's `v` prefix remains of the labels.
        assert_eq!(widths, [14, 16, 21, 52, 16, 10]);
    }

    #[test]
    fn test_plain_banner() {
        let banner = Banner::new("1.4.0");
        assert_eq!(banner.plain(), ">> mesosphere shakedown v1.4.0");
        assert_eq!(
            banner.render(TermKind::Plain, OutputMode::Text),
            ">> mesosphere shakedown v1.4.0"
        );
    }

    #[test]
    fn test_glyph_banner_layout() {
        let banner = Banner::new("1.4.0");
        let art = banner.render(TermKind::Glyphs, OutputMode::Text);
        let lines: Vec<&str> = art.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "   \u{2581}\u{2581}\u{2581}\u{2581}\u{2581}\u{2581}\u{2581}\u{2581}\u{2581}\u{2581}\u{2581}");
        assert!(lines[2].ends_with("\u{300B}mesosphere shakedown v1.4.0"));
        assert_eq!(lines[3].matches('\u{2501}').count(), 33);
        assert_eq!(lines[5], "        \u{259A}\u{259E}");
    }

    #[test]
    fn test_glyph_banner_colors() {
        let banner = Banner::new("2.0");
        let art = banner.render(TermKind::Glyphs, OutputMode::Term);

        assert!(art.contains("\x1b[35m"));
        assert!(art.contains("\x1b[35m\x1b[1mshakedown\x1b[0m"));
        assert_eq!(
            console::strip_ansi_codes(&art),
            banner.render(TermKind::Glyphs, OutputMode::Text)
        );
    }

    #[test]
    fn test_custom_labels() {
        let banner = Banner::with_labels("acme", "widget", "0.1");
        assert_eq!(banner.plain(), ">> acme widget v0.1");
        assert_eq!(banner.version(), "0.1");
        let art = banner.render(TermKind::Glyphs, OutputMode::Text);
        assert!(art.contains("acme widget v0.1"));
    }
}
