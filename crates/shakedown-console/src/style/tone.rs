//! Result tones shared by the outcome and quote decorations.

use console::{Color, Style};

/// The outcome a decoration reports, which decides its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Fail,
    Pass,
    Skip,
}

impl Tone {
    /// All tones, in the order style names list them.
    pub const ALL: [Tone; 3] = [Tone::Fail, Tone::Pass, Tone::Skip];

    /// Returns the name suffix used in style names (`"fail"`, `"pass"`, `"skip"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Fail => "fail",
            Tone::Pass => "pass",
            Tone::Skip => "skip",
        }
    }

    /// Parses a tone suffix.
    pub fn from_name(name: &str) -> Option<Self> {
        Tone::ALL.into_iter().find(|tone| tone.as_str() == name)
    }

    /// Returns the terminal color for this tone.
    pub fn color(&self) -> Color {
        match self {
            Tone::Fail => Color::Red,
            Tone::Pass => Color::Green,
            Tone::Skip => Color::Yellow,
        }
    }

    pub(crate) fn style(&self) -> Style {
        Style::new().fg(self.color())
    }
}
