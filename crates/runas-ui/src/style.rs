use colored::{ColoredString, Colorize};

/// Status glyphs printed in front of finished spinner lines.
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
}

/// Semantic colors for status output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Success,
    Error,
}

impl Style {
    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            Style::Success => text.green(),
            Style::Error => text.red(),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Style::Success => icons::SUCCESS,
            Style::Error => icons::ERROR,
        }
    }

    /// `<icon> <message>` with the icon colored for this style.
    pub fn status_line(self, message: &str) -> String {
        format!("{} {}", self.paint(self.icon()), message)
    }
}
