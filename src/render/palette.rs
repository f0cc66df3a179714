//! Terminal theme detection and color styling

use crossterm::style::{Attribute, Color, SetAttribute, SetForegroundColor};
use serde::Deserialize;

/// When to emit color escapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal, honoring NO_COLOR / FORCE_COLOR
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to on/off. `NO_COLOR` beats `FORCE_COLOR`, which beats the tty check.
    pub fn enabled(self, no_color: Option<&str>, force_color: Option<&str>, is_tty: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                if no_color.is_some_and(|v| !v.is_empty()) {
                    false
                } else if force_color.is_some_and(|v| !v.is_empty()) {
                    true
                } else {
                    is_tty
                }
            }
        }
    }
}

/// Terminal color scheme (dark or light background)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Auto-detect terminal theme from background luminance.
    /// Falls back to Dark if detection fails.
    pub fn detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Header/title accent
    pub fn accent(self) -> Color {
        match self {
            Self::Dark => Color::Yellow,
            Self::Light => Color::AnsiValue(130), // dark orange/yellow
        }
    }

    /// Borders and labels
    pub fn muted(self) -> Color {
        match self {
            Self::Dark => Color::AnsiValue(244), // mid gray
            Self::Light => Color::AnsiValue(242),
        }
    }

    /// Values and bars
    pub fn positive(self) -> Color {
        match self {
            Self::Dark => Color::Green,
            Self::Light => Color::AnsiValue(22), // dark green
        }
    }
}

/// Styling applied to rendered text. A disabled palette returns text untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
    theme: Theme,
}

impl Default for Palette {
    fn default() -> Self {
        Self::colored(Theme::Dark)
    }
}

impl Palette {
    pub fn colored(theme: Theme) -> Self {
        Self {
            enabled: true,
            theme,
        }
    }

    pub fn monochrome() -> Self {
        Self {
            enabled: false,
            theme: Theme::Dark,
        }
    }

    pub fn is_colored(self) -> bool {
        self.enabled
    }

    pub fn theme(self) -> Theme {
        self.theme
    }

    /// Wrap `text` in a foreground color and a trailing reset
    pub fn paint(self, color: Color, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!(
            "{}{}{}",
            SetForegroundColor(color),
            text,
            SetAttribute(Attribute::Reset)
        )
    }

    /// Bold accented text (card headers)
    pub fn header(self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!(
            "{}{}{}{}",
            SetAttribute(Attribute::Bold),
            SetForegroundColor(self.theme.accent()),
            text,
            SetAttribute(Attribute::Reset)
        )
    }

    pub fn border(self, text: &str) -> String {
        self.paint(self.theme.muted(), text)
    }

    pub fn muted(self, text: &str) -> String {
        self.paint(self.theme.muted(), text)
    }

    pub fn positive(self, text: &str) -> String {
        self.paint(self.theme.positive(), text)
    }
}
