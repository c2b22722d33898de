//! Theme configuration for the display and CLI output
//!
//! Centralizes all color and style definitions.
//! Provides both ratatui styles (for the plot) and ANSI escape codes (for CLI).

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Named theme presets, selectable from the config file or `--theme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Classic,
    Ocean,
    Mono,
}

impl ThemeName {
    pub fn theme(self) -> Theme {
        match self {
            ThemeName::Classic => Theme::classic(),
            ThemeName::Ocean => Theme::ocean(),
            ThemeName::Mono => Theme::mono(),
        }
    }
}

/// Theme configuration for the display.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (status bar, help)
    pub text_primary: Color,
    /// Secondary/dimmed text color (axis labels, hints)
    pub text_secondary: Color,
    /// Accent color for the plot border and key names
    pub accent: Color,
    /// Color of the tracked player's marker
    pub marker: Color,
    /// Error/warning color
    pub error: Color,
    /// Background color (usually default/transparent)
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Gray text, green frame, red circular marker.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            marker: Color::Red,
            error: Color::Red,
            background: Color::Reset,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            marker: Color::Yellow,
            error: Color::Red,
            background: Color::Reset,
        }
    }

    /// No colors beyond the terminal defaults.
    pub fn mono() -> Self {
        Self {
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            accent: Color::Reset,
            marker: Color::Reset,
            error: Color::Reset,
            background: Color::Reset,
        }
    }

    // Style helpers

    /// Fill for the whole display area.
    pub fn background_style(&self) -> Style {
        Style::default().bg(self.background)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn marker_style(&self) -> Style {
        Style::default()
            .fg(self.marker)
            .add_modifier(Modifier::BOLD)
    }

    // ANSI color helpers for CLI output

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.error), text, ANSI_RESET)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}
