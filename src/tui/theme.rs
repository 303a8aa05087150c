// Theme system for the TUI
//
// A handful of built-in color themes. Each theme defines colors for every
// element of the form card, toasts and status bar.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Betting,
    Dark,
    Light,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Betting, ThemeKind::Dark, ThemeKind::Light]
    }

    /// Look up a theme by config name (case-insensitive)
    pub fn parse(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get config/display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Betting => "betting",
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Betting => Theme::betting(),
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub background: Color,
    pub card: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_type: BorderType,
    pub highlight: Color,

    // Brand
    pub primary: Color,
    pub primary_fg: Color,

    // Feedback
    pub success: Color,
    pub error: Color,

    // Result panel
    pub code: Color,

    // Chrome outside the card
    pub status_bar: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::betting()
    }
}

impl Theme {
    /// Green-on-slate betting brand theme (default)
    pub fn betting() -> Self {
        Self {
            background: Color::Rgb(15, 61, 46),
            card: Color::Rgb(245, 247, 246),
            foreground: Color::Rgb(20, 24, 22),
            muted: Color::Rgb(107, 114, 128),
            border: Color::Rgb(209, 213, 219),
            border_type: BorderType::Rounded,
            highlight: Color::Rgb(22, 163, 74),

            primary: Color::Rgb(21, 128, 61),
            primary_fg: Color::White,

            success: Color::Rgb(22, 163, 74),
            error: Color::Rgb(220, 38, 38),

            code: Color::Rgb(30, 64, 175),

            status_bar: Color::Rgb(187, 247, 208),
        }
    }

    /// Terminal-native dark theme
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            card: Color::Reset,
            foreground: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_type: BorderType::Plain,
            highlight: Color::Cyan,

            primary: Color::Green,
            primary_fg: Color::Black,

            success: Color::Green,
            error: Color::Red,

            code: Color::Yellow,

            status_bar: Color::Gray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            background: Color::White,
            card: Color::White,
            foreground: Color::Black,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_type: BorderType::Rounded,
            highlight: Color::Blue,

            primary: Color::Blue,
            primary_fg: Color::White,

            success: Color::Green,
            error: Color::Red,

            code: Color::Magenta,

            status_bar: Color::DarkGray,
        }
    }

    /// Border style for a control, brighter when focused
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.highlight)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Style for the submit button
    pub fn button_style(&self, focused: bool, enabled: bool) -> Style {
        let base = if enabled {
            Style::default().fg(self.primary_fg).bg(self.primary)
        } else {
            Style::default().fg(self.muted).bg(self.border)
        };
        if focused && enabled {
            base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            base
        }
    }
}
