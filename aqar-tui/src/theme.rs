//! Color theme for the TUI.
//!
//! The core crate describes colors as [`ColorToken`]s and icons as
//! [`IconRef`]s; this module is the single place where those become concrete
//! RGB values and glyphs.

use ratatui::style::Color;

use aqar_core::domain::{ColorToken, Confidence, IconRef};

/// Palette used across all views. Default is the dark "riyadh night" scheme.
pub struct Theme {
    pub background: Color,
    pub panel_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub muted: Color,
    /// Growth figures ("+7.2%" and friends).
    pub positive: Color,
    pub negative: Color,
    /// Active nav link and other highlights.
    pub accent: Color,

    blue: Color,
    indigo: Color,
    violet: Color,
    emerald: Color,
    orange: Color,
    amber: Color,
    gray: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::riyadh_night()
    }
}

impl Theme {
    pub fn riyadh_night() -> Self {
        Self {
            background: Color::Rgb(15, 23, 42),
            panel_border: Color::Rgb(51, 65, 85),
            text_primary: Color::Rgb(241, 245, 249),
            text_secondary: Color::Rgb(203, 213, 225),
            muted: Color::Rgb(100, 116, 139),
            positive: Color::Rgb(34, 197, 94),
            negative: Color::Rgb(239, 68, 68),
            accent: Color::Rgb(37, 99, 235),

            blue: Color::Rgb(59, 130, 246),
            indigo: Color::Rgb(99, 102, 241),
            violet: Color::Rgb(139, 92, 246),
            emerald: Color::Rgb(16, 185, 129),
            orange: Color::Rgb(249, 115, 22),
            amber: Color::Rgb(245, 158, 11),
            gray: Color::Rgb(156, 163, 175),
        }
    }

    /// Concrete color for a dataset color token.
    pub fn color(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Blue => self.blue,
            ColorToken::Indigo => self.indigo,
            ColorToken::Violet => self.violet,
            ColorToken::Emerald => self.emerald,
            ColorToken::Orange => self.orange,
            ColorToken::Amber => self.amber,
            ColorToken::Gray => self.gray,
        }
    }

    /// Green for growth, red for decline. Change strings are pre-formatted
    /// in the dataset, so the sign is read off the text itself.
    pub fn change_color(&self, change: &str) -> Color {
        if change.trim_start().starts_with('-') {
            self.negative
        } else {
            self.positive
        }
    }

    pub fn confidence_color(&self, confidence: Confidence) -> Color {
        match confidence {
            Confidence::High => self.positive,
            Confidence::Medium => self.blue,
            Confidence::Low => self.amber,
        }
    }
}

/// Single-column glyph for an icon reference.
pub fn icon_glyph(icon: IconRef) -> &'static str {
    match icon {
        IconRef::Home => "⌂",
        IconRef::Building => "▤",
        IconRef::City => "▦",
        IconRef::BarChart => "▥",
        IconRef::TrendingUp => "↗",
        IconRef::Target => "◎",
        IconRef::Database => "≡",
        IconRef::Lightbulb => "✦",
        IconRef::Info => "ℹ",
        IconRef::Alert => "⚠",
    }
}
