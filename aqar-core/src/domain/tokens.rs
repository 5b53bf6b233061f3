//! Render-agnostic tokens — icons and colors as data.
//!
//! Datasets carry *identifiers*, never render handles. The TUI theme
//! resolves `IconRef` to a glyph and `ColorToken` to a terminal color.

use serde::{Deserialize, Serialize};

/// Semantic palette token. Derived from the site's accent colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorToken {
    Blue,
    Indigo,
    Violet,
    Emerald,
    Orange,
    Amber,
    Gray,
}

/// Icon identifier attached to cards, factors and nav links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconRef {
    /// Dwelling (price-per-meter KPI).
    Home,
    /// Single building (property count KPI).
    Building,
    /// City skyline (brand, overview link).
    City,
    /// Bar chart (analytics link).
    BarChart,
    /// Rising trend (ROI KPI, predictions link, growth factors).
    TrendingUp,
    /// Target (confidence KPI).
    Target,
    /// Stacked storage (sources link).
    Database,
    /// Idea (long-horizon factors).
    Lightbulb,
    /// Informational note.
    Info,
    /// Risk marker.
    Alert,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_serialize_as_plain_strings() {
        let json = serde_json::to_string(&ColorToken::Emerald).unwrap();
        assert_eq!(json, "\"Emerald\"");
        let back: ColorToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ColorToken::Emerald);

        let json = serde_json::to_string(&IconRef::TrendingUp).unwrap();
        assert_eq!(json, "\"TrendingUp\"");
    }
}
