//! Forecast, impact-factor and risk records for the predictions page.

use serde::{Deserialize, Serialize};

use super::tokens::{ColorToken, IconRef};

/// Forecast confidence grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn label(self) -> &'static str {
        match self {
            Confidence::Low => "منخفضة",
            Confidence::Medium => "متوسطة",
            Confidence::High => "عالية",
        }
    }
}

/// Expected-impact grade for a market factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    pub fn label(self) -> &'static str {
        match self {
            Impact::Low => "تأثير منخفض",
            Impact::Medium => "تأثير متوسط",
            Impact::High => "تأثير عالي",
        }
    }
}

/// Per-region growth forecast card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRegion {
    pub region: String,
    /// Display string, e.g. "+4.5%".
    pub forecast: String,
    pub confidence: Confidence,
    pub color: ColorToken,
}

/// A market force and its expected effect on prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactFactor {
    pub name: String,
    /// Display string, e.g. "+20%". Sign is part of the text.
    pub impact: String,
    pub level: Impact,
    pub color: ColorToken,
    pub icon: IconRef,
}

/// A watchlist entry: something that could break the forecasts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskItem {
    pub title: String,
    pub description: String,
}
