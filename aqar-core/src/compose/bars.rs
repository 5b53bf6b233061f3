//! Single-series bar chart composition.

use serde::{Deserialize, Serialize};

use crate::domain::{CategoryValue, ColorToken};

/// Input shape for the bar chart widget: one bar per category, source
/// order preserved, labels verbatim, values unrounded. The whole chart
/// uses one fill color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarChartSpec {
    pub title: String,
    pub bars: Vec<CategoryValue>,
    pub color: ColorToken,
}

impl BarChartSpec {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn max_value(&self) -> f64 {
        self.bars.iter().fold(0.0, |acc, b| acc.max(b.value))
    }
}

pub fn compose_bars(title: &str, data: &[CategoryValue]) -> BarChartSpec {
    BarChartSpec { title: title.to_string(), bars: data.to_vec(), color: ColorToken::Blue }
}
