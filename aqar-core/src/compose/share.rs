//! Share-of-whole (pie) composition.

use serde::{Deserialize, Serialize};

use super::palette::series_color;
use crate::domain::{CategoryValue, ColorToken};

/// One slice. `value` passes through unrounded; only the label text is
/// rounded to whole percent, e.g. "فيلا 45%".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareSlice {
    pub name: String,
    pub value: f64,
    /// Unrounded share of the sum, in percent.
    pub percent: f64,
    pub label: String,
    pub color: ColorToken,
}

/// Input shape for the share chart widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareChartSpec {
    pub title: String,
    pub slices: Vec<ShareSlice>,
}

impl ShareChartSpec {
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Build a share chart spec from category values.
///
/// Each slice's percent is `value / sum * 100`; the label rounds it to
/// zero decimals, half away from zero. Empty input or a non-positive sum
/// yields zero slices. A single category labels 100%.
pub fn compose_shares(title: &str, data: &[CategoryValue]) -> ShareChartSpec {
    let sum: f64 = data.iter().map(|c| c.value).sum();
    if data.is_empty() || sum <= 0.0 {
        return ShareChartSpec { title: title.to_string(), slices: Vec::new() };
    }

    let slices = data
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let percent = c.value / sum * 100.0;
            ShareSlice {
                name: c.name.clone(),
                value: c.value,
                percent,
                label: format!("{} {}%", c.name, percent.round() as i64),
                color: series_color(i),
            }
        })
        .collect();

    ShareChartSpec { title: title.to_string(), slices }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property_types() -> Vec<CategoryValue> {
        vec![
            CategoryValue::new("فيلا", 45.0),
            CategoryValue::new("شقة", 35.0),
            CategoryValue::new("أرض", 20.0),
        ]
    }

    #[test]
    fn labels_round_to_whole_percent() {
        let spec = compose_shares("توزيع", &property_types());
        let labels: Vec<&str> = spec.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["فيلا 45%", "شقة 35%", "أرض 20%"]);
    }

    #[test]
    fn values_pass_through_unrounded() {
        let data = vec![CategoryValue::new("أ", 1.0), CategoryValue::new("ب", 2.0)];
        let spec = compose_shares("توزيع", &data);
        assert_eq!(spec.slices[0].value, 1.0);
        assert!((spec.slices[0].percent - 100.0 / 3.0).abs() < 1e-12);
        assert_eq!(spec.slices[0].label, "أ 33%");
        assert_eq!(spec.slices[1].label, "ب 67%");
    }

    #[test]
    fn single_category_is_full_share() {
        let spec = compose_shares("توزيع", &[CategoryValue::new("فيلا", 12.5)]);
        assert_eq!(spec.slices.len(), 1);
        assert_eq!(spec.slices[0].label, "فيلا 100%");
        assert_eq!(spec.slices[0].value, 12.5);
    }

    #[test]
    fn colors_rotate_through_palette() {
        let spec = compose_shares("توزيع", &property_types());
        assert_eq!(spec.slices[0].color, series_color(0));
        assert_eq!(spec.slices[1].color, series_color(1));
        assert_eq!(spec.slices[2].color, series_color(2));
    }

    #[test]
    fn empty_input_is_empty_state() {
        let spec = compose_shares("توزيع", &[]);
        assert!(spec.is_empty());
    }

    #[test]
    fn zero_sum_is_empty_state() {
        let data = vec![CategoryValue::new("أ", 0.0), CategoryValue::new("ب", 0.0)];
        let spec = compose_shares("توزيع", &data);
        assert!(spec.is_empty());
    }
}
