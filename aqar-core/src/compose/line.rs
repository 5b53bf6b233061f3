//! Multi-series line chart composition.

use serde::{Deserialize, Serialize};

use super::palette::series_color;
use crate::domain::{ColorToken, TimeSeriesPoint};

/// One line on the chart. `points` pairs an index into the shared period
/// axis with a value; a period where the key is absent is simply not
/// listed, which renders as a gap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineSeries {
    pub key: String,
    pub name: String,
    pub color: ColorToken,
    pub points: Vec<(usize, f64)>,
}

/// Input shape for the line chart widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineChartSpec {
    pub title: String,
    /// Shared x axis, one label per point in source order.
    pub periods: Vec<String>,
    pub series: Vec<LineSeries>,
}

impl LineChartSpec {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Build a line chart spec from a point list.
///
/// The series list is the distinct category keys across all points, in
/// first-appearance order. Colors rotate through the palette by series
/// position. Display names come from `labels` (key, name) pairs, falling
/// back to the key itself. Empty input yields a spec with no series.
pub fn compose_line(
    title: &str,
    points: &[TimeSeriesPoint],
    labels: &[(&str, &str)],
) -> LineChartSpec {
    let mut keys: Vec<&str> = Vec::new();
    for point in points {
        for key in point.keys() {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
    }

    let series = keys
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let name = labels
                .iter()
                .find(|(k, _)| k == key)
                .map(|&(_, name)| name)
                .unwrap_or(key);
            let points: Vec<(usize, f64)> = points
                .iter()
                .enumerate()
                .filter_map(|(x, p)| p.value(key).map(|v| (x, v)))
                .collect();
            LineSeries {
                key: key.to_string(),
                name: name.to_string(),
                color: series_color(i),
                points,
            }
        })
        .collect();

    LineChartSpec {
        title: title.to_string(),
        periods: points.iter().map(|p| p.period.clone()).collect(),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trend() -> Vec<TimeSeriesPoint> {
        vec![
            TimeSeriesPoint::new("2020", &[("villa", 1800.0), ("apartment", 1200.0)]),
            TimeSeriesPoint::new("2021", &[("villa", 1950.0), ("apartment", 1300.0)]),
        ]
    }

    #[test]
    fn one_series_per_distinct_key() {
        let spec = compose_line("أسعار", &trend(), &[]);
        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].key, "villa");
        assert_eq!(spec.series[1].key, "apartment");
        assert_eq!(spec.periods, ["2020", "2021"]);
    }

    #[test]
    fn labels_map_with_key_fallback() {
        let spec = compose_line("أسعار", &trend(), &[("villa", "فيلا")]);
        assert_eq!(spec.series[0].name, "فيلا");
        // No label supplied: key passes through.
        assert_eq!(spec.series[1].name, "apartment");
    }

    #[test]
    fn colors_follow_first_appearance_order() {
        let spec = compose_line("أسعار", &trend(), &[]);
        assert_eq!(spec.series[0].color, series_color(0));
        assert_eq!(spec.series[1].color, series_color(1));
    }

    #[test]
    fn missing_key_becomes_a_gap() {
        let mut points = trend();
        points.push(TimeSeriesPoint::new("2022", &[("villa", 2100.0)]));
        let spec = compose_line("أسعار", &points, &[]);
        let apartment = &spec.series[1];
        assert_eq!(apartment.points, vec![(0, 1200.0), (1, 1300.0)]);
        // The axis keeps all three periods.
        assert_eq!(spec.periods.len(), 3);
    }

    #[test]
    fn key_first_seen_late_still_gets_a_series() {
        let mut points = trend();
        points.push(TimeSeriesPoint::new("2022", &[("villa", 2100.0), ("land", 1150.0)]));
        let spec = compose_line("أسعار", &points, &[]);
        assert_eq!(spec.series.len(), 3);
        assert_eq!(spec.series[2].key, "land");
        assert_eq!(spec.series[2].points, vec![(2, 1150.0)]);
    }

    #[test]
    fn empty_input_is_empty_state() {
        let spec = compose_line("أسعار", &[], &[]);
        assert!(spec.is_empty());
        assert!(spec.periods.is_empty());
    }
}
