//! TimeSeriesPoint — one period of a multi-series dataset.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A period label plus one named value per category key.
///
/// All points in a well-formed series share the same key set; the price
/// trend carries `villa` / `apartment` / `land` for every year. A point
/// missing a key is tolerated downstream (the composer leaves a gap)
/// but flagged by [`validate_key_sets`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub period: String,
    pub values: Vec<(String, f64)>,
}

impl TimeSeriesPoint {
    pub fn new(period: impl Into<String>, values: &[(&str, f64)]) -> Self {
        Self {
            period: period.into(),
            values: values.iter().map(|&(k, v)| (k.to_string(), v)).collect(),
        }
    }

    /// Look up the value for a category key, if present.
    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.iter().find(|(k, _)| k == key).map(|&(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(k, _)| k.as_str())
    }
}

/// Check that every point carries exactly the key set of the first point.
pub fn validate_key_sets(points: &[TimeSeriesPoint]) -> Result<(), SeriesError> {
    let Some(first) = points.first() else {
        return Ok(());
    };
    let expected: Vec<&str> = first.keys().collect();

    for point in &points[1..] {
        for key in &expected {
            if point.value(key).is_none() {
                return Err(SeriesError::MissingKey {
                    period: point.period.clone(),
                    key: key.to_string(),
                });
            }
        }
        for key in point.keys() {
            if !expected.contains(&key) {
                return Err(SeriesError::UnexpectedKey {
                    period: point.period.clone(),
                    key: key.to_string(),
                });
            }
        }
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("point '{period}' is missing category key '{key}'")]
    MissingKey { period: String, key: String },

    #[error("point '{period}' carries unexpected category key '{key}'")]
    UnexpectedKey { period: String, key: String },
}
