use serde::{Deserialize, Serialize};

/// A named number — neighborhood prices, property-type shares.
///
/// Values are non-negative. Share values need not sum to 100; the share
/// composer derives percentages from the set it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryValue {
    pub name: String,
    pub value: f64,
}

impl CategoryValue {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self { name: name.into(), value }
    }
}
