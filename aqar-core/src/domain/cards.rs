//! Card records — pre-formatted display strings, no numeric parsing.

use serde::{Deserialize, Serialize};

use super::tokens::{ColorToken, IconRef};

/// A headline metric card. `value` and `change` are display strings
/// exactly as shown ("2,250 ريال", "+7.2%"); nothing re-formats them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kpi {
    pub title: String,
    pub value: String,
    pub change: Option<String>,
    pub icon: IconRef,
    pub color: ColorToken,
}

/// A featured-neighborhood tile on the overview page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborhoodCard {
    pub name: String,
    pub price: String,
    pub change: String,
    pub color: ColorToken,
}
