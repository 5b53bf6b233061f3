//! Domain types for the Aqar dashboard.
//!
//! All records here are immutable values: built once by the registry,
//! never mutated, no cross-references.

pub mod cards;
pub mod category;
pub mod outlook;
pub mod series;
pub mod tokens;

pub use cards::{Kpi, NeighborhoodCard};
pub use category::CategoryValue;
pub use outlook::{Confidence, ForecastRegion, Impact, ImpactFactor, RiskItem};
pub use series::{validate_key_sets, SeriesError, TimeSeriesPoint};
pub use tokens::{ColorToken, IconRef};
