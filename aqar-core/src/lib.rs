//! Aqar Core — Riyadh market datasets, chart composition, route table.
//!
//! The data-presentation layer of the dashboard, with no terminal
//! dependency:
//! - Domain types (series points, category values, cards, forecast and
//!   risk records, icon/color tokens)
//! - `MarketData`: the fixed literal dataset registry
//! - Route table and navigation links
//! - View composition: dataset → chart/card input shape, one view per
//!   route, NotFound fallback for everything else

pub mod compose;
pub mod domain;
pub mod nav;
pub mod registry;
