//! View composition — datasets in, chart/card input shapes out.
//!
//! Everything here is pure and total: composers never fail, never touch
//! I/O, and re-running them on the same data yields the same specs. The
//! shell re-composes on every frame.

pub mod bars;
pub mod line;
pub mod palette;
pub mod share;
pub mod views;

pub use bars::{compose_bars, BarChartSpec};
pub use line::{compose_line, LineChartSpec, LineSeries};
pub use palette::{series_color, PALETTE};
pub use share::{compose_shares, ShareChartSpec, ShareSlice};
pub use views::{
    compose, compose_analytics, compose_overview, compose_predictions, compose_sources,
    AnalyticsView, NotFoundView, OverviewView, PredictionsView, SourcesView, ViewSpec,
};
