//! Reusable render widgets shared by the views.

pub mod bar_chart;
pub mod kpi_card;
pub mod line_chart;
pub mod share_chart;

pub use bar_chart::BarChartPanel;
pub use kpi_card::{KpiCard, NeighborhoodTile};
pub use line_chart::LineChart;
pub use share_chart::ShareChart;
