//! Aqar TUI — terminal dashboard for the Riyadh real-estate market.
//!
//! The crate splits along the same seams as the screen itself:
//!
//! - [`app`] holds the current path and the loaded [`aqar_core::registry::MarketData`].
//! - [`input`] maps key presses to navigation and quit.
//! - [`theme`] resolves the core's color tokens and icon references to
//!   terminal colors and glyphs.
//! - [`ui`] draws the frame: nav bar, the view for the current path, status bar.
//! - [`widgets`] are the reusable pieces the views are built from (KPI cards,
//!   line/bar/share charts).
//!
//! Everything about *what* is shown lives in `aqar-core`; this crate only
//! decides *where* on screen and in which style.

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;
pub mod widgets;
