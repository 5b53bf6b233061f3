//! Route table and navigation links.
//!
//! Four routed views plus a NotFound fallback for anything else. A link
//! is active exactly when its path equals the current path; active state
//! is derived at render time, never stored.

use serde::{Deserialize, Serialize};

use crate::domain::IconRef;

/// A routed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Overview,
    Analytics,
    Predictions,
    Sources,
}

impl Route {
    pub const ALL: [Route; 4] =
        [Route::Overview, Route::Analytics, Route::Predictions, Route::Sources];

    pub fn index(self) -> usize {
        match self {
            Route::Overview => 0,
            Route::Analytics => 1,
            Route::Predictions => 2,
            Route::Sources => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Route::Overview),
            1 => Some(Route::Analytics),
            2 => Some(Route::Predictions),
            3 => Some(Route::Sources),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Overview => "/",
            Route::Analytics => "/analytics",
            Route::Predictions => "/predictions",
            Route::Sources => "/sources",
        }
    }

    /// Exact path match; anything else is the NotFound view.
    pub fn from_path(path: &str) -> Option<Self> {
        Route::ALL.iter().copied().find(|r| r.path() == path)
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Overview => "الرئيسية",
            Route::Analytics => "التحليلات",
            Route::Predictions => "التنبؤات",
            Route::Sources => "مصادر البيانات",
        }
    }

    pub fn icon(self) -> IconRef {
        match self {
            Route::Overview => IconRef::City,
            Route::Analytics => IconRef::BarChart,
            Route::Predictions => IconRef::TrendingUp,
            Route::Sources => IconRef::Database,
        }
    }

    pub fn next(self) -> Route {
        Route::from_index((self.index() + 1) % 4).unwrap_or(Route::Overview)
    }

    pub fn prev(self) -> Route {
        Route::from_index((self.index() + 3) % 4).unwrap_or(Route::Overview)
    }
}

/// One entry in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub route: Route,
    pub label: &'static str,
    pub icon: IconRef,
}

impl NavLink {
    pub fn is_active(&self, current_path: &str) -> bool {
        self.route.path() == current_path
    }
}

/// The nav bar contents, in display order.
pub fn nav_links() -> Vec<NavLink> {
    Route::ALL
        .iter()
        .map(|&route| NavLink { route, label: route.label(), icon: route.icon() })
        .collect()
}
