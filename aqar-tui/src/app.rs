//! Application state shared across the TUI.

use aqar_core::nav::Route;
use aqar_core::registry::MarketData;

use crate::theme::Theme;

/// Everything the draw loop needs: the dataset, the current path and the
/// theme. Views are recomposed from `data` + `path` on every frame, so there
/// is no per-view state to keep in sync here.
pub struct AppState {
    pub data: MarketData,
    /// Current location, e.g. `/` or `/analytics`. May name no known route,
    /// in which case the not-found view is shown.
    pub path: String,
    pub theme: Theme,
    pub running: bool,
}

impl AppState {
    pub fn new(data: MarketData, start_path: impl Into<String>) -> Self {
        Self {
            data,
            path: start_path.into(),
            theme: Theme::default(),
            running: true,
        }
    }

    /// Route matching the current path, if any.
    pub fn current_route(&self) -> Option<Route> {
        Route::from_path(&self.path)
    }

    pub fn navigate(&mut self, route: Route) {
        self.path = route.path().to_string();
    }

    /// Cycle forward through the nav links. From an unknown path this lands
    /// on the overview.
    pub fn next_route(&mut self) {
        let next = self
            .current_route()
            .map(Route::next)
            .unwrap_or(Route::Overview);
        self.navigate(next);
    }

    /// Cycle backward through the nav links.
    pub fn prev_route(&mut self) {
        let prev = self
            .current_route()
            .map(Route::prev)
            .unwrap_or(Route::Overview);
        self.navigate(prev);
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_at(path: &str) -> AppState {
        AppState::new(MarketData::riyadh(), path)
    }

    #[test]
    fn test_new_keeps_start_path_verbatim() {
        let app = app_at("/predictions");
        assert_eq!(app.path, "/predictions");
        assert!(app.running);
        assert_eq!(app.current_route(), Some(Route::Predictions));
    }

    #[test]
    fn test_unknown_path_has_no_route() {
        let app = app_at("/does-not-exist");
        assert_eq!(app.current_route(), None);
    }

    #[test]
    fn test_navigate_rewrites_path() {
        let mut app = app_at("/");
        app.navigate(Route::Sources);
        assert_eq!(app.path, "/sources");
    }

    #[test]
    fn test_next_and_prev_cycle_through_all_routes() {
        let mut app = app_at("/");
        for expected in ["/analytics", "/predictions", "/sources", "/"] {
            app.next_route();
            assert_eq!(app.path, expected);
        }
        app.prev_route();
        assert_eq!(app.path, "/sources");
    }

    #[test]
    fn test_cycling_from_unknown_path_recovers_to_overview() {
        let mut app = app_at("/nope");
        app.next_route();
        assert_eq!(app.current_route(), Some(Route::Overview));

        let mut app = app_at("/nope");
        app.prev_route();
        assert_eq!(app.current_route(), Some(Route::Overview));
    }

    #[test]
    fn test_quit_clears_running() {
        let mut app = app_at("/");
        app.quit();
        assert!(!app.running);
    }
}
