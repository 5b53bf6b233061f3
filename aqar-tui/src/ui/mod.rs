//! Frame layout and view dispatch.
//!
//! Every frame is nav bar on top, status bar at the bottom, and in between
//! the view composed for the current path. The composition itself lives in
//! `aqar-core`; this module only routes the result to the right renderer.

pub mod analytics;
pub mod nav_bar;
pub mod not_found;
pub mod overview;
pub mod predictions;
pub mod sources;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use aqar_core::compose::{compose, ViewSpec};

use crate::app::AppState;

/// Draw one full frame for the application state.
pub fn draw(f: &mut Frame, app: &AppState) {
    let area = f.area();
    // Backdrop, so gaps between panels don't show the terminal color.
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    nav_bar::render(f, chunks[0], app);

    let view = compose(&app.data, &app.path);
    match &view {
        ViewSpec::Overview(v) => overview::render(f, chunks[1], v, &app.theme),
        ViewSpec::Analytics(v) => analytics::render(f, chunks[1], v, &app.theme),
        ViewSpec::Predictions(v) => predictions::render(f, chunks[1], v, &app.theme),
        ViewSpec::Sources(v) => sources::render(f, chunks[1], v, &app.theme),
        ViewSpec::NotFound(v) => not_found::render(f, chunks[1], v, &app.theme),
    }

    status_bar::render(f, chunks[2], app);
}

/// Split an area into `n` equal columns.
pub fn split_columns(area: Rect, n: usize) -> std::rc::Rc<[Rect]> {
    let n = n.max(1);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, n as u32); n])
        .split(area)
}

/// Rect centered in `area`, sized as percentages of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_halves() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(50, 50, area);
        assert_eq!(rect, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn test_split_columns_covers_the_area() {
        let area = Rect::new(0, 0, 100, 5);
        let cols = split_columns(area, 4);
        assert_eq!(cols.len(), 4);
        assert_eq!(cols.iter().map(|r| r.width).sum::<u16>(), 100);
        assert!(cols.iter().all(|r| r.height == 5));
    }
}
