//! Charts view: price trend on top, neighborhood bars and property-type
//! shares side by side below.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use aqar_core::compose::AnalyticsView;

use crate::theme::Theme;
use crate::widgets::{BarChartPanel, LineChart, ShareChart};

pub fn render(f: &mut Frame, area: Rect, view: &AnalyticsView, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(10),
            Constraint::Length(13),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            view.title.as_str(),
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ))),
        rows[0],
    );

    f.render_widget(LineChart::new(&view.price_trend, theme), rows[1]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);
    f.render_widget(BarChartPanel::new(&view.neighborhoods, theme), cols[0]);
    f.render_widget(ShareChart::new(&view.property_types, theme), cols[1]);
}
