//! Bottom status bar: key hints on the left, current location on the right.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let key = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);
    let hint = Style::default().fg(theme.muted);

    let mut spans = vec![
        Span::styled(" 1-4", key),
        Span::styled(" تنقل  ", hint),
        Span::styled("Tab/←→", key),
        Span::styled(" تبديل  ", hint),
        Span::styled("q", key),
        Span::styled(" خروج  ", hint),
        Span::styled("│ ", Style::default().fg(theme.panel_border)),
        Span::styled(app.path.as_str(), Style::default().fg(theme.text_secondary)),
    ];
    match app.current_route() {
        Some(route) => spans.push(Span::styled(
            format!("  {}", route.label()),
            Style::default().fg(theme.accent),
        )),
        None => spans.push(Span::styled(
            "  مسار غير معروف",
            Style::default().fg(theme.negative),
        )),
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
