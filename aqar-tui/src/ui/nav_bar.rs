//! Top navigation bar: brand on the right edge of the spans, one link per
//! route, the active one highlighted.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use aqar_core::nav::nav_links;

use crate::app::AppState;
use crate::theme::icon_glyph;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.data.brand),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│", Style::default().fg(theme.panel_border)),
    ];
    for link in nav_links() {
        let style = if link.is_active(&app.path) {
            Style::default()
                .fg(theme.text_primary)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" {} {} ", icon_glyph(link.icon), link.label),
            style,
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.panel_border));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
