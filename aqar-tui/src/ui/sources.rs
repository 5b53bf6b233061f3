//! Attribution view: where the numbers come from and when they were
//! last refreshed.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use aqar_core::compose::SourcesView;
use aqar_core::domain::IconRef;

use crate::theme::{icon_glyph, Theme};

pub fn render(f: &mut Frame, area: Rect, view: &SourcesView, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(4)])
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

    let mut lines = Vec::new();
    for source in &view.sources {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", icon_glyph(IconRef::Database)),
                Style::default().fg(theme.accent),
            ),
            Span::styled(
                source.as_str(),
                Style::default().fg(theme.text_primary),
            ),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("آخر تحديث: {}", view.last_updated),
        Style::default().fg(theme.muted),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.panel_border));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        rows[1],
    );
}
