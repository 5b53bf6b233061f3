//! Fallback view for paths that match no route.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use aqar_core::compose::NotFoundView;
use aqar_core::domain::ColorToken;

use crate::theme::Theme;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, area: Rect, view: &NotFoundView, theme: &Theme) {
    let amber = theme.color(ColorToken::Amber);
    let rect = centered_rect(60, 50, area);
    f.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(amber))
        .title(" 404 ")
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(amber).add_modifier(Modifier::BOLD));

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "الصفحة غير موجودة",
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("المسار المطلوب: {}", view.requested_path),
            Style::default().fg(theme.text_secondary),
        )),
        Line::default(),
        Line::from(Span::styled(
            "اضغط 1 للعودة إلى الرئيسية",
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .wrap(Wrap { trim: true }),
        rect,
    );
}
