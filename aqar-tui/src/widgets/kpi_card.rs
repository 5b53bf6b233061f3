//! Card widgets: headline KPI cards and featured-neighborhood tiles.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use aqar_core::domain::{Kpi, NeighborhoodCard};

use crate::theme::{icon_glyph, Theme};

/// Bordered card for one headline indicator: icon, title, value and an
/// optional year-over-year change.
pub struct KpiCard<'a> {
    kpi: &'a Kpi,
    theme: &'a Theme,
}

impl<'a> KpiCard<'a> {
    pub fn new(kpi: &'a Kpi, theme: &'a Theme) -> Self {
        Self { kpi, theme }
    }
}

impl Widget for KpiCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = self.theme.color(self.kpi.color);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent));

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    icon_glyph(self.kpi.icon),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    self.kpi.title.as_str(),
                    Style::default().fg(self.theme.text_secondary),
                ),
            ]),
            Line::from(Span::styled(
                self.kpi.value.as_str(),
                Style::default()
                    .fg(self.theme.text_primary)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(change) = &self.kpi.change {
            lines.push(change_line(change, self.theme));
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

/// Bordered tile for one featured neighborhood: name, price per square
/// meter and annual growth.
pub struct NeighborhoodTile<'a> {
    card: &'a NeighborhoodCard,
    theme: &'a Theme,
}

impl<'a> NeighborhoodTile<'a> {
    pub fn new(card: &'a NeighborhoodCard, theme: &'a Theme) -> Self {
        Self { card, theme }
    }
}

impl Widget for NeighborhoodTile<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = self.theme.color(self.card.color);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent));

        let lines = vec![
            Line::from(Span::styled(
                self.card.name.as_str(),
                Style::default().fg(self.theme.text_secondary),
            )),
            Line::from(vec![
                Span::styled(
                    self.card.price.as_str(),
                    Style::default()
                        .fg(self.theme.text_primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ريال/متر", Style::default().fg(self.theme.muted)),
            ]),
            Line::from(vec![
                change_span(&self.card.change, self.theme),
                Span::styled(" نمو سنوي", Style::default().fg(self.theme.muted)),
            ]),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

fn change_line<'a>(change: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(change_span(change, theme))
}

fn change_span<'a>(change: &'a str, theme: &Theme) -> Span<'a> {
    let arrow = if change.trim_start().starts_with('-') {
        "↓ "
    } else {
        "↑ "
    };
    Span::styled(
        format!("{arrow}{change}"),
        Style::default()
            .fg(theme.change_color(change))
            .add_modifier(Modifier::BOLD),
    )
}
