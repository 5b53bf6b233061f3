//! Landing view: hero copy, KPI cards, featured neighborhoods, attribution.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use aqar_core::compose::OverviewView;

use crate::theme::Theme;
use crate::ui::split_columns;
use crate::widgets::{KpiCard, NeighborhoodTile};

pub fn render(f: &mut Frame, area: Rect, view: &OverviewView, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(3),
        ])
        .split(area);

    render_hero(f, rows[0], view, theme);

    let slots = split_columns(rows[1], view.kpis.len());
    for (kpi, slot) in view.kpis.iter().zip(slots.iter()) {
        f.render_widget(KpiCard::new(kpi, theme), *slot);
    }

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            view.neighborhoods_heading.as_str(),
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ))),
        rows[2],
    );

    let slots = split_columns(rows[3], view.neighborhoods.len());
    for (card, slot) in view.neighborhoods.iter().zip(slots.iter()) {
        f.render_widget(NeighborhoodTile::new(card, theme), *slot);
    }

    render_sources(f, rows[4], view, theme);
}

fn render_hero(f: &mut Frame, area: Rect, view: &OverviewView, theme: &Theme) {
    let mut lines = vec![Line::from(Span::styled(
        view.hero_title.as_str(),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ))];
    for part in &view.hero_tagline {
        lines.push(Line::from(Span::styled(
            part.as_str(),
            Style::default().fg(theme.text_secondary),
        )));
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn render_sources(f: &mut Frame, area: Rect, view: &OverviewView, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            view.sources_heading.as_str(),
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            view.sources.join(" • "),
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(Span::styled(
            format!("آخر تحديث: {}", view.last_updated),
            Style::default().fg(theme.muted),
        )),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
