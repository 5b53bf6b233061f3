//! Forecasts view: regional outlook cards, the factor table, the risk
//! watchlist and the methodology footnote.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use aqar_core::compose::PredictionsView;
use aqar_core::domain::{ColorToken, ForecastRegion};

use crate::theme::{icon_glyph, Theme};
use crate::ui::split_columns;

pub fn render(f: &mut Frame, area: Rect, view: &PredictionsView, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Length(4),
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

    let slots = split_columns(rows[1], view.forecasts.len());
    for (forecast, slot) in view.forecasts.iter().zip(slots.iter()) {
        render_forecast_card(f, *slot, forecast, theme);
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(rows[2]);
    render_factors(f, cols[0], view, theme);
    render_risks(f, cols[1], view, theme);

    let footer = vec![
        Line::from(Span::styled(
            view.methodology_heading.as_str(),
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            view.methodology_note.as_str(),
            Style::default().fg(theme.muted),
        )),
    ];
    f.render_widget(
        Paragraph::new(footer).wrap(Wrap { trim: true }),
        rows[3],
    );
}

fn render_forecast_card(f: &mut Frame, area: Rect, forecast: &ForecastRegion, theme: &Theme) {
    let accent = theme.color(forecast.color);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let lines = vec![
        Line::from(Span::styled(
            forecast.region.as_str(),
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(vec![
            Span::styled(
                forecast.forecast.as_str(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" نمو متوقع سنوياً", Style::default().fg(theme.muted)),
        ]),
        Line::from(vec![
            Span::styled("الثقة: ", Style::default().fg(theme.muted)),
            Span::styled(
                forecast.confidence.label(),
                Style::default().fg(theme.confidence_color(forecast.confidence)),
            ),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_factors(f: &mut Frame, area: Rect, view: &PredictionsView, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.panel_border))
        .title(view.factors_heading.as_str())
        .title_style(
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        );

    let lines: Vec<Line> = view
        .factors
        .iter()
        .map(|factor| {
            let accent = theme.color(factor.color);
            Line::from(vec![
                Span::styled(icon_glyph(factor.icon), Style::default().fg(accent)),
                Span::raw(" "),
                Span::styled(
                    factor.name.as_str(),
                    Style::default().fg(theme.text_primary),
                ),
                Span::raw("  "),
                Span::styled(
                    factor.impact.as_str(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(factor.level.label(), Style::default().fg(theme.muted)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_risks(f: &mut Frame, area: Rect, view: &PredictionsView, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.panel_border))
        .title(view.risks_heading.as_str())
        .title_style(
            Style::default()
                .fg(theme.negative)
                .add_modifier(Modifier::BOLD),
        );

    let mut lines = Vec::new();
    for risk in &view.risks {
        lines.push(Line::from(vec![
            Span::styled("⚠ ", Style::default().fg(theme.negative)),
            Span::styled(
                risk.title.as_str(),
                Style::default()
                    .fg(theme.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            risk.description.as_str(),
            Style::default().fg(theme.text_secondary),
        )));
        lines.push(Line::default());
    }
    lines.push(Line::from(vec![
        Span::styled("✦ ", Style::default().fg(theme.color(ColorToken::Amber))),
        Span::styled(
            view.advisory_tip.as_str(),
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::ITALIC),
        ),
    ]));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
