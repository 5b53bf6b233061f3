//! Multi-series line chart for price trends.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget};

use aqar_core::compose::LineChartSpec;

use crate::theme::Theme;

/// Renders a [`LineChartSpec`]: one Braille line per series, colored by the
/// series' palette token, with period labels along the x axis.
pub struct LineChart<'a> {
    spec: &'a LineChartSpec,
    theme: &'a Theme,
}

impl<'a> LineChart<'a> {
    pub fn new(spec: &'a LineChartSpec, theme: &'a Theme) -> Self {
        Self { spec, theme }
    }
}

impl Widget for LineChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.panel_border))
            .title(self.spec.title.as_str())
            .title_style(
                Style::default()
                    .fg(self.theme.text_primary)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 2 || inner.height < 2 {
            return;
        }

        let series_data: Vec<Vec<(f64, f64)>> = self
            .spec
            .series
            .iter()
            .map(|s| s.points.iter().map(|&(x, v)| (x as f64, v)).collect())
            .collect();

        if self.spec.is_empty() || series_data.iter().all(Vec::is_empty) {
            buf.set_string(
                inner.x + 1,
                inner.y + inner.height / 2,
                "لا توجد بيانات",
                Style::default().fg(self.theme.muted),
            );
            return;
        }

        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for data in &series_data {
            for &(_, v) in data {
                y_min = y_min.min(v);
                y_max = y_max.max(v);
            }
        }
        // Pad so the extremes sit inside the plot instead of on the frame.
        let pad = ((y_max - y_min) * 0.05).max(1.0);
        let y_lo = y_min - pad;
        let y_hi = y_max + pad;
        let x_hi = self.spec.periods.len().saturating_sub(1) as f64;

        let datasets: Vec<Dataset> = self
            .spec
            .series
            .iter()
            .zip(&series_data)
            .map(|(series, data)| {
                Dataset::default()
                    .name(series.name.as_str())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(self.theme.color(series.color)))
                    .data(data)
            })
            .collect();

        let label_style = Style::default().fg(self.theme.muted);
        let mut x_labels = Vec::new();
        if let Some(first) = self.spec.periods.first() {
            x_labels.push(Span::styled(first.as_str(), label_style));
        }
        if self.spec.periods.len() > 2 {
            let mid = &self.spec.periods[self.spec.periods.len() / 2];
            x_labels.push(Span::styled(mid.as_str(), label_style));
        }
        if self.spec.periods.len() > 1 {
            if let Some(last) = self.spec.periods.last() {
                x_labels.push(Span::styled(last.as_str(), label_style));
            }
        }
        let y_labels = [
            Span::styled(format!("{y_lo:.0}"), label_style),
            Span::styled(format!("{:.0}", (y_lo + y_hi) / 2.0), label_style),
            Span::styled(format!("{y_hi:.0}"), label_style),
        ];

        Chart::new(datasets)
            .x_axis(
                Axis::default()
                    .bounds([0.0, x_hi.max(1.0)])
                    .labels(x_labels)
                    .style(Style::default().fg(self.theme.panel_border)),
            )
            .y_axis(
                Axis::default()
                    .bounds([y_lo, y_hi])
                    .labels(y_labels)
                    .style(Style::default().fg(self.theme.panel_border)),
            )
            .render(inner, buf);
    }
}
