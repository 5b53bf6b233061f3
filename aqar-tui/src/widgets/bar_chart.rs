//! Vertical bar chart for category comparisons.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{BarChart, Block, Borders, Widget};

use aqar_core::compose::BarChartSpec;

use crate::theme::Theme;

/// Renders a [`BarChartSpec`] as one colored column per category. Values are
/// rounded to whole units at render time only; the underlying data stays
/// `f64`.
pub struct BarChartPanel<'a> {
    spec: &'a BarChartSpec,
    theme: &'a Theme,
}

impl<'a> BarChartPanel<'a> {
    pub fn new(spec: &'a BarChartSpec, theme: &'a Theme) -> Self {
        Self { spec, theme }
    }
}

impl Widget for BarChartPanel<'_> {
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
        if inner.width < 3 || inner.height < 3 {
            return;
        }

        if self.spec.is_empty() {
            buf.set_string(
                inner.x + 1,
                inner.y + inner.height / 2,
                "لا توجد بيانات",
                Style::default().fg(self.theme.muted),
            );
            return;
        }

        let values: Vec<(&str, u64)> = self
            .spec
            .bars
            .iter()
            .map(|bar| (bar.name.as_str(), bar.value.round() as u64))
            .collect();

        let n = values.len() as u16;
        let gaps = n.saturating_sub(1);
        let bar_width = (inner.width.saturating_sub(gaps) / n.max(1)).clamp(3, 12);
        let color = self.theme.color(self.spec.color);

        BarChart::default()
            .data(values.as_slice())
            .bar_width(bar_width)
            .bar_gap(1)
            .bar_style(Style::default().fg(color))
            .value_style(
                Style::default()
                    .fg(self.theme.background)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            )
            .label_style(Style::default().fg(self.theme.text_secondary))
            .render(inner, buf);
    }
}
