//! Share-of-total chart.
//!
//! Terminal stand-in for a pie chart: every slice gets a swatch, its
//! percentage label and a proportion bar scaled to the panel width.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

use aqar_core::compose::ShareChartSpec;

use crate::theme::Theme;

pub struct ShareChart<'a> {
    spec: &'a ShareChartSpec,
    theme: &'a Theme,
}

impl<'a> ShareChart<'a> {
    pub fn new(spec: &'a ShareChartSpec, theme: &'a Theme) -> Self {
        Self { spec, theme }
    }
}

impl Widget for ShareChart<'_> {
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
        if inner.width < 4 || inner.height < 2 {
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

        let bar_span = inner.width.saturating_sub(2) as usize;
        for (i, slice) in self.spec.slices.iter().enumerate() {
            let y = inner.y + (i as u16) * 2;
            if y + 1 >= inner.y + inner.height {
                break;
            }
            let color = self.theme.color(slice.color);

            buf.set_string(inner.x + 1, y, "■", Style::default().fg(color));
            buf.set_string(
                inner.x + 3,
                y,
                &slice.label,
                Style::default()
                    .fg(self.theme.text_primary)
                    .add_modifier(Modifier::BOLD),
            );

            let filled = ((slice.percent / 100.0) * bar_span as f64).round() as usize;
            let filled = filled.min(bar_span);
            if filled > 0 {
                buf.set_string(
                    inner.x + 1,
                    y + 1,
                    "█".repeat(filled),
                    Style::default().fg(color),
                );
            }
            if filled < bar_span {
                buf.set_string(
                    inner.x + 1 + filled as u16,
                    y + 1,
                    "░".repeat(bar_span - filled),
                    Style::default().fg(self.theme.panel_border),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqar_core::compose::compose_shares;
    use aqar_core::domain::CategoryValue;

    fn spec() -> ShareChartSpec {
        let categories = vec![
            CategoryValue::new("فيلا", 45.0),
            CategoryValue::new("شقة", 35.0),
            CategoryValue::new("أرض", 20.0),
        ];
        compose_shares("توزيع أنواع العقارات", &categories)
    }

    fn buffer_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
        }
        text
    }

    fn count_in_row(buf: &Buffer, y: u16, symbol: &str) -> usize {
        (0..buf.area.width)
            .filter(|&x| buf.cell((x, y)).map(|c| c.symbol() == symbol) == Some(true))
            .count()
    }

    #[test]
    fn test_renders_every_slice_label() {
        let spec = spec();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        ShareChart::new(&spec, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("توزيع أنواع العقارات"));
        assert!(text.contains("فيلا 45%"));
        assert!(text.contains("شقة 35%"));
        assert!(text.contains("أرض 20%"));
    }

    #[test]
    fn test_bar_fill_matches_percent() {
        let spec = spec();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        ShareChart::new(&spec, &theme).render(area, &mut buf);

        // Inner area is 38 wide, bars span 36 cells. First slice holds 45%.
        let expected = ((45.0 / 100.0) * 36.0_f64).round() as usize;
        assert_eq!(count_in_row(&buf, 2, "█"), expected);
    }

    #[test]
    fn test_empty_spec_reports_no_data() {
        let spec = compose_shares("فارغ", &[]);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        ShareChart::new(&spec, &theme).render(area, &mut buf);

        assert!(buffer_text(&buf).contains("لا توجد بيانات"));
    }

    #[test]
    fn test_slices_clip_to_panel_height() {
        let spec = spec();
        let theme = Theme::default();
        // Room for one slice only.
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        ShareChart::new(&spec, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("فيلا 45%"));
        assert!(!text.contains("أرض 20%"));
    }
}
