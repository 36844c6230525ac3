//! Count-bar charts for the categorical columns.

use crate::ui::theme::Styles;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{BarChart, Block, Borders, Paragraph},
    Frame,
};

/// One count-bar chart: a title and (value, count) pairs in first-seen
/// order.
pub struct CategoryBars<'a> {
    title: String,
    counts: &'a [(String, usize)],
    color: Color,
}

impl<'a> CategoryBars<'a> {
    pub fn new(title: impl Into<String>, counts: &'a [(String, usize)], color: Color) -> Self {
        Self {
            title: title.into(),
            counts,
            color,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title.clone())
            .title_style(Styles::section_title());

        if self.counts.is_empty() {
            let empty = Paragraph::new("No values").style(Styles::dim()).block(block);
            f.render_widget(empty, area);
            return;
        }

        let data: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count as u64))
            .collect();

        // spread the bars across the available width
        let inner_width = area.width.saturating_sub(2);
        let gaps = (data.len().saturating_sub(1)) as u16;
        let bar_width = if data.is_empty() {
            1
        } else {
            ((inner_width.saturating_sub(gaps)) / data.len() as u16).clamp(3, 14)
        };

        let chart = BarChart::default()
            .block(block)
            .data(data.as_slice())
            .bar_width(bar_width)
            .bar_gap(1)
            .bar_style(Style::default().fg(self.color))
            .value_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(self.color),
            )
            .label_style(Styles::dim());

        f.render_widget(chart, area);
    }
}
