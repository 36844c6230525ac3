//! Missing-value panel: one line per column with its null count.

use crate::data::analyzer::MissingCount;
use crate::ui::theme::Styles;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct MissingValuesPanel<'a> {
    counts: &'a [MissingCount],
}

impl<'a> MissingValuesPanel<'a> {
    pub fn new(counts: &'a [MissingCount]) -> Self {
        Self { counts }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let widest = self
            .counts
            .iter()
            .map(|c| c.column_name.len())
            .max()
            .unwrap_or(0);

        let lines: Vec<Line> = self
            .counts
            .iter()
            .map(|count| {
                let style = if count.missing > 0 {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default()
                };
                Line::styled(
                    format!(
                        "{:<width$}  {}",
                        count.column_name,
                        count.missing,
                        width = widest
                    ),
                    style,
                )
            })
            .collect();

        let panel = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Missing Values")
                .title_style(Styles::section_title()),
        );
        f.render_widget(panel, area);
    }
}
