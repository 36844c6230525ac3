//! Dtype listing: declared type and numeric/categorical class per column.

use crate::data::analyzer::DtypeEntry;
use crate::ui::theme::Styles;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct DtypePanel<'a> {
    entries: &'a [DtypeEntry],
}

impl<'a> DtypePanel<'a> {
    pub fn new(entries: &'a [DtypeEntry]) -> Self {
        Self { entries }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let widest = self
            .entries
            .iter()
            .map(|e| e.column_name.len())
            .max()
            .unwrap_or(0);

        let lines: Vec<Line> = self
            .entries
            .iter()
            .map(|entry| {
                let type_color = if entry.data_type.is_numeric() {
                    Color::Green
                } else {
                    Color::Magenta
                };
                Line::from(vec![
                    Span::raw(format!(
                        "{:<width$}  ",
                        entry.column_name,
                        width = widest
                    )),
                    Span::styled(entry.describe(), Style::default().fg(type_color)),
                ])
            })
            .collect();

        let panel = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Data Types")
                .title_style(Styles::section_title()),
        );
        f.render_widget(panel, area);
    }
}
