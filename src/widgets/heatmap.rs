//! Correlation heatmap: a color-mapped grid with the coefficient printed
//! in each cell to two decimal places.

use crate::data::stats::CorrelationMatrix;
use crate::ui::theme::{self, Styles};
use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

const CELL_WIDTH: u16 = 6;
const LABEL_WIDTH: usize = 12;

pub struct CorrelationHeatmap<'a> {
    matrix: &'a CorrelationMatrix,
}

impl<'a> CorrelationHeatmap<'a> {
    pub fn new(matrix: &'a CorrelationMatrix) -> Self {
        Self { matrix }
    }

    fn short_label(label: &str) -> String {
        // labels are user-typed; truncate on char boundaries
        if label.chars().count() > LABEL_WIDTH {
            let head: String = label.chars().take(LABEL_WIDTH - 1).collect();
            format!("{}…", head)
        } else {
            label.to_string()
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Correlation Matrix")
            .title_style(Styles::section_title());

        if self.matrix.is_empty() {
            let empty = Paragraph::new("No numeric columns").style(Styles::dim()).block(block);
            f.render_widget(empty, area);
            return;
        }

        let mut header_cells = vec![Cell::from("")];
        header_cells.extend(self.matrix.labels.iter().map(|label| {
            Cell::from(Self::short_label(label)).style(Styles::table_header())
        }));
        let header = Row::new(header_cells);

        let rows: Vec<Row> = self
            .matrix
            .values
            .iter()
            .enumerate()
            .map(|(i, row_values)| {
                let mut cells =
                    vec![Cell::from(Self::short_label(&self.matrix.labels[i]))
                        .style(Styles::table_header())];
                cells.extend(row_values.iter().map(|&value| {
                    if value.is_finite() {
                        Cell::from(format!("{:>5.2}", value)).style(
                            Style::default()
                                .bg(theme::coolwarm(value))
                                .fg(theme::coolwarm_text(value)),
                        )
                    } else {
                        // zero-variance pair: no coefficient to show
                        Cell::from("   --").style(Styles::dim())
                    }
                }));
                Row::new(cells)
            })
            .collect();

        let mut widths = vec![Constraint::Length(LABEL_WIDTH as u16)];
        widths.extend(std::iter::repeat(Constraint::Length(CELL_WIDTH)).take(self.matrix.dim()));

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(0);

        f.render_widget(table, area);
    }
}
