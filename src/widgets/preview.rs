//! Tabular preview of the record table.
//!
//! Used twice on the page: the full dataset preview at the top and the
//! short head preview under the rename form.

use crate::data::DataTable;
use crate::ui::theme::Styles;
use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

pub struct DatasetPreview<'a> {
    table: &'a DataTable,
    title: String,
    show_row_numbers: bool,
    max_rows: Option<usize>,
}

impl<'a> DatasetPreview<'a> {
    pub fn new(table: &'a DataTable, title: impl Into<String>) -> Self {
        Self {
            table,
            title: title.into(),
            show_row_numbers: false,
            max_rows: None,
        }
    }

    pub fn with_row_numbers(mut self, show: bool) -> Self {
        self.show_row_numbers = show;
        self
    }

    /// Cap the number of rows shown (head preview)
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if self.table.is_empty() {
            let empty = Paragraph::new("No rows")
                .block(Block::default().borders(Borders::ALL).title(self.title.clone()))
                .style(Styles::dim());
            f.render_widget(empty, area);
            return;
        }

        let row_limit = self.max_rows.unwrap_or(self.table.row_count());
        let headers = self.table.column_names();

        // width per column: header or widest cell, kept within sane bounds
        let mut col_widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
        for row_idx in 0..row_limit.min(self.table.row_count()) {
            if let Some(cells) = self.table.get_row_as_strings(row_idx) {
                for (i, cell) in cells.iter().enumerate() {
                    col_widths[i] = col_widths[i].max(cell.len());
                }
            }
        }
        for width in &mut col_widths {
            *width = (*width).clamp(3, 20);
        }

        let mut header_cells: Vec<Cell> = Vec::new();
        if self.show_row_numbers {
            header_cells.push(Cell::from("#").style(Styles::dim()));
        }
        header_cells.extend(
            headers
                .iter()
                .map(|h| Cell::from(h.clone()).style(Styles::table_header())),
        );
        let header = Row::new(header_cells);

        let rows: Vec<Row> = (0..row_limit.min(self.table.row_count()))
            .map(|row_idx| {
                let mut cells: Vec<Cell> = Vec::new();
                if self.show_row_numbers {
                    cells.push(
                        Cell::from((row_idx + 1).to_string()).style(Styles::dim()),
                    );
                }
                let values = self.table.get_row_as_strings(row_idx).unwrap_or_default();
                cells.extend(values.into_iter().map(Cell::from));
                Row::new(cells)
            })
            .collect();

        let mut widths: Vec<Constraint> = Vec::new();
        if self.show_row_numbers {
            widths.push(Constraint::Length(3));
        }
        widths.extend(col_widths.iter().map(|&w| Constraint::Length(w as u16)));

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} ({} rows)", self.title, self.table.row_count())),
            )
            .column_spacing(1);

        f.render_widget(table, area);
    }
}
