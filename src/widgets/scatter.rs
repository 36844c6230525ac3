//! Scatter plots of one numeric column against another, split into two
//! point sets by the binary gender indicator.

use crate::data::DataTable;
use crate::ui::theme::{Styles, Theme};
use ratatui::{
    layout::Rect,
    style::Style,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Data for one scatter chart, derived fresh each render pass
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// points with gender == 0 / gender != 0
    pub series: [Vec<(f64, f64)>; 2],
}

impl ScatterPlot {
    /// Collect (x, y) pairs by position, splitting on the hue column.
    /// Rows with a null in any involved column are skipped.
    pub fn from_table(table: &DataTable, x_col: usize, y_col: usize, hue_col: usize) -> Self {
        let mut series = [Vec::new(), Vec::new()];
        for row in &table.rows {
            let x = row.get(x_col).and_then(|v| v.as_f64());
            let y = row.get(y_col).and_then(|v| v.as_f64());
            let hue = row.get(hue_col).and_then(|v| v.as_f64());
            if let (Some(x), Some(y), Some(hue)) = (x, y, hue) {
                let idx = usize::from(hue != 0.0);
                series[idx].push((x, y));
            }
        }

        let x_label = table
            .columns
            .get(x_col)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        let y_label = table
            .columns
            .get(y_col)
            .map(|c| c.name.clone())
            .unwrap_or_default();

        Self {
            title: format!("{} vs {}", x_label, y_label),
            x_label,
            y_label,
            series,
        }
    }

    fn bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            min = min.min(v);
            max = max.max(v);
        }
        if !min.is_finite() || !max.is_finite() {
            return [0.0, 1.0];
        }
        if min == max {
            return [min - 1.0, max + 1.0];
        }
        let pad = (max - min) * 0.05;
        [min - pad, max + pad]
    }

    fn tick(value: f64, range: f64) -> String {
        if range >= 100.0 {
            format!("{:.0}", value)
        } else {
            format!("{:.1}", value)
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let x_bounds = Self::bounds(
            self.series
                .iter()
                .flat_map(|s| s.iter().map(|(x, _)| *x)),
        );
        let y_bounds = Self::bounds(
            self.series
                .iter()
                .flat_map(|s| s.iter().map(|(_, y)| *y)),
        );

        let x_range = x_bounds[1] - x_bounds[0];
        let y_range = y_bounds[1] - y_bounds[0];
        let x_labels = vec![
            Self::tick(x_bounds[0], x_range),
            Self::tick((x_bounds[0] + x_bounds[1]) / 2.0, x_range),
            Self::tick(x_bounds[1], x_range),
        ];
        let y_labels = vec![
            Self::tick(y_bounds[0], y_range),
            Self::tick((y_bounds[0] + y_bounds[1]) / 2.0, y_range),
            Self::tick(y_bounds[1], y_range),
        ];

        let datasets = vec![
            Dataset::default()
                .name("gender 0")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Theme::GENDER_ZERO))
                .data(&self.series[0]),
            Dataset::default()
                .name("gender 1")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Theme::GENDER_ONE))
                .data(&self.series[1]),
        ];

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.title.clone())
                    .title_style(Styles::section_title()),
            )
            .x_axis(
                Axis::default()
                    .title(self.x_label.clone())
                    .style(Styles::dim())
                    .bounds(x_bounds)
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(self.y_label.clone())
                    .style(Styles::dim())
                    .bounds(y_bounds)
                    .labels(y_labels),
            );

        f.render_widget(chart, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixture::{self, col};

    #[test]
    fn test_points_split_by_gender() {
        let table = fixture::electronics_purchases();
        let plot = ScatterPlot::from_table(&table, col::PRICE, col::SATISFACTION, col::GENDER);
        assert_eq!(plot.series[0].len(), 5);
        assert_eq!(plot.series[1].len(), 5);
        assert_eq!(plot.title, "ProductPrice vs CustomerSatisfaction");
    }

    #[test]
    fn test_titles_follow_renames() {
        let mut table = fixture::electronics_purchases();
        let labels: Vec<String> = (0..9).map(|i| format!("c{}", i)).collect();
        table.set_column_names(&labels).unwrap();
        let plot = ScatterPlot::from_table(&table, col::PRICE, col::AGE, col::GENDER);
        assert_eq!(plot.title, "c3 vs c4");
    }

    #[test]
    fn test_degenerate_bounds() {
        assert_eq!(ScatterPlot::bounds(std::iter::empty()), [0.0, 1.0]);
        assert_eq!(ScatterPlot::bounds([2.0].into_iter()), [1.0, 3.0]);
    }
}
