//! Histograms with a smoothed density overlay.
//!
//! Bars and curve share one chart: bins are drawn as a bar-type dataset
//! at their centers, the Gaussian KDE as a line scaled to counts.

use crate::data::stats::Histogram;
use crate::ui::theme::{Styles, Theme};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

pub struct HistogramChart<'a> {
    title: String,
    histogram: &'a Histogram,
    curve: &'a [(f64, f64)],
    color: Color,
}

impl<'a> HistogramChart<'a> {
    pub fn new(
        title: impl Into<String>,
        histogram: &'a Histogram,
        curve: &'a [(f64, f64)],
        color: Color,
    ) -> Self {
        Self {
            title: title.into(),
            histogram,
            curve,
            color,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title.clone())
            .title_style(Styles::section_title());

        let (Some(first), Some(last)) = (self.histogram.bins.first(), self.histogram.bins.last())
        else {
            let empty = Paragraph::new("No values").style(Styles::dim()).block(block);
            f.render_widget(empty, area);
            return;
        };

        let bars: Vec<(f64, f64)> = self
            .histogram
            .bins
            .iter()
            .map(|bin| ((bin.lower + bin.upper) / 2.0, bin.count as f64))
            .collect();

        let x_bounds = if first.lower == last.upper {
            [first.lower - 1.0, last.upper + 1.0]
        } else {
            [first.lower, last.upper]
        };
        let curve_peak = self
            .curve
            .iter()
            .map(|(_, y)| *y)
            .fold(0.0_f64, f64::max);
        let y_max = (self.histogram.max_count() as f64).max(curve_peak).max(1.0) * 1.15;

        let x_range = x_bounds[1] - x_bounds[0];
        let tick = |v: f64| {
            if x_range >= 100.0 {
                format!("{:.0}", v)
            } else {
                format!("{:.1}", v)
            }
        };
        let x_labels = vec![
            tick(x_bounds[0]),
            tick((x_bounds[0] + x_bounds[1]) / 2.0),
            tick(x_bounds[1]),
        ];
        let y_labels = vec![
            "0".to_string(),
            format!("{:.0}", y_max / 2.0),
            format!("{:.0}", y_max),
        ];

        let mut datasets = vec![Dataset::default()
            .marker(symbols::Marker::HalfBlock)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(self.color))
            .data(&bars)];
        if !self.curve.is_empty() {
            datasets.push(
                Dataset::default()
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(Theme::DENSITY_CURVE))
                    .data(self.curve),
            );
        }

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .style(Styles::dim())
                    .bounds(x_bounds)
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Styles::dim())
                    .bounds([0.0, y_max])
                    .labels(y_labels),
            );

        f.render_widget(chart, area);
    }
}
