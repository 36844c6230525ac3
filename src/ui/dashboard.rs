//! The dashboard page: a pure view model derived from (fixture, labels,
//! config), and the fixed top-to-bottom section layout rendered through a
//! section-scrolled window.

use crate::config::Config;
use crate::data::analyzer::{self, DtypeEntry, MissingCount};
use crate::data::fixture::{self, col};
use crate::data::stats::{self, CorrelationMatrix, Histogram};
use crate::data::DataTable;
use crate::ui::theme::{Styles, Theme};
use crate::widgets::bars::CategoryBars;
use crate::widgets::dtypes::DtypePanel;
use crate::widgets::heatmap::CorrelationHeatmap;
use crate::widgets::histogram::HistogramChart;
use crate::widgets::missing::MissingValuesPanel;
use crate::widgets::preview::DatasetPreview;
use crate::widgets::rename_form::RenameForm;
use crate::widgets::scatter::ScatterPlot;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything one render pass derives from the table. Rebuilt from the
/// embedded literals on every pass; the rename labels are applied before
/// any read happens.
pub struct DashboardView {
    pub table: DataTable,
    pub missing: Vec<MissingCount>,
    pub dtypes: Vec<DtypeEntry>,
    pub matrix: CorrelationMatrix,
    pub scatters: Vec<ScatterPlot>,
    pub categories: Vec<(String, Vec<(String, usize)>)>,
    pub histograms: Vec<(String, Histogram, Vec<(f64, f64)>)>,
}

impl DashboardView {
    pub fn build(labels: &[String], config: &Config) -> Self {
        let mut table = fixture::electronics_purchases();
        if let Err(err) = table.set_column_names(labels) {
            // unreachable from the form, which always carries 9 fields
            tracing::warn!(target: "render", "rename skipped: {}", err);
        }

        let missing = analyzer::missing_counts(&table);
        let dtypes = analyzer::dtype_listing(&table);
        let matrix = stats::correlation_matrix(&table);

        let scatters = vec![
            ScatterPlot::from_table(&table, col::PRICE, col::SATISFACTION, col::GENDER),
            ScatterPlot::from_table(&table, col::PRICE, col::AGE, col::GENDER),
            ScatterPlot::from_table(&table, col::AGE, col::SATISFACTION, col::GENDER),
        ];

        let categories = [col::CATEGORY, col::BRAND, col::GENDER]
            .iter()
            .map(|&idx| {
                let label = table.columns[idx].name.clone();
                (
                    format!("Count by {}", label),
                    analyzer::category_counts(&table, idx),
                )
            })
            .collect();

        let bins = config.charts.histogram_bins;
        let histograms = [col::PRICE, col::AGE, col::SATISFACTION]
            .iter()
            .map(|&idx| {
                let label = table.columns[idx].name.clone();
                let values = table.numeric_values(idx);
                let histogram = Histogram::from_values(&values, bins);
                let curve = if config.charts.density_overlay {
                    stats::kde_overlay(&values, histogram.bin_width(), 128)
                } else {
                    Vec::new()
                };
                (format!("Distribution of {}", label), histogram, curve)
            })
            .collect();

        Self {
            table,
            missing,
            dtypes,
            matrix,
            scatters,
            categories,
            histograms,
        }
    }
}

/// Page sections, in their fixed top-to-bottom order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Title,
    Overview,
    Dtypes,
    Rename,
    Correlation,
    Distributions,
}

const SECTIONS: [Section; 6] = [
    Section::Title,
    Section::Overview,
    Section::Dtypes,
    Section::Rename,
    Section::Correlation,
    Section::Distributions,
];

pub const SECTION_COUNT: usize = SECTIONS.len();

/// Index Tab jumps to when entering the rename form
pub const RENAME_SECTION_INDEX: usize = 3;

fn section_height(section: Section, form: &RenameForm, config: &Config) -> u16 {
    match section {
        Section::Title => 2,
        // preview: 10 rows + header + borders
        Section::Overview => 14,
        // 9 dtype lines + borders
        Section::Dtypes => 11,
        Section::Rename => form.height(&config.display),
        Section::Correlation => 24,
        Section::Distributions => 24,
    }
}

/// Render the page from `scroll` (a section index) downward, truncating
/// the last visible section at the bottom edge.
pub fn render_dashboard(
    f: &mut Frame,
    area: Rect,
    view: &DashboardView,
    form: &RenameForm,
    scroll: usize,
    config: &Config,
) {
    let mut y = area.y;
    for &section in SECTIONS.iter().skip(scroll.min(SECTION_COUNT - 1)) {
        let remaining = area.bottom().saturating_sub(y);
        if remaining == 0 {
            break;
        }
        let height = section_height(section, form, config).min(remaining);
        let rect = Rect::new(area.x, y, area.width, height);
        render_section(f, rect, section, view, form, config);
        y += height;
    }
}

fn render_section(
    f: &mut Frame,
    area: Rect,
    section: Section,
    view: &DashboardView,
    form: &RenameForm,
    config: &Config,
) {
    match section {
        Section::Title => {
            let title = Paragraph::new(Line::from(vec![
                Span::styled("Electronics Sales Data Analysis", Styles::title()),
                Span::styled("   (? for help)", Styles::dim()),
            ]));
            f.render_widget(title, area);
        }
        Section::Overview => {
            let halves = split_half(area);
            DatasetPreview::new(&view.table, "Dataset Preview")
                .with_row_numbers(config.display.show_row_numbers)
                .render(f, halves[0]);
            MissingValuesPanel::new(&view.missing).render(f, halves[1]);
        }
        Section::Dtypes => {
            DtypePanel::new(&view.dtypes).render(f, area);
        }
        Section::Rename => {
            form.render(f, area, &view.table, &config.display);
        }
        Section::Correlation => {
            let halves = split_half(area);
            CorrelationHeatmap::new(&view.matrix).render(f, halves[0]);
            let thirds = split_thirds(halves[1]);
            for (plot, rect) in view.scatters.iter().zip(thirds.iter()) {
                plot.render(f, *rect);
            }
        }
        Section::Distributions => {
            let halves = split_half(area);
            let left = split_thirds(halves[0]);
            for (i, ((title, counts), rect)) in
                view.categories.iter().zip(left.iter()).enumerate()
            {
                CategoryBars::new(title.clone(), counts, Theme::BAR_SERIES[i % 3])
                    .render(f, *rect);
            }
            let right = split_thirds(halves[1]);
            for (i, ((title, histogram, curve), rect)) in
                view.histograms.iter().zip(right.iter()).enumerate()
            {
                HistogramChart::new(title.clone(), histogram, curve, Theme::HIST_SERIES[i % 3])
                    .render(f, *rect);
            }
        }
    }
}

fn split_half(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

fn split_thirds(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_labels() -> Vec<String> {
        fixture::electronics_purchases().column_names()
    }

    #[test]
    fn test_view_carries_fixed_shapes() {
        let view = DashboardView::build(&default_labels(), &Config::default());
        assert_eq!(view.table.row_count(), 10);
        assert_eq!(view.table.column_count(), 9);
        assert_eq!(view.missing.len(), 9);
        assert_eq!(view.dtypes.len(), 9);
        assert_eq!(view.matrix.dim(), 7);
        assert_eq!(view.scatters.len(), 3);
        assert_eq!(view.categories.len(), 3);
        assert_eq!(view.histograms.len(), 3);
    }

    #[test]
    fn test_view_applies_labels_everywhere() {
        let labels: Vec<String> = (0..9).map(|i| format!("n{}", i)).collect();
        let view = DashboardView::build(&labels, &Config::default());
        assert_eq!(view.table.column_names()[0], "n0");
        assert_eq!(view.missing[8].column_name, "n8");
        assert_eq!(view.dtypes[1].column_name, "n1");
        assert_eq!(view.matrix.labels[0], "n0");
        assert_eq!(view.categories[1].0, "Count by n2");
        assert_eq!(view.histograms[0].0, "Distribution of n3");
    }

    #[test]
    fn test_view_tolerates_wrong_label_count() {
        // unreachable from the UI, still must not corrupt the table
        let view = DashboardView::build(&["just-one".to_string()], &Config::default());
        assert_eq!(view.table.column_names()[0], "ProductID");
        assert_eq!(view.table.column_count(), 9);
    }

    #[test]
    fn test_brand_counts_reach_the_view() {
        let view = DashboardView::build(&default_labels(), &Config::default());
        let (_, brand_counts) = &view.categories[1];
        assert_eq!(
            brand_counts.iter().find(|(n, _)| n == "Samsung").map(|(_, c)| *c),
            Some(6)
        );
    }
}
