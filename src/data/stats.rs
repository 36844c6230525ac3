//! Numeric statistics for the dashboard: Pearson correlation, equal-width
//! histograms, and a Gaussian kernel density estimate for the overlay
//! curves.

use crate::data::datatable::DataTable;

/// Square Pearson correlation matrix over the numeric columns of a table.
///
/// `values[i][j]` is the coefficient between numeric columns i and j, or
/// NaN when it is undefined (fewer than two paired observations, or zero
/// variance on either side). The diagonal is always exactly 1.0.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn dim(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Compute the correlation matrix over the table's numeric columns.
///
/// Pairs are formed from rows where both cells are non-null, so a null in
/// one column only drops that row for pairs involving it. Degenerates
/// gracefully: one numeric column yields a 1x1 matrix, none yields an
/// empty one.
pub fn correlation_matrix(table: &DataTable) -> CorrelationMatrix {
    let numeric = table.numeric_column_indices();
    let labels: Vec<String> = numeric
        .iter()
        .map(|&idx| table.columns[idx].name.clone())
        .collect();

    let mut values = vec![vec![f64::NAN; numeric.len()]; numeric.len()];
    for (i, &ci) in numeric.iter().enumerate() {
        for (j, &cj) in numeric.iter().enumerate() {
            if i == j {
                values[i][j] = 1.0;
                continue;
            }
            if j < i {
                values[i][j] = values[j][i];
                continue;
            }
            let mut xs = Vec::with_capacity(table.row_count());
            let mut ys = Vec::with_capacity(table.row_count());
            for row in &table.rows {
                let x = row.get(ci).and_then(|v| v.as_f64());
                let y = row.get(cj).and_then(|v| v.as_f64());
                if let (Some(x), Some(y)) = (x, y) {
                    xs.push(x);
                    ys.push(y);
                }
            }
            values[i][j] = pearson(&xs, &ys);
        }
    }

    CorrelationMatrix { labels, values }
}

/// Pearson correlation coefficient of two equally long samples.
/// NaN when undefined.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len();
    if n < 2 {
        return f64::NAN;
    }
    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

/// One histogram bucket: `[lower, upper)`, the last bucket closed on both
/// ends so the maximum value is never dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram over non-null values.
#[derive(Debug, Clone)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
    pub total: usize,
}

impl Histogram {
    /// Bin already-filtered values into `bin_count` equal-width buckets
    /// spanning `[min, max]`. A degenerate range (all values equal, or a
    /// single value) collapses to one bucket holding everything; an empty
    /// sample yields an empty histogram.
    pub fn from_values(values: &[f64], bin_count: usize) -> Self {
        if values.is_empty() || bin_count == 0 {
            return Self {
                bins: Vec::new(),
                total: 0,
            };
        }

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        if min == max {
            return Self {
                bins: vec![HistogramBin {
                    lower: min,
                    upper: max,
                    count: values.len(),
                }],
                total: values.len(),
            };
        }

        let width = (max - min) / bin_count as f64;
        let mut bins: Vec<HistogramBin> = (0..bin_count)
            .map(|i| HistogramBin {
                lower: min + i as f64 * width,
                upper: min + (i + 1) as f64 * width,
                count: 0,
            })
            .collect();

        for &value in values {
            let idx = (((value - min) / width) as usize).min(bin_count - 1);
            bins[idx].count += 1;
        }

        Self {
            bins,
            total: values.len(),
        }
    }

    pub fn bin_width(&self) -> f64 {
        self.bins
            .first()
            .map(|b| b.upper - b.lower)
            .unwrap_or(0.0)
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

/// Gaussian kernel density estimate sampled at `points` positions across
/// the value range, scaled to histogram counts (`density * n * bin_width`)
/// so the curve overlays the bars directly.
///
/// Bandwidth is Scott's rule. Too-small samples or zero spread give an
/// empty curve; the overlay simply disappears rather than failing.
pub fn kde_overlay(values: &[f64], bin_width: f64, points: usize) -> Vec<(f64, f64)> {
    let n = values.len();
    if n < 2 || points < 2 || bin_width <= 0.0 {
        return Vec::new();
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std = var.sqrt();
    if std == 0.0 {
        return Vec::new();
    }
    let bandwidth = std * (n as f64).powf(-0.2);

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let step = (max - min) / (points - 1) as f64;
    let norm = 1.0 / ((n as f64) * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let scale = n as f64 * bin_width;

    (0..points)
        .map(|i| {
            let x = min + i as f64 * step;
            let density: f64 = values
                .iter()
                .map(|&v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm;
            (x, density * scale)
        })
        .collect()
}
