//! Statistics service: Descriptive summary over the reference dataset.
//!
//! Feeds the charts screen: class distribution, age distribution split by
//! label, and a correlation matrix over all columns. The dataset is loaded
//! on first use and cached for the session; a refresh re-reads the file.

use crate::ports::{DatasetSource, DatasetTable};
use crate::CardioscopeError;

/// Number of bins in the age histogram.
const AGE_BINS: usize = 20;

/// One bin of the age histogram.
#[derive(Debug, Clone, Copy)]
pub struct AgeBin {
    /// Inclusive lower bound in years
    pub lo: f64,
    /// Exclusive upper bound in years (inclusive for the last bin)
    pub hi: f64,
    /// Patients without disease in this bin
    pub negative: u64,
    /// Patients with disease in this bin
    pub positive: u64,
}

/// Descriptive statistics over the dataset.
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    /// Total usable rows
    pub total_rows: usize,
    /// Rows with label 0
    pub negative_count: u64,
    /// Rows with label 1
    pub positive_count: u64,
    /// Age histogram split by label; empty if the dataset has no `age`
    /// column
    pub age_bins: Vec<AgeBin>,
    /// Column names, for the correlation matrix axes
    pub columns: Vec<String>,
    /// Pearson correlation matrix, `columns.len()` square
    pub correlations: Vec<Vec<f64>>,
}

/// Service computing dataset statistics for the charts screen.
pub struct StatisticsService<D>
where
    D: DatasetSource,
{
    source: D,
    cached: Option<DatasetSummary>,
}

impl<D> StatisticsService<D>
where
    D: DatasetSource,
    D::Error: Into<CardioscopeError>,
{
    /// Create a new statistics service.
    pub fn new(source: D) -> Self {
        Self {
            source,
            cached: None,
        }
    }

    /// Summary over the dataset, computed once per session.
    ///
    /// # Errors
    /// Returns error if the dataset cannot be loaded.
    pub fn summary(&mut self) -> Result<&DatasetSummary, CardioscopeError> {
        let summary = match self.cached.take() {
            Some(summary) => summary,
            None => {
                let table = self.source.load().map_err(Into::into)?;
                summarize(&table)
            }
        };

        Ok(self.cached.insert(summary))
    }

    /// Drop the cache so the next call re-reads the file.
    pub fn refresh(&mut self) {
        self.cached = None;
    }
}

fn summarize(table: &DatasetTable) -> DatasetSummary {
    let label_idx = table.label_index();

    let mut negative_count = 0u64;
    let mut positive_count = 0u64;
    for row in &table.rows {
        if row[label_idx] >= 0.5 {
            positive_count += 1;
        } else {
            negative_count += 1;
        }
    }

    let age_bins = table
        .column_index("age")
        .map(|age_idx| age_histogram(table, age_idx, label_idx))
        .unwrap_or_default();

    tracing::info!(
        "Dataset summary: {} rows, {} positive, {} negative",
        table.len(),
        positive_count,
        negative_count
    );

    DatasetSummary {
        total_rows: table.len(),
        negative_count,
        positive_count,
        age_bins,
        columns: table.columns.clone(),
        correlations: correlation_matrix(table),
    }
}

fn age_histogram(table: &DatasetTable, age_idx: usize, label_idx: usize) -> Vec<AgeBin> {
    let ages: Vec<f64> = table.rows.iter().map(|r| r[age_idx]).collect();
    let min = ages.iter().copied().fold(f64::INFINITY, f64::min);
    let max = ages.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }

    // Degenerate single-value dataset still gets one bin of width 1.
    let width = ((max - min) / AGE_BINS as f64).max(1.0);

    let mut bins: Vec<AgeBin> = (0..AGE_BINS)
        .map(|i| AgeBin {
            lo: min + width * i as f64,
            hi: min + width * (i + 1) as f64,
            negative: 0,
            positive: 0,
        })
        .collect();

    for row in &table.rows {
        let idx = (((row[age_idx] - min) / width) as usize).min(AGE_BINS - 1);
        if row[label_idx] >= 0.5 {
            bins[idx].positive += 1;
        } else {
            bins[idx].negative += 1;
        }
    }

    // Trailing empty bins carry no information on narrow datasets.
    while let Some(last) = bins.last() {
        if last.negative == 0 && last.positive == 0 {
            bins.pop();
        } else {
            break;
        }
    }

    bins
}

fn correlation_matrix(table: &DatasetTable) -> Vec<Vec<f64>> {
    let n_cols = table.columns.len();
    let n_rows = table.rows.len();
    if n_rows == 0 {
        return vec![vec![0.0; n_cols]; n_cols];
    }

    let means: Vec<f64> = (0..n_cols)
        .map(|c| table.rows.iter().map(|r| r[c]).sum::<f64>() / n_rows as f64)
        .collect();

    let mut matrix = vec![vec![0.0; n_cols]; n_cols];
    for a in 0..n_cols {
        for b in a..n_cols {
            let mut cov = 0.0;
            let mut var_a = 0.0;
            let mut var_b = 0.0;
            for row in &table.rows {
                let da = row[a] - means[a];
                let db = row[b] - means[b];
                cov += da * db;
                var_a += da * da;
                var_b += db * db;
            }

            let denom = (var_a * var_b).sqrt();
            // Constant columns have no defined correlation; report 0.
            let r = if denom > 0.0 { cov / denom } else { 0.0 };
            matrix[a][b] = r;
            matrix[b][a] = r;
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::csv::CsvDataset;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write");
        file
    }

    #[test]
    fn counts_split_by_label() {
        let file = write_csv("age,chol,target\n40,200,0\n50,220,1\n60,240,1\n70,260,0\n");
        let mut service = StatisticsService::new(CsvDataset::new(file.path()));

        let summary = service.summary().expect("summary");
        assert_eq!(summary.total_rows, 4);
        assert_eq!(summary.positive_count, 2);
        assert_eq!(summary.negative_count, 2);
    }

    #[test]
    fn age_histogram_covers_every_row() {
        let file = write_csv("age,target\n29,0\n35,0\n44,1\n51,1\n58,1\n63,0\n77,1\n");
        let mut service = StatisticsService::new(CsvDataset::new(file.path()));

        let summary = service.summary().expect("summary");
        let binned: u64 = summary
            .age_bins
            .iter()
            .map(|b| b.negative + b.positive)
            .sum();
        assert_eq!(binned, 7);
        assert!(!summary.age_bins.is_empty());
    }

    #[test]
    fn correlations_are_symmetric_with_unit_diagonal() {
        let file = write_csv("age,chol,target\n40,200,0\n50,230,0\n60,260,1\n70,290,1\n");
        let mut service = StatisticsService::new(CsvDataset::new(file.path()));

        let summary = service.summary().expect("summary");
        let m = &summary.correlations;
        assert_eq!(m.len(), 3);

        for (i, row) in m.iter().enumerate() {
            assert!((row[i] - 1.0).abs() < 1e-9, "diagonal at {i}");
            for (j, value) in row.iter().enumerate() {
                assert!((value - m[j][i]).abs() < 1e-12);
                assert!(value.abs() <= 1.0 + 1e-9);
            }
        }

        // age and chol move together perfectly in this fixture.
        assert!((m[0][1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn constant_column_reports_zero_correlation() {
        let file = write_csv("age,flat,target\n40,7,0\n50,7,1\n60,7,1\n");
        let mut service = StatisticsService::new(CsvDataset::new(file.path()));

        let summary = service.summary().expect("summary");
        assert_eq!(summary.correlations[0][1], 0.0);
    }

    #[test]
    fn summary_is_cached_until_refreshed() {
        let file = write_csv("age,target\n40,0\n50,1\n");
        let mut service = StatisticsService::new(CsvDataset::new(file.path()));

        let first_total = service.summary().expect("summary").total_rows;
        let second_total = service.summary().expect("summary").total_rows;
        assert_eq!(first_total, second_total);

        service.refresh();
        assert_eq!(service.summary().expect("summary").total_rows, 2);
    }

    #[test]
    fn missing_dataset_surfaces_an_error() {
        let mut service = StatisticsService::new(CsvDataset::new("/nonexistent/heart.csv"));
        assert!(service.summary().is_err());
    }
}
