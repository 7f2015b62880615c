//! CSV adapter: Implementation of DatasetSource over a flat file.
//!
//! The reference dataset ships as a comma-separated file with a header row
//! and all-numeric columns, the label last. Rows that fail to parse are
//! skipped rather than failing the whole load, matching how the charts
//! treated the file historically.

use std::path::{Path, PathBuf};

use crate::ports::{DatasetSource, DatasetTable};

/// Errors from the CSV dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Dataset {0} has no header row")]
    MissingHeader(String),

    #[error("Dataset {0} contains no usable rows")]
    Empty(String),
}

/// Dataset loaded from a CSV file on disk.
pub struct CsvDataset {
    path: PathBuf,
}

impl CsvDataset {
    /// Create a dataset source for the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, content: &str) -> Result<DatasetTable, DatasetError> {
        let mut lines = content.lines();

        let header = lines
            .next()
            .filter(|l| !l.trim().is_empty())
            .ok_or_else(|| DatasetError::MissingHeader(self.path.display().to_string()))?;
        let columns: Vec<String> = header.split(',').map(|c| c.trim().to_string()).collect();

        let mut rows = Vec::new();
        let mut skipped = 0usize;
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }

            let parts: Vec<&str> = line.split(',').collect();
            if parts.len() != columns.len() {
                skipped += 1;
                continue;
            }

            let parsed: Result<Vec<f64>, _> =
                parts.iter().map(|p| p.trim().parse::<f64>()).collect();
            match parsed {
                Ok(values) => rows.push(values),
                Err(_) => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::debug!(
                "Skipped {skipped} unparseable rows in {}",
                self.path.display()
            );
        }

        if rows.is_empty() {
            return Err(DatasetError::Empty(self.path.display().to_string()));
        }

        tracing::info!(
            "Loaded dataset {} ({} rows, {} columns)",
            self.path.display(),
            rows.len(),
            columns.len()
        );

        Ok(DatasetTable { columns, rows })
    }
}

impl DatasetSource for CsvDataset {
    type Error = DatasetError;

    fn load(&self) -> Result<DatasetTable, DatasetError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| DatasetError::Io {
            path: self.path.display().to_string(),
            source: e,
        })?;
        self.parse(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write");
        file
    }

    #[test]
    fn loads_well_formed_file() {
        let file = write_csv("age,chol,target\n63,233,1\n41,204,0\n");
        let table = CsvDataset::new(file.path()).load().expect("should load");

        assert_eq!(table.columns, vec!["age", "chol", "target"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.label_index(), 2);
        assert_eq!(table.rows[0], vec![63.0, 233.0, 1.0]);
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let file = write_csv("age,target\n63,1\nnot,numeric\n70\n\n41,0\n");
        let table = CsvDataset::new(file.path()).load().expect("should load");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CsvDataset::new("/nonexistent/heart.csv")
            .load()
            .expect_err("must fail");
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn header_only_file_is_empty() {
        let file = write_csv("age,target\n");
        let err = CsvDataset::new(file.path()).load().expect_err("must fail");
        assert!(matches!(err, DatasetError::Empty(_)));
    }

    #[test]
    fn empty_file_has_no_header() {
        let file = write_csv("");
        let err = CsvDataset::new(file.path()).load().expect_err("must fail");
        assert!(matches!(err, DatasetError::MissingHeader(_)));
    }

    #[test]
    fn column_lookup_by_name() {
        let file = write_csv("age,chol,target\n63,233,1\n");
        let table = CsvDataset::new(file.path()).load().expect("should load");
        assert_eq!(table.column_index("chol"), Some(1));
        assert_eq!(table.column_index("missing"), None);
    }
}
