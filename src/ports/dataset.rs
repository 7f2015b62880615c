//! Dataset port: Trait for the tabular reference data behind the charts.
//!
//! The dataset is only used for descriptive statistics; it never feeds the
//! encoder or the classifier.

/// A numeric table with named columns. By convention the final column is
/// the disease label (0/1).
#[derive(Debug, Clone)]
pub struct DatasetTable {
    /// Column names from the header row
    pub columns: Vec<String>,
    /// Numeric rows, one per patient
    pub rows: Vec<Vec<f64>>,
}

impl DatasetTable {
    /// Index of the label column (the last one).
    #[must_use]
    pub fn label_index(&self) -> usize {
        self.columns.len().saturating_sub(1)
    }

    /// Find a column by name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Trait for loading the reference dataset.
pub trait DatasetSource: Send + Sync {
    /// Error type for load operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the full table.
    ///
    /// # Errors
    /// Returns error if the backing file is missing or unusable.
    fn load(&self) -> Result<DatasetTable, Self::Error>;
}
