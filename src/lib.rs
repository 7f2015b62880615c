//! # Cardioscope
//!
//! Interactive heart-disease risk screening for a single terminal session.
//!
//! A clinician enters thirteen routine measurements, the record is encoded
//! into the fixed-order feature vector the bundled classifier expects, and
//! the predicted risk is rendered together with descriptive charts over a
//! reference dataset.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (ClinicalRecord, FeatureVector, RiskAssessment)
//! - `ports`: Trait definitions for external collaborators
//! - `adapters`: Concrete implementations (JSON model artifact, CSV dataset)
//! - `application`: Use cases orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{ClinicalRecord, FeatureVector, RiskAssessment, RiskLevel};

/// Result type for cardioscope operations
pub type Result<T> = std::result::Result<T, CardioscopeError>;

/// Main error type for cardioscope
#[derive(Debug, thiserror::Error)]
pub enum CardioscopeError {
    #[error("Classifier error: {0}")]
    Classifier(#[from] ports::ClassifierError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] adapters::DatasetError),

    #[error("Invalid clinical record: {0}")]
    Record(#[from] domain::RecordError),

    #[error("Invalid patient data: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
