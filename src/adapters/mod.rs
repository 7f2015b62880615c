//! Adapters layer: Concrete implementations of ports.
//!
//! These modules contain the actual integration with the external
//! artifacts:
//! - `model`: JSON logistic-regression artifact
//! - `csv`: CSV reference dataset
//! - `sanitize`: identifier filtering for logs

pub mod csv;
pub mod model;
pub mod sanitize;

// Re-export dataset error for lib.rs
pub use csv::DatasetError;
