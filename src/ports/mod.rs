//! Ports layer: Trait definitions for external collaborators.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and external artifacts (the classifier model,
//! the reference dataset).

mod classifier;
mod dataset;

pub use classifier::{Classifier, ClassifierError};
pub use dataset::{DatasetSource, DatasetTable};
