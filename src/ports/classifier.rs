//! Classifier port: Trait for the pre-trained model artifact.
//!
//! The application does not know or care how the model computes; it only
//! guarantees that the feature vector it hands over is shaped and ordered
//! correctly.

use crate::domain::FeatureVector;

/// Errors surfaced by a classifier implementation.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// The artifact could not be read from disk.
    #[error("Failed to read model artifact: {0}")]
    Artifact(String),

    /// The artifact parsed but does not describe a usable model.
    #[error("Malformed model artifact: {0}")]
    Malformed(String),

    /// The artifact's input schema does not match the encoder's layout.
    #[error("Model schema mismatch: {0}")]
    SchemaMismatch(String),
}

/// Trait for binary classification over encoded clinical records.
///
/// Implementations are loaded once at process start from an external
/// artifact and are immutable and stateless afterwards: calling either
/// operation twice with the same vector returns the same result.
pub trait Classifier: Send + Sync {
    /// Width of the input vector this model was trained on.
    fn input_width(&self) -> usize;

    /// Predict the class label (0 = no disease indicated, 1 = disease
    /// indicated).
    ///
    /// # Errors
    /// Returns error if the model cannot score the vector.
    fn predict(&self, features: &FeatureVector) -> Result<u8, ClassifierError>;

    /// Predict the probability of the positive class, in [0, 1].
    ///
    /// # Errors
    /// Returns error if the model cannot score the vector.
    fn predict_probability(&self, features: &FeatureVector) -> Result<f64, ClassifierError>;
}
