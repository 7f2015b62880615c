//! Screening service: Orchestrates one risk screening.
//!
//! Validates the record, encodes it, hands the vector to the classifier
//! and interprets the result. The most recent assessment is held in an
//! explicit single-slot field for the duration of the session; nothing is
//! written anywhere.

use std::sync::Arc;

use crate::domain::{ClinicalRecord, RiskAssessment};
use crate::ports::Classifier;
use crate::CardioscopeError;

/// Service for running risk screenings.
pub struct ScreeningService<C>
where
    C: Classifier,
{
    classifier: Arc<C>,

    /// Most recent assessment of this session, if any.
    last: Option<RiskAssessment>,
}

impl<C> ScreeningService<C>
where
    C: Classifier,
{
    /// Create a new screening service.
    pub fn new(classifier: Arc<C>) -> Self {
        Self {
            classifier,
            last: None,
        }
    }

    /// Run a screening for one record.
    ///
    /// The full pipeline:
    /// 1. Validate measurement ranges
    /// 2. Encode into the classifier's feature layout
    /// 3. Predict class and probability
    /// 4. Hold the assessment for display
    ///
    /// # Errors
    /// Returns error if validation fails or the classifier cannot score
    /// the vector.
    pub fn run_screening(
        &mut self,
        record: &ClinicalRecord,
    ) -> Result<RiskAssessment, CardioscopeError> {
        record
            .validate()
            .map_err(|errors| CardioscopeError::Validation(errors.join(", ")))?;

        let features = record.to_feature_vector();
        tracing::debug!("Encoded record into {} features", features.len());

        let prediction = self.classifier.predict(&features)?;
        let probability = self.classifier.predict_probability(&features)?;

        let assessment = RiskAssessment::new(prediction, probability);
        tracing::info!(
            "Screening complete: prediction={}, probability={:.2}%, risk={}",
            assessment.prediction,
            assessment.probability * 100.0,
            assessment.risk_level
        );

        self.last = Some(assessment.clone());
        Ok(assessment)
    }

    /// Most recent assessment of this session.
    #[must_use]
    pub fn last_assessment(&self) -> Option<&RiskAssessment> {
        self.last.as_ref()
    }

    /// Whether a screening has completed this session.
    #[must_use]
    pub fn has_assessment(&self) -> bool {
        self.last.is_some()
    }

    /// Width of the classifier's input, for status display.
    #[must_use]
    pub fn model_input_width(&self) -> usize {
        self.classifier.input_width()
    }
}
