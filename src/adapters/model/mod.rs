//! Model adapter: Implementation of Classifier over a JSON artifact.
//!
//! The artifact is exported by the training pipeline as plain logistic
//! regression parameters on the one-hot expanded feature layout. It is
//! loaded once at startup and never mutated.
//!
//! # Schema drift
//!
//! The model boundary is positional, so the loader verifies the artifact's
//! `feature_names` against [`crate::domain::FEATURE_NAMES`] before
//! accepting it. A model trained on a different column order fails to load
//! instead of silently producing wrong predictions.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{FeatureVector, FEATURE_DIMENSION, FEATURE_NAMES};
use crate::ports::{Classifier, ClassifierError};

/// Decision threshold on the positive-class probability.
const DECISION_THRESHOLD: f64 = 0.5;

/// Model parameters exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Column names in the order the coefficients apply
    pub feature_names: Vec<String>,
    /// One coefficient per feature
    pub coefficients: Vec<f64>,
    /// Intercept term
    pub intercept: f64,
}

/// Logistic-regression classifier backed by a JSON artifact.
#[derive(Debug)]
pub struct LogisticModel {
    artifact: ModelArtifact,
}

impl LogisticModel {
    /// Load the artifact from `path`.
    ///
    /// `path` may be the JSON file itself or a directory containing
    /// `model.json`.
    ///
    /// # Errors
    /// Returns error if the file is missing, malformed, or describes a
    /// model whose input schema does not match the encoder's layout.
    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        let model_path = if path.is_dir() {
            path.join("model.json")
        } else {
            path.to_path_buf()
        };

        let content = std::fs::read_to_string(&model_path).map_err(|e| {
            ClassifierError::Artifact(format!("{}: {e}", model_path.display()))
        })?;
        let artifact: ModelArtifact = serde_json::from_str(&content)
            .map_err(|e| ClassifierError::Malformed(e.to_string()))?;

        let model = Self::from_artifact(artifact)?;
        tracing::info!(
            "Loaded model from {} ({} features, intercept {:.4})",
            model_path.display(),
            model.artifact.feature_names.len(),
            model.artifact.intercept
        );
        Ok(model)
    }

    /// Validate a parsed artifact and wrap it.
    ///
    /// # Errors
    /// Returns error on any inconsistency between the artifact and the
    /// encoder's fixed layout.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ClassifierError> {
        let n = artifact.feature_names.len();
        if artifact.coefficients.len() != n {
            return Err(ClassifierError::Malformed(format!(
                "{} coefficients for {n} feature names",
                artifact.coefficients.len()
            )));
        }

        if n != FEATURE_DIMENSION {
            return Err(ClassifierError::SchemaMismatch(format!(
                "model expects {n} inputs, encoder produces {FEATURE_DIMENSION}"
            )));
        }

        for (i, (name, expected)) in artifact
            .feature_names
            .iter()
            .zip(FEATURE_NAMES.iter())
            .enumerate()
        {
            if name != expected {
                return Err(ClassifierError::SchemaMismatch(format!(
                    "column {i} is '{name}', encoder emits '{expected}'"
                )));
            }
        }

        if !artifact.intercept.is_finite()
            || artifact.coefficients.iter().any(|c| !c.is_finite())
        {
            return Err(ClassifierError::Malformed(
                "non-finite model parameter".into(),
            ));
        }

        Ok(Self { artifact })
    }

    /// Affine score before the sigmoid.
    fn decision_function(&self, features: &FeatureVector) -> f64 {
        self.artifact
            .coefficients
            .iter()
            .zip(features.as_slice())
            .map(|(c, x)| c * x)
            .sum::<f64>()
            + self.artifact.intercept
    }

    fn sigmoid(x: f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }
}

impl Classifier for LogisticModel {
    fn input_width(&self) -> usize {
        self.artifact.feature_names.len()
    }

    fn predict(&self, features: &FeatureVector) -> Result<u8, ClassifierError> {
        let probability = self.predict_probability(features)?;
        Ok(u8::from(probability >= DECISION_THRESHOLD))
    }

    fn predict_probability(&self, features: &FeatureVector) -> Result<f64, ClassifierError> {
        let score = self.decision_function(features);
        let probability = Self::sigmoid(score);

        if !probability.is_finite() {
            return Err(ClassifierError::Malformed(format!(
                "model produced non-finite probability from score {score}"
            )));
        }

        tracing::debug!("Scored record: score={score:.4}, probability={probability:.4}");
        Ok(probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ChestPainType, ClinicalRecord, RestingEcg, Sex, StSlope, Thalassemia,
    };
    use tempfile::tempdir;

    fn artifact_with(coefficients: Vec<f64>, intercept: f64) -> ModelArtifact {
        ModelArtifact {
            feature_names: FEATURE_NAMES.iter().map(|s| (*s).to_string()).collect(),
            coefficients,
            intercept,
        }
    }

    fn sample_record() -> ClinicalRecord {
        ClinicalRecord {
            age: 63,
            sex: Sex::Male,
            chest_pain: ChestPainType::Asymptomatic,
            resting_bp: 145,
            cholesterol: 233,
            fasting_blood_sugar: 150,
            resting_ecg: RestingEcg::LeftVentricularHypertrophy,
            max_heart_rate: 150,
            st_slope: StSlope::Downsloping,
            exercise_angina: false,
            thalassemia: Thalassemia::FixedDefect,
            st_depression: 2.3,
            major_vessels: 0,
        }
    }

    #[test]
    fn loads_artifact_from_directory() {
        let dir = tempdir().expect("tempdir");
        let artifact = artifact_with(vec![0.0; FEATURE_DIMENSION], 0.0);
        let json = serde_json::to_string(&artifact).expect("serialize");
        std::fs::write(dir.path().join("model.json"), json).expect("write");

        let model = LogisticModel::load(dir.path()).expect("should load");
        assert_eq!(model.input_width(), FEATURE_DIMENSION);
    }

    #[test]
    fn missing_artifact_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let err = LogisticModel::load(dir.path()).expect_err("must fail");
        assert!(matches!(err, ClassifierError::Artifact(_)));
    }

    #[test]
    fn wrong_input_width_is_rejected() {
        let artifact = ModelArtifact {
            feature_names: vec!["age".to_string(), "sex".to_string()],
            coefficients: vec![0.1, 0.2],
            intercept: 0.0,
        };
        let err = LogisticModel::from_artifact(artifact).expect_err("must fail");
        assert!(matches!(err, ClassifierError::SchemaMismatch(_)));
    }

    #[test]
    fn reordered_columns_are_rejected() {
        let mut names: Vec<String> = FEATURE_NAMES.iter().map(|s| (*s).to_string()).collect();
        names.swap(0, 1);
        let artifact = ModelArtifact {
            feature_names: names,
            coefficients: vec![0.0; FEATURE_DIMENSION],
            intercept: 0.0,
        };
        let err = LogisticModel::from_artifact(artifact).expect_err("must fail");
        assert!(matches!(err, ClassifierError::SchemaMismatch(_)));
    }

    #[test]
    fn coefficient_count_must_match_names() {
        let artifact = ModelArtifact {
            feature_names: FEATURE_NAMES.iter().map(|s| (*s).to_string()).collect(),
            coefficients: vec![0.0; FEATURE_DIMENSION - 1],
            intercept: 0.0,
        };
        let err = LogisticModel::from_artifact(artifact).expect_err("must fail");
        assert!(matches!(err, ClassifierError::Malformed(_)));
    }

    #[test]
    fn non_finite_parameters_are_rejected() {
        let mut coefficients = vec![0.0; FEATURE_DIMENSION];
        coefficients[3] = f64::NAN;
        let err = LogisticModel::from_artifact(artifact_with(coefficients, 0.0))
            .expect_err("must fail");
        assert!(matches!(err, ClassifierError::Malformed(_)));
    }

    #[test]
    fn zero_model_predicts_the_intercept_probability() {
        let model = LogisticModel::from_artifact(artifact_with(
            vec![0.0; FEATURE_DIMENSION],
            0.0,
        ))
        .expect("valid");

        let features = sample_record().to_feature_vector();
        let probability = model.predict_probability(&features).expect("score");
        assert!((probability - 0.5).abs() < 1e-12);
        // Exactly at the threshold counts as positive.
        assert_eq!(model.predict(&features).expect("predict"), 1);
    }

    #[test]
    fn intercept_sign_drives_the_prediction() {
        let features = sample_record().to_feature_vector();

        let negative = LogisticModel::from_artifact(artifact_with(
            vec![0.0; FEATURE_DIMENSION],
            -3.0,
        ))
        .expect("valid");
        assert_eq!(negative.predict(&features).expect("predict"), 0);
        assert!(negative.predict_probability(&features).expect("score") < 0.1);

        let positive = LogisticModel::from_artifact(artifact_with(
            vec![0.0; FEATURE_DIMENSION],
            3.0,
        ))
        .expect("valid");
        assert_eq!(positive.predict(&features).expect("predict"), 1);
        assert!(positive.predict_probability(&features).expect("score") > 0.9);
    }

    #[test]
    fn scoring_is_deterministic() {
        let mut coefficients = vec![0.0; FEATURE_DIMENSION];
        coefficients[0] = 0.02; // age
        coefficients[5] = 1.1; // cp_4
        let model =
            LogisticModel::from_artifact(artifact_with(coefficients, -2.0)).expect("valid");

        let features = sample_record().to_feature_vector();
        let first = model.predict_probability(&features).expect("score");
        let second = model.predict_probability(&features).expect("score");
        assert_eq!(first, second);
        assert!((0.0..=1.0).contains(&first));
    }
}
