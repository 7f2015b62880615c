//! Risk assessment types.
//!
//! Represents the output of one screening: the classifier's binary call
//! plus the probability behind it, interpreted into a display-ready risk
//! level.

use serde::{Deserialize, Serialize};

/// Risk band derived from the predicted probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Low risk of heart disease
    Low,
    /// Moderate risk, monitoring recommended
    Moderate,
    /// High risk, intervention recommended
    High,
}

impl RiskLevel {
    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low risk - No significant indicators",
            Self::Moderate => "Moderate risk - Follow-up recommended",
            Self::High => "High risk - Immediate consultation advised",
        }
    }

    /// Advice line shown under the verdict.
    #[must_use]
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Low => "Keep maintaining a healthy lifestyle.",
            Self::Moderate => "Consider scheduling a routine cardiac check-up.",
            Self::High => "Please consult a doctor immediately.",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Result of one screening.
///
/// Held transiently for the current session only; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Binary prediction (0 = no disease indicated, 1 = disease indicated)
    pub prediction: u8,

    /// Predicted probability of disease (0.0 to 1.0)
    pub probability: f64,

    /// Confidence in the predicted class (0.0 to 1.0)
    pub confidence: f64,

    /// Risk classification
    pub risk_level: RiskLevel,

    /// When the screening ran
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl RiskAssessment {
    /// Build an assessment from the classifier's outputs.
    #[must_use]
    pub fn new(prediction: u8, probability: f64) -> Self {
        let confidence = if prediction == 1 {
            probability
        } else {
            1.0 - probability
        };

        Self {
            prediction,
            probability,
            confidence,
            risk_level: Self::risk_level_for(probability),
            created_at: chrono::Utc::now(),
        }
    }

    fn risk_level_for(probability: f64) -> RiskLevel {
        if probability < 0.3 {
            RiskLevel::Low
        } else if probability < 0.7 {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }
}
