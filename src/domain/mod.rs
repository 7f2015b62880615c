//! Domain layer: Core business types and logic.
//!
//! This module contains pure types with no I/O. The feature encoder lives
//! here because it is the one contract the external classifier depends on.

mod assessment;
mod features;
mod record;

pub use assessment::{RiskAssessment, RiskLevel};
pub use features::{FeatureVector, FEATURE_DIMENSION, FEATURE_NAMES};
pub use record::{
    ChestPainType, ClinicalRecord, RecordError, RestingEcg, Sex, StSlope, Thalassemia,
};
