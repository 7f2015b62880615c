//! Feature vector assembly.
//!
//! The classifier consumes its input positionally: there are no names at
//! the model boundary, so the column order below is the contract. Any
//! reordering would silently change predictions, which is why the artifact
//! loader cross-checks `FEATURE_NAMES` against the model at startup.

use serde::{Deserialize, Serialize};

use crate::domain::record::ClinicalRecord;

/// Number of features the classifier expects.
pub const FEATURE_DIMENSION: usize = 22;

/// Column names in model order. Categorical fields are one-hot expanded,
/// with the category code appended to the base name.
pub const FEATURE_NAMES: [&str; FEATURE_DIMENSION] = [
    "age",
    "sex",
    "cp_1",
    "cp_2",
    "cp_3",
    "cp_4",
    "trestbps",
    "chol",
    "fbs",
    "restecg_0",
    "restecg_1",
    "restecg_2",
    "thalach",
    "slope_1",
    "slope_2",
    "slope_3",
    "exang",
    "thal_3",
    "thal_6",
    "thal_7",
    "oldpeak",
    "ca",
];

/// Fasting blood sugar above this many mg/dl sets the `fbs` flag.
const FASTING_BLOOD_SUGAR_THRESHOLD: u16 = 120;

/// Fixed-order numeric input for the classifier.
///
/// Position is the schema; consumers index into it, never name fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_DIMENSION]);

impl FeatureVector {
    /// Borrow the values in model order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of slots. Always [`FEATURE_DIMENSION`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl std::ops::Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl ClinicalRecord {
    /// Encode this record into the vector layout the classifier was
    /// trained on.
    ///
    /// Numeric measurements pass through unchanged; each categorical field
    /// sets exactly one slot of its one-hot group (guaranteed by the enum
    /// types); fasting blood sugar is reduced to a >120 mg/dl flag. Pure:
    /// the same record always encodes to the same vector.
    #[must_use]
    pub fn to_feature_vector(&self) -> FeatureVector {
        let mut v = [0.0; FEATURE_DIMENSION];

        v[0] = f64::from(self.age);
        v[1] = self.sex as u8 as f64;
        v[2 + self.chest_pain.one_hot_offset()] = 1.0;
        v[6] = f64::from(self.resting_bp);
        v[7] = f64::from(self.cholesterol);
        v[8] = if self.fasting_blood_sugar > FASTING_BLOOD_SUGAR_THRESHOLD {
            1.0
        } else {
            0.0
        };
        v[9 + self.resting_ecg.one_hot_offset()] = 1.0;
        v[12] = f64::from(self.max_heart_rate);
        v[13 + self.st_slope.one_hot_offset()] = 1.0;
        v[16] = if self.exercise_angina { 1.0 } else { 0.0 };
        v[17 + self.thalassemia.one_hot_offset()] = 1.0;
        v[20] = self.st_depression;
        v[21] = f64::from(self.major_vessels);

        FeatureVector(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{ChestPainType, RestingEcg, Sex, StSlope, Thalassemia};

    fn base_record() -> ClinicalRecord {
        ClinicalRecord {
            age: 50,
            sex: Sex::Female,
            chest_pain: ChestPainType::TypicalAngina,
            resting_bp: 120,
            cholesterol: 200,
            fasting_blood_sugar: 100,
            resting_ecg: RestingEcg::Normal,
            max_heart_rate: 150,
            st_slope: StSlope::Upsloping,
            exercise_angina: false,
            thalassemia: Thalassemia::Normal,
            st_depression: 1.0,
            major_vessels: 0,
        }
    }

    fn one_hot_group(v: &FeatureVector, range: std::ops::Range<usize>) -> Vec<f64> {
        v.as_slice()[range].to_vec()
    }

    #[test]
    fn vector_always_has_the_model_width() {
        let v = base_record().to_feature_vector();
        assert_eq!(v.len(), FEATURE_DIMENSION);
        assert_eq!(FEATURE_NAMES.len(), FEATURE_DIMENSION);
    }

    #[test]
    fn chest_pain_sets_exactly_one_slot_per_code() {
        for (variant, expected) in [
            (ChestPainType::TypicalAngina, [1.0, 0.0, 0.0, 0.0]),
            (ChestPainType::AtypicalAngina, [0.0, 1.0, 0.0, 0.0]),
            (ChestPainType::NonAnginal, [0.0, 0.0, 1.0, 0.0]),
            (ChestPainType::Asymptomatic, [0.0, 0.0, 0.0, 1.0]),
        ] {
            let record = ClinicalRecord {
                chest_pain: variant,
                ..base_record()
            };
            let v = record.to_feature_vector();
            assert_eq!(one_hot_group(&v, 2..6), expected, "{variant:?}");
        }
    }

    #[test]
    fn resting_ecg_sets_exactly_one_slot_per_code() {
        for (variant, expected) in [
            (RestingEcg::Normal, [1.0, 0.0, 0.0]),
            (RestingEcg::SttAbnormality, [0.0, 1.0, 0.0]),
            (RestingEcg::LeftVentricularHypertrophy, [0.0, 0.0, 1.0]),
        ] {
            let record = ClinicalRecord {
                resting_ecg: variant,
                ..base_record()
            };
            let v = record.to_feature_vector();
            assert_eq!(one_hot_group(&v, 9..12), expected, "{variant:?}");
        }
    }

    #[test]
    fn st_slope_sets_exactly_one_slot_per_code() {
        for (variant, expected) in [
            (StSlope::Upsloping, [1.0, 0.0, 0.0]),
            (StSlope::Flat, [0.0, 1.0, 0.0]),
            (StSlope::Downsloping, [0.0, 0.0, 1.0]),
        ] {
            let record = ClinicalRecord {
                st_slope: variant,
                ..base_record()
            };
            let v = record.to_feature_vector();
            assert_eq!(one_hot_group(&v, 13..16), expected, "{variant:?}");
        }
    }

    #[test]
    fn thalassemia_sets_exactly_one_slot_per_code() {
        for (variant, expected) in [
            (Thalassemia::Normal, [1.0, 0.0, 0.0]),
            (Thalassemia::FixedDefect, [0.0, 1.0, 0.0]),
            (Thalassemia::ReversibleDefect, [0.0, 0.0, 1.0]),
        ] {
            let record = ClinicalRecord {
                thalassemia: variant,
                ..base_record()
            };
            let v = record.to_feature_vector();
            assert_eq!(one_hot_group(&v, 17..20), expected, "{variant:?}");
        }
    }

    #[test]
    fn fasting_blood_sugar_flag_thresholds_above_120() {
        let at_threshold = ClinicalRecord {
            fasting_blood_sugar: 120,
            ..base_record()
        };
        assert_eq!(at_threshold.to_feature_vector()[8], 0.0);

        let above = ClinicalRecord {
            fasting_blood_sugar: 121,
            ..base_record()
        };
        assert_eq!(above.to_feature_vector()[8], 1.0);

        let below = ClinicalRecord {
            fasting_blood_sugar: 80,
            ..base_record()
        };
        assert_eq!(below.to_feature_vector()[8], 0.0);
    }

    #[test]
    fn passthrough_fields_keep_their_exact_values() {
        let record = ClinicalRecord {
            age: 63,
            resting_bp: 145,
            cholesterol: 233,
            max_heart_rate: 178,
            st_depression: 2.3,
            major_vessels: 2,
            ..base_record()
        };
        let v = record.to_feature_vector();

        assert_eq!(v[0], 63.0);
        assert_eq!(v[6], 145.0);
        assert_eq!(v[7], 233.0);
        assert_eq!(v[12], 178.0);
        assert_eq!(v[20], 2.3);
        assert_eq!(v[21], 2.0);
    }

    #[test]
    fn known_patient_encodes_to_the_expected_layout() {
        let record = ClinicalRecord {
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
        };

        let v = record.to_feature_vector();
        let expected: [f64; FEATURE_DIMENSION] = [
            63.0, 1.0, // age, sex
            0.0, 0.0, 0.0, 1.0, // cp = 4
            145.0, 233.0, 1.0, // trestbps, chol, fbs (150 > 120)
            0.0, 0.0, 1.0, // restecg = 2
            150.0, // thalach
            0.0, 0.0, 1.0, // slope = 3
            0.0, // exang
            0.0, 1.0, 0.0, // thal = 6
            2.3, 0.0, // oldpeak, ca
        ];
        assert_eq!(v.as_slice(), &expected);
    }

    #[test]
    fn encoding_is_idempotent() {
        let record = base_record();
        assert_eq!(record.to_feature_vector(), record.to_feature_vector());
    }
}
