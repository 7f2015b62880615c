//! Clinical record types for heart-disease risk screening.
//!
//! Field codes follow the Cleveland heart-disease dataset conventions the
//! bundled model was trained on.

use serde::{Deserialize, Serialize};

/// Error produced when raw input cannot form a valid record.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordError {
    /// A categorical field received a code outside its documented set.
    #[error("{field} code {value} is not one of {allowed}")]
    UnknownCategory {
        field: &'static str,
        value: u8,
        allowed: &'static str,
    },

    /// A numeric field fell outside its documented range.
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Patient sex as recorded in the dataset (0 = female, 1 = male).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Female = 0,
    Male = 1,
}

impl TryFrom<u8> for Sex {
    type Error = RecordError;

    fn try_from(value: u8) -> Result<Self, RecordError> {
        match value {
            0 => Ok(Self::Female),
            1 => Ok(Self::Male),
            _ => Err(RecordError::UnknownCategory {
                field: "sex",
                value,
                allowed: "0, 1",
            }),
        }
    }
}

/// Chest pain classification, codes 1-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChestPainType {
    TypicalAngina = 1,
    AtypicalAngina = 2,
    NonAnginal = 3,
    Asymptomatic = 4,
}

impl ChestPainType {
    /// Position of this category inside its one-hot group.
    pub(crate) fn one_hot_offset(self) -> usize {
        self as usize - 1
    }
}

impl TryFrom<u8> for ChestPainType {
    type Error = RecordError;

    fn try_from(value: u8) -> Result<Self, RecordError> {
        match value {
            1 => Ok(Self::TypicalAngina),
            2 => Ok(Self::AtypicalAngina),
            3 => Ok(Self::NonAnginal),
            4 => Ok(Self::Asymptomatic),
            _ => Err(RecordError::UnknownCategory {
                field: "chest_pain_type",
                value,
                allowed: "1, 2, 3, 4",
            }),
        }
    }
}

/// Resting electrocardiographic result, codes 0-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestingEcg {
    Normal = 0,
    SttAbnormality = 1,
    LeftVentricularHypertrophy = 2,
}

impl RestingEcg {
    pub(crate) fn one_hot_offset(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for RestingEcg {
    type Error = RecordError;

    fn try_from(value: u8) -> Result<Self, RecordError> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::SttAbnormality),
            2 => Ok(Self::LeftVentricularHypertrophy),
            _ => Err(RecordError::UnknownCategory {
                field: "resting_ecg",
                value,
                allowed: "0, 1, 2",
            }),
        }
    }
}

/// Slope of the peak exercise ST segment, codes 1-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StSlope {
    Upsloping = 1,
    Flat = 2,
    Downsloping = 3,
}

impl StSlope {
    pub(crate) fn one_hot_offset(self) -> usize {
        self as usize - 1
    }
}

impl TryFrom<u8> for StSlope {
    type Error = RecordError;

    fn try_from(value: u8) -> Result<Self, RecordError> {
        match value {
            1 => Ok(Self::Upsloping),
            2 => Ok(Self::Flat),
            3 => Ok(Self::Downsloping),
            _ => Err(RecordError::UnknownCategory {
                field: "st_slope",
                value,
                allowed: "1, 2, 3",
            }),
        }
    }
}

/// Thallium stress test result. The dataset uses the historical codes
/// 3 (normal), 6 (fixed defect) and 7 (reversible defect).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Thalassemia {
    Normal = 3,
    FixedDefect = 6,
    ReversibleDefect = 7,
}

impl Thalassemia {
    pub(crate) fn one_hot_offset(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::FixedDefect => 1,
            Self::ReversibleDefect => 2,
        }
    }
}

impl TryFrom<u8> for Thalassemia {
    type Error = RecordError;

    fn try_from(value: u8) -> Result<Self, RecordError> {
        match value {
            3 => Ok(Self::Normal),
            6 => Ok(Self::FixedDefect),
            7 => Ok(Self::ReversibleDefect),
            _ => Err(RecordError::UnknownCategory {
                field: "thalassemia",
                value,
                allowed: "3, 6, 7",
            }),
        }
    }
}

/// One patient's raw clinical measurements, immutable for the duration of
/// an encoding call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalRecord {
    /// Age in years (0-200)
    pub age: u16,

    /// Patient sex
    pub sex: Sex,

    /// Chest pain classification
    pub chest_pain: ChestPainType,

    /// Resting blood pressure in mm Hg (80-200)
    pub resting_bp: u16,

    /// Serum cholesterol in mg/dl (100-600)
    pub cholesterol: u16,

    /// Fasting blood sugar in mg/dl (50-400). The raw value is kept here;
    /// the encoder thresholds it at 120 mg/dl.
    pub fasting_blood_sugar: u16,

    /// Resting electrocardiographic result
    pub resting_ecg: RestingEcg,

    /// Maximum heart rate achieved in bpm (70-220)
    pub max_heart_rate: u16,

    /// Slope of the peak exercise ST segment
    pub st_slope: StSlope,

    /// Exercise induced angina
    pub exercise_angina: bool,

    /// Thallium stress test result
    pub thalassemia: Thalassemia,

    /// ST depression induced by exercise relative to rest (0.0-7.0)
    pub st_depression: f64,

    /// Number of major vessels colored by fluoroscopy (0-3)
    pub major_vessels: u8,
}

impl ClinicalRecord {
    /// Validate that all numeric measurements are within expected ranges.
    ///
    /// Categorical fields need no check here: the enum types cannot hold an
    /// out-of-domain code.
    ///
    /// # Errors
    /// Returns every violation found, as a vector of messages.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let mut check = |field: &str, value: f64, min: f64, max: f64| {
            if !(min..=max).contains(&value) {
                errors.push(format!("{field} {value} out of range [{min}, {max}]"));
            }
        };

        check("Age", f64::from(self.age), 0.0, 200.0);
        check("Resting BP", f64::from(self.resting_bp), 80.0, 200.0);
        check("Cholesterol", f64::from(self.cholesterol), 100.0, 600.0);
        check(
            "Fasting blood sugar",
            f64::from(self.fasting_blood_sugar),
            50.0,
            400.0,
        );
        check("Max heart rate", f64::from(self.max_heart_rate), 70.0, 220.0);
        check("ST depression", self.st_depression, 0.0, 7.0);
        check("Major vessels", f64::from(self.major_vessels), 0.0, 3.0);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ClinicalRecord {
        ClinicalRecord {
            age: 54,
            sex: Sex::Male,
            chest_pain: ChestPainType::NonAnginal,
            resting_bp: 130,
            cholesterol: 246,
            fasting_blood_sugar: 100,
            resting_ecg: RestingEcg::Normal,
            max_heart_rate: 150,
            st_slope: StSlope::Flat,
            exercise_angina: false,
            thalassemia: Thalassemia::Normal,
            st_depression: 1.0,
            major_vessels: 0,
        }
    }

    #[test]
    fn valid_record_passes_validation() {
        assert!(sample_record().validate().is_ok());
    }

    #[test]
    fn out_of_range_values_are_all_reported() {
        let record = ClinicalRecord {
            resting_bp: 40,
            cholesterol: 900,
            ..sample_record()
        };

        let errors = record.validate().expect_err("should fail");
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("Resting BP"));
        assert!(errors[1].contains("Cholesterol"));
    }

    #[test]
    fn categorical_codes_parse_for_every_documented_value() {
        for code in 1..=4 {
            assert!(ChestPainType::try_from(code).is_ok());
        }
        for code in 0..=2 {
            assert!(RestingEcg::try_from(code).is_ok());
        }
        for code in 1..=3 {
            assert!(StSlope::try_from(code).is_ok());
        }
        for code in [3, 6, 7] {
            assert!(Thalassemia::try_from(code).is_ok());
        }
    }

    #[test]
    fn unknown_categorical_codes_are_rejected() {
        assert!(matches!(
            ChestPainType::try_from(0),
            Err(RecordError::UnknownCategory { field: "chest_pain_type", .. })
        ));
        assert!(matches!(
            Thalassemia::try_from(4),
            Err(RecordError::UnknownCategory { field: "thalassemia", .. })
        ));
        assert!(matches!(
            StSlope::try_from(5),
            Err(RecordError::UnknownCategory { field: "st_slope", .. })
        ));
        assert!(matches!(
            RestingEcg::try_from(3),
            Err(RecordError::UnknownCategory { field: "resting_ecg", .. })
        ));
        assert!(Sex::try_from(2).is_err());
    }

    #[test]
    fn unknown_category_error_names_the_allowed_codes() {
        let err = Thalassemia::try_from(5).expect_err("must fail");
        assert_eq!(
            err.to_string(),
            "thalassemia code 5 is not one of 3, 6, 7"
        );
    }
}
