//! Biometric calculations module
//!
//! Provides the core biometric formulas used by the planner: BMI, BMR
//! (Mifflin-St Jeor), TDEE, and BMI assessment categories.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Evidence-Based**: Formulas from peer-reviewed research
//! 3. **Type Safety**: Closed enums instead of free-form label strings

use crate::errors::AppError;
use crate::validation::{validate_height_cm, validate_weight_kg};
use serde::{Deserialize, Serialize};

// ============================================================================
// Profile Attribute Types
// ============================================================================

/// Biological sex for the BMR formula offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse a free-form gender label.
    ///
    /// Any label other than a case-insensitive "male" falls into the female
    /// branch; labels are not validated.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("male") {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise, physical job
    VeryActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.20,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.90,
        }
    }

    /// Parse an activity label; unrecognized labels map to `Moderate`.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "light" => ActivityLevel::Light,
            "moderate" => ActivityLevel::Moderate,
            "active" => ActivityLevel::Active,
            "very_active" => ActivityLevel::VeryActive,
            _ => ActivityLevel::Moderate,
        }
    }
}

// ============================================================================
// BMI
// ============================================================================

/// BMI assessment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiAssessment {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiAssessment {
    /// Classify a BMI value into its assessment category
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiAssessment::Underweight
        } else if bmi < 25.0 {
            BmiAssessment::Normal
        } else if bmi < 30.0 {
            BmiAssessment::Overweight
        } else {
            BmiAssessment::Obese
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiAssessment::Underweight => "Underweight",
            BmiAssessment::Normal => "Normal",
            BmiAssessment::Overweight => "Overweight",
            BmiAssessment::Obese => "Obese",
        }
    }
}

/// Calculate BMI from height and weight
///
/// Formula: BMI = weight(kg) / height(m)²
///
/// Fails with a validation error when either input is non-positive or
/// non-finite.
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> Result<f64, AppError> {
    validate_height_cm(height_cm)?;
    validate_weight_kg(weight_kg)?;
    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

// ============================================================================
// BMR and TDEE
// ============================================================================

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: i32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// BMR for the fixed reference profile the plan paths assume when no age or
/// sex is on file: a 25-year-old male.
pub fn reference_bmr(weight_kg: f64, height_cm: f64) -> f64 {
    calculate_bmr(weight_kg, height_cm, 25, Gender::Male)
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    // =========================================================================
    // BMI Tests
    // =========================================================================

    #[test]
    fn test_bmi_calculation() {
        // 175cm, 70kg -> BMI ~22.857
        let bmi = calculate_bmi(175.0, 70.0).unwrap();
        assert!((bmi - 22.857).abs() < 0.001);
    }

    #[rstest]
    #[case(0.0, 70.0)]
    #[case(-175.0, 70.0)]
    #[case(175.0, 0.0)]
    #[case(175.0, -70.0)]
    fn test_bmi_rejects_non_positive_inputs(#[case] height: f64, #[case] weight: f64) {
        let result = calculate_bmi(height, weight);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[rstest]
    #[case(17.9, BmiAssessment::Underweight)]
    #[case(18.5, BmiAssessment::Normal)]
    #[case(24.999, BmiAssessment::Normal)]
    #[case(25.0, BmiAssessment::Overweight)]
    #[case(29.999, BmiAssessment::Overweight)]
    #[case(30.0, BmiAssessment::Obese)]
    fn test_bmi_assessment_boundaries(#[case] bmi: f64, #[case] expected: BmiAssessment) {
        assert_eq!(BmiAssessment::classify(bmi), expected);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: BMI is always positive for valid inputs
        #[test]
        fn prop_bmi_positive(weight in 20.0f64..500.0, height in 100.0f64..250.0) {
            let bmi = calculate_bmi(height, weight).unwrap();
            prop_assert!(bmi > 0.0);
        }

        /// Property: Heavier weight = higher BMI (same height)
        #[test]
        fn prop_bmi_increases_with_weight(
            weight1 in 50.0f64..100.0,
            weight2 in 100.0f64..150.0,
            height in 150.0f64..200.0
        ) {
            let bmi1 = calculate_bmi(height, weight1).unwrap();
            let bmi2 = calculate_bmi(height, weight2).unwrap();
            prop_assert!(bmi2 > bmi1);
        }

        /// Property: Taller height = lower BMI (same weight)
        #[test]
        fn prop_bmi_decreases_with_height(
            weight in 60.0f64..100.0,
            height1 in 150.0f64..170.0,
            height2 in 180.0f64..200.0
        ) {
            let bmi1 = calculate_bmi(height1, weight).unwrap();
            let bmi2 = calculate_bmi(height2, weight).unwrap();
            prop_assert!(bmi1 > bmi2);
        }
    }

    // =========================================================================
    // BMR/TDEE Tests
    // =========================================================================

    #[test]
    fn test_bmr_mifflin() {
        // 30yo male, 70kg, 175cm -> 10*70 + 6.25*175 - 5*30 + 5 = 1648.75
        let bmr = calculate_bmr(70.0, 175.0, 30, Gender::Male);
        assert!((bmr - 1648.75).abs() < 1e-9);

        // Same stats, female -> 1638.75 - 161 = 1482.75
        let bmr = calculate_bmr(70.0, 175.0, 30, Gender::Female);
        assert!((bmr - 1482.75).abs() < 1e-9);
    }

    #[test]
    fn test_gender_label_parsing() {
        assert_eq!(Gender::from_label("male"), Gender::Male);
        assert_eq!(Gender::from_label("MALE"), Gender::Male);
        assert_eq!(Gender::from_label("female"), Gender::Female);
        // Anything that is not "male" takes the female offset
        assert_eq!(Gender::from_label("unspecified"), Gender::Female);
    }

    #[test]
    fn test_tdee_calculation() {
        let tdee = calculate_tdee(1648.75, ActivityLevel::Moderate);
        assert!((tdee - 2555.5625).abs() < 1e-9);
    }

    #[rstest]
    #[case("sedentary", 1.20)]
    #[case("light", 1.375)]
    #[case("moderate", 1.55)]
    #[case("active", 1.725)]
    #[case("very_active", 1.90)]
    #[case("VERY_ACTIVE", 1.90)]
    #[case("couch potato", 1.55)]
    fn test_activity_label_multipliers(#[case] label: &str, #[case] expected: f64) {
        assert_eq!(ActivityLevel::from_label(label).multiplier(), expected);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Male BMR > Female BMR (same stats)
        #[test]
        fn prop_male_bmr_higher(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18i32..80
        ) {
            let bmr_male = calculate_bmr(weight, height, age, Gender::Male);
            let bmr_female = calculate_bmr(weight, height, age, Gender::Female);
            prop_assert!(bmr_male > bmr_female);
        }

        /// Property: TDEE > BMR for any activity level (all multipliers > 1)
        #[test]
        fn prop_tdee_greater_than_bmr(
            weight in 50.0f64..100.0,
            height in 160.0f64..190.0,
            age in 20i32..60
        ) {
            let bmr = calculate_bmr(weight, height, age, Gender::Male);
            for activity in [
                ActivityLevel::Sedentary,
                ActivityLevel::Light,
                ActivityLevel::Moderate,
                ActivityLevel::Active,
                ActivityLevel::VeryActive,
            ] {
                prop_assert!(calculate_tdee(bmr, activity) > bmr);
            }
        }
    }
}
