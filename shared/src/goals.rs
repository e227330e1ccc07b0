//! Goal resolution module
//!
//! Maps BMI values and user-chosen labels to canonical goals, calorie
//! adjustments and difficulty tiers.
//!
//! Two goal derivations coexist on purpose: the coarse three-way goal used
//! by the recommendation rankers (`Goal::for_bmi`) and the fine-grained
//! 14-band plan table used by the plan-selection path (`GoalPlan::for_bmi`).
//! Their thresholds differ slightly and are kept independent.

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Canonical Goals
// ============================================================================

/// Canonical fitness goal driving candidate ranking and macro allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Maintenance,
}

impl Goal {
    /// Derive a goal from a BMI value (recommendation path)
    pub fn for_bmi(bmi: f64) -> Self {
        if bmi > 25.0 {
            Goal::WeightLoss
        } else if bmi < 18.5 {
            Goal::MuscleGain
        } else {
            Goal::Maintenance
        }
    }

    /// The wire label for this goal
    pub fn label(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::MuscleGain => "muscle_gain",
            Goal::Maintenance => "maintenance",
        }
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weight_loss" => Ok(Goal::WeightLoss),
            "muscle_gain" => Ok(Goal::MuscleGain),
            "maintenance" => Ok(Goal::Maintenance),
            other => Err(AppError::Validation(format!("Unknown goal: {other}"))),
        }
    }
}

/// Daily calorie target for a goal
///
/// The weekly goal is a magnitude in kg; its direction comes from the goal:
/// a deficit for weight loss, a surplus for muscle gain, no adjustment for
/// maintenance. One kg of body mass is counted as 7700 kcal.
pub fn daily_calorie_target(tdee: f64, goal: Goal, weekly_goal_kg: f64) -> f64 {
    let delta = weekly_goal_kg * 7700.0 / 7.0;
    match goal {
        Goal::WeightLoss => tdee - delta,
        Goal::MuscleGain => tdee + delta,
        Goal::Maintenance => tdee,
    }
}

// ============================================================================
// Practice Levels and Difficulty Tiers
// ============================================================================

/// Coarse weekly-training-time bucket reported by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeLevel {
    /// More than an hour per session
    Pro,
    /// 45-60 minutes
    Hard,
    /// 30-45 minutes
    Medium,
    /// 15-30 minutes
    Easy,
    /// 5-15 minutes
    Newbie,
}

/// Exercise difficulty tier driving candidate filtering and burn estimates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyTier {
    /// Map a practice level to the tier used for exercise filtering
    pub fn for_practice_level(level: PracticeLevel) -> Self {
        match level {
            PracticeLevel::Pro | PracticeLevel::Hard => DifficultyTier::Advanced,
            PracticeLevel::Medium => DifficultyTier::Intermediate,
            PracticeLevel::Easy | PracticeLevel::Newbie => DifficultyTier::Beginner,
        }
    }

    /// Parse a catalog difficulty label; unrecognized labels map to
    /// `Beginner`.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "advanced" => DifficultyTier::Advanced,
            "intermediate" => DifficultyTier::Intermediate,
            _ => DifficultyTier::Beginner,
        }
    }

    /// The wire label for this tier
    pub fn label(&self) -> &'static str {
        match self {
            DifficultyTier::Beginner => "beginner",
            DifficultyTier::Intermediate => "intermediate",
            DifficultyTier::Advanced => "advanced",
        }
    }

    /// Estimated calories burned per minute at this tier
    pub fn calories_per_minute(&self) -> i32 {
        match self {
            DifficultyTier::Beginner => 5,
            DifficultyTier::Intermediate => 8,
            DifficultyTier::Advanced => 12,
        }
    }
}

// ============================================================================
// Goal Plans (plan-selection path)
// ============================================================================

/// A goal plan assigned from a BMI band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalPlan {
    pub plan_id: i32,
    pub assessment: String,
    /// Signed weekly body-mass target in kg: positive = gain, negative = loss
    pub weekly_target_kg: f64,
    pub exercise_per_week: i32,
}

struct PlanBand {
    min: f64,
    max: f64,
    plan_id: i32,
    assessment: &'static str,
    weekly_target_kg: f64,
    exercise_per_week: i32,
}

const PLAN_BANDS: &[PlanBand] = &[
    PlanBand { min: f64::NEG_INFINITY, max: 16.0, plan_id: 1, assessment: "Underweight - Severe", weekly_target_kg: 0.5, exercise_per_week: 2 },
    PlanBand { min: 16.0, max: 17.0, plan_id: 2, assessment: "Underweight - Moderate", weekly_target_kg: 0.4, exercise_per_week: 2 },
    PlanBand { min: 17.0, max: 18.0, plan_id: 3, assessment: "Underweight - Mild", weekly_target_kg: 0.3, exercise_per_week: 2 },
    PlanBand { min: 18.0, max: 18.5, plan_id: 4, assessment: "Underweight - Slight", weekly_target_kg: 0.25, exercise_per_week: 2 },
    PlanBand { min: 18.5, max: 19.5, plan_id: 5, assessment: "Normal - Low", weekly_target_kg: 0.0, exercise_per_week: 3 },
    PlanBand { min: 19.5, max: 21.0, plan_id: 6, assessment: "Normal - Mid", weekly_target_kg: 0.0, exercise_per_week: 3 },
    PlanBand { min: 21.0, max: 23.0, plan_id: 7, assessment: "Normal - High", weekly_target_kg: 0.0, exercise_per_week: 3 },
    PlanBand { min: 23.0, max: 25.0, plan_id: 8, assessment: "Normal - Top", weekly_target_kg: 0.0, exercise_per_week: 3 },
    PlanBand { min: 25.0, max: 27.0, plan_id: 9, assessment: "Overweight - Low", weekly_target_kg: -0.25, exercise_per_week: 4 },
    PlanBand { min: 27.0, max: 29.0, plan_id: 10, assessment: "Overweight - Mid", weekly_target_kg: -0.4, exercise_per_week: 4 },
    PlanBand { min: 29.0, max: 30.0, plan_id: 11, assessment: "Overweight - High", weekly_target_kg: -0.5, exercise_per_week: 4 },
    PlanBand { min: 30.0, max: 32.0, plan_id: 12, assessment: "Obese - Low", weekly_target_kg: -0.5, exercise_per_week: 5 },
    PlanBand { min: 32.0, max: 35.0, plan_id: 13, assessment: "Obese - Mid", weekly_target_kg: -0.75, exercise_per_week: 5 },
    PlanBand { min: 35.0, max: f64::INFINITY, plan_id: 14, assessment: "Obese - High", weekly_target_kg: -1.0, exercise_per_week: 6 },
];

impl GoalPlan {
    /// Look up the goal plan for a BMI value. Bands are half-open
    /// `[min, max)` and cover the whole axis, so every finite BMI matches.
    pub fn for_bmi(bmi: f64) -> Self {
        let band = PLAN_BANDS
            .iter()
            .find(|b| bmi >= b.min && bmi < b.max)
            .unwrap_or(&PLAN_BANDS[PLAN_BANDS.len() - 1]);
        GoalPlan {
            plan_id: band.plan_id,
            assessment: band.assessment.to_string(),
            weekly_target_kg: band.weekly_target_kg,
            exercise_per_week: band.exercise_per_week,
        }
    }
}
