//! Value objects exchanged between the engine and its callers

use crate::biometrics::BmiAssessment;
use crate::goals::{DifficultyTier, Goal, GoalPlan, PracticeLevel};
use crate::macros::MacroTargets;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Biometric Snapshot
// ============================================================================

/// The goal payload attached to a snapshot when a plan is chosen
///
/// A typed value object serialized as structured data, replacing the
/// heterogeneous key/value bag the payload grew out of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSnapshot {
    pub plan: GoalPlan,
    pub macros: MacroTargets,
    pub tdee: f64,
}

/// A point-in-time biometric record for a profile
///
/// Exactly one snapshot per profile is current at any time. After creation
/// only the `is_current` flag and the goal payload ever change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricSnapshot {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    pub assessment: BmiAssessment,
    pub activity_factor: f64,
    pub practice_level: PracticeLevel,
    pub is_current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<GoalSnapshot>,
    pub measured_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Catalog Candidates
// ============================================================================

/// An immutable food catalog entry, read-only to the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCandidate {
    pub id: Uuid,
    pub name: String,
    pub calories_kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub serving_size: String,
}

/// An immutable exercise catalog entry, read-only to the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseCandidate {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub primary_muscle: String,
    pub secondary_muscles: Vec<String>,
    pub difficulty: DifficultyTier,
    pub tags: Vec<String>,
}

// ============================================================================
// Recommendations
// ============================================================================

/// A scored food suggestion for one meal slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecommendation {
    pub id: Uuid,
    pub name: String,
    pub calories_kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub serving_size: String,
    /// How well the candidate matches the slot budget, 0-100
    pub match_score: f64,
    pub reason: String,
}

/// A scored workout suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecommendation {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub primary_muscle: String,
    pub secondary_muscles: Vec<String>,
    pub difficulty: DifficultyTier,
    pub duration_min: i32,
    pub estimated_calories_burned: i32,
    /// Goal-weighted ranking signal, 0-100
    pub priority: f64,
    pub reason: String,
}

// ============================================================================
// Personalized Plan
// ============================================================================

/// Meal slot with its share of the daily calorie budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    /// This slot's share of the daily budget. The four shares sum to 1.
    pub fn share(&self) -> f64 {
        match self {
            MealSlot::Breakfast => 0.25,
            MealSlot::Lunch => 0.35,
            MealSlot::Dinner => 0.30,
            MealSlot::Snack => 0.10,
        }
    }

    /// Parse a meal-type label; unrecognized labels map to `Breakfast`.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "lunch" => MealSlot::Lunch,
            "dinner" => MealSlot::Dinner,
            "snack" => MealSlot::Snack,
            _ => MealSlot::Breakfast,
        }
    }

    /// The wire label for this slot
    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }
}

/// The aggregated daily plan returned to the caller
///
/// Fully ephemeral: recomputed on every request, never persisted by the
/// engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalizedPlan {
    /// Assessment label of the matched goal plan
    pub goal: String,
    /// Canonical goal driving the candidate ranking
    pub goal_plan: Goal,
    pub practice_level: PracticeLevel,
    pub current_bmi: f64,
    pub target_calories: f64,
    pub consumed_calories: f64,
    /// May be negative when consumption exceeds the target; never clamped
    pub remaining_calories: f64,
    pub macro_targets: MacroTargets,
    pub breakfast: Vec<FoodRecommendation>,
    pub lunch: Vec<FoodRecommendation>,
    pub dinner: Vec<FoodRecommendation>,
    pub snacks: Vec<FoodRecommendation>,
    pub workouts: Vec<WorkoutRecommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_shares_sum_to_one() {
        let total: f64 = [
            MealSlot::Breakfast,
            MealSlot::Lunch,
            MealSlot::Dinner,
            MealSlot::Snack,
        ]
        .iter()
        .map(|s| s.share())
        .sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_meal_slot_label_parsing() {
        assert_eq!(MealSlot::from_label("breakfast"), MealSlot::Breakfast);
        assert_eq!(MealSlot::from_label("LUNCH"), MealSlot::Lunch);
        assert_eq!(MealSlot::from_label("Dinner"), MealSlot::Dinner);
        assert_eq!(MealSlot::from_label("snack"), MealSlot::Snack);
        // Unrecognized meal types take the breakfast share
        assert_eq!(MealSlot::from_label("brunch"), MealSlot::Breakfast);
    }

    #[test]
    fn test_goal_snapshot_serializes_structured() {
        let goal = GoalSnapshot {
            plan: GoalPlan::for_bmi(27.0),
            macros: crate::macros::band_macro_targets(2200.0, 27.0),
            tdee: 2200.0,
        };
        let json = serde_json::to_value(&goal).unwrap();
        assert_eq!(json["plan"]["plan_id"], 10);
        assert_eq!(json["tdee"], 2200.0);
        assert!(json["macros"]["protein_g"].is_number());

        let back: GoalSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, goal);
    }
}
