//! Workout candidate ranking
//!
//! Filters exercise candidates by difficulty tier and orders them by a
//! goal-weighted priority score. Unlike the meal ranker, an empty filtered
//! pool falls back to the head of the full catalog rather than an empty
//! list.

use fitness_planner_shared::goals::{DifficultyTier, Goal};
use fitness_planner_shared::types::{ExerciseCandidate, WorkoutRecommendation};
use std::cmp::Ordering;
use tracing::warn;

/// Base priority before goal bonuses are applied
const BASE_PRIORITY: f64 = 50.0;

/// Rank exercise candidates for a goal and difficulty tier.
///
/// When no candidate matches the tier, the first `limit` entries of the full
/// catalog stand in as the pool; they are scored and sorted like any other
/// pool so the output shape is uniform.
pub fn rank_workouts(
    catalog: &[ExerciseCandidate],
    goal: Goal,
    tier: DifficultyTier,
    limit: usize,
    duration_min: i32,
) -> Vec<WorkoutRecommendation> {
    let pool: Vec<&ExerciseCandidate> = catalog
        .iter()
        .filter(|e| e.difficulty == tier)
        .collect();

    let pool = if pool.is_empty() {
        warn!(
            tier = tier.label(),
            "no exercises at requested difficulty, falling back to full catalog"
        );
        catalog.iter().take(limit).collect()
    } else {
        pool
    };

    let mut recommendations: Vec<WorkoutRecommendation> = pool
        .into_iter()
        .map(|exercise| WorkoutRecommendation {
            id: exercise.id,
            title: exercise.title.clone(),
            description: exercise.description.clone(),
            primary_muscle: exercise.primary_muscle.clone(),
            secondary_muscles: exercise.secondary_muscles.clone(),
            difficulty: exercise.difficulty,
            duration_min,
            estimated_calories_burned: exercise.difficulty.calories_per_minute() * duration_min,
            priority: priority_score(exercise, goal),
            reason: workout_reason(exercise, goal),
        })
        .collect();

    // Stable sort: catalog order breaks priority ties deterministically.
    recommendations.sort_by(|a, b| b.priority.partial_cmp(&a.priority).unwrap_or(Ordering::Equal));
    recommendations.truncate(limit);
    recommendations
}

/// Goal-weighted priority for an exercise, 50-100
pub fn priority_score(exercise: &ExerciseCandidate, goal: Goal) -> f64 {
    let muscle = exercise.primary_muscle.to_lowercase();
    let mut score = BASE_PRIORITY;

    match goal {
        Goal::WeightLoss => {
            if muscle.contains("full") {
                score += 30.0;
            }
            if muscle.contains("cardio") {
                score += 30.0;
            }
            if muscle.contains("legs") {
                score += 20.0;
            }
        }
        Goal::MuscleGain => {
            for target in ["chest", "back", "legs"] {
                if muscle.contains(target) {
                    score += 25.0;
                }
            }
        }
        Goal::Maintenance => {
            if exercise
                .tags
                .iter()
                .any(|t| t.to_lowercase().contains("compound"))
            {
                score += 20.0;
            }
            if muscle.contains("core") {
                score += 15.0;
            }
            if muscle.contains("full") {
                score += 15.0;
            }
        }
    }

    score.min(100.0)
}

/// Reason line keyed by goal and primary muscle
fn workout_reason(exercise: &ExerciseCandidate, goal: Goal) -> String {
    match goal {
        Goal::WeightLoss => format!(
            "Burns calories effectively, targets {}",
            exercise.primary_muscle
        ),
        Goal::MuscleGain => format!("Builds {} strength", exercise.primary_muscle),
        Goal::Maintenance => format!("Maintains {} fitness", exercise.primary_muscle),
    }
}
