//! Meal candidate ranking
//!
//! Filters food candidates against a per-meal calorie budget and orders them
//! by goal-dependent criteria. Pure functions over a catalog slice: the
//! caller supplies the candidate pool, the ranker never queries anything.

use fitness_planner_shared::goals::Goal;
use fitness_planner_shared::types::{FoodCandidate, FoodRecommendation, MealSlot};
use std::cmp::Ordering;
use tracing::warn;

/// Rank food candidates for one meal slot.
///
/// The slot's share of `budget_kcal` becomes the meal budget; candidates
/// outside the inclusive ±30% acceptance window are dropped. An empty pool
/// yields an empty list — a valid outcome, not an error, and never replaced
/// by a fallback pool.
pub fn rank_meals(
    candidates: &[FoodCandidate],
    budget_kcal: f64,
    slot: MealSlot,
    goal: Option<Goal>,
    limit: usize,
) -> Vec<FoodRecommendation> {
    let meal_budget = budget_kcal * slot.share();
    let min_calories = meal_budget * 0.7;
    let max_calories = meal_budget * 1.3;

    let pool: Vec<&FoodCandidate> = candidates
        .iter()
        .filter(|f| f.calories_kcal >= min_calories && f.calories_kcal <= max_calories)
        .collect();

    if pool.is_empty() {
        warn!(
            slot = slot.label(),
            min_calories, max_calories, "no food candidates in calorie window"
        );
        return Vec::new();
    }

    let mut recommendations: Vec<FoodRecommendation> = pool
        .into_iter()
        .map(|food| FoodRecommendation {
            id: food.id,
            name: food.name.clone(),
            calories_kcal: food.calories_kcal,
            protein_g: food.protein_g,
            carbs_g: food.carbs_g,
            fat_g: food.fat_g,
            serving_size: food.serving_size.clone(),
            match_score: match_score(food.calories_kcal, meal_budget),
            reason: food_reason(food, slot, goal),
        })
        .collect();

    // Stable sorts keep the catalog order for ties, so identical inputs
    // always produce identical output order.
    match goal {
        None => recommendations.sort_by(|a, b| cmp_f64(b.match_score, a.match_score)),
        Some(Goal::WeightLoss) => recommendations.sort_by(|a, b| {
            cmp_f64(b.protein_g, a.protein_g).then(cmp_f64(a.carbs_g, b.carbs_g))
        }),
        Some(Goal::MuscleGain) => recommendations.sort_by(|a, b| {
            cmp_f64(b.protein_g, a.protein_g).then(cmp_f64(b.carbs_g, a.carbs_g))
        }),
        Some(Goal::Maintenance) => recommendations.sort_by(|a, b| {
            cmp_f64(
                (a.calories_kcal - meal_budget).abs(),
                (b.calories_kcal - meal_budget).abs(),
            )
        }),
    }

    recommendations.truncate(limit);
    recommendations
}

/// How closely a candidate's calories match the slot budget, 0-100
pub fn match_score(actual_kcal: f64, target_kcal: f64) -> f64 {
    let percent_diff = (actual_kcal - target_kcal).abs() / target_kcal * 100.0;
    (100.0 - percent_diff).max(0.0)
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Reason line for a recommendation, from protein/carb/calorie thresholds
fn food_reason(food: &FoodCandidate, slot: MealSlot, goal: Option<Goal>) -> String {
    if food.protein_g > 20.0 {
        return format!(
            "High protein ({}g) - great for {}",
            food.protein_g,
            slot.label()
        );
    }
    if food.carbs_g > 40.0 {
        return format!("Good carb source ({}g) for energy", food.carbs_g);
    }
    if food.calories_kcal < 200.0 {
        return "Low calorie option".to_string();
    }
    match goal {
        Some(goal) => format!("Balanced {} choice for {}", slot.label(), goal.label()),
        None => format!("Balanced meal for {}", slot.label()),
    }
}
