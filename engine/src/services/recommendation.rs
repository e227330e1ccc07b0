//! Recommendation service - personalized plan aggregation
//!
//! Combines a profile's current biometric snapshot with today's logged
//! consumption and the food/exercise catalogs into one `PersonalizedPlan`.
//! Providers are injected explicitly and every entry point takes the profile
//! id as a parameter; the engine carries no ambient user context.

use crate::config::RecommendationConfig;
use crate::error::{EngineError, EngineResult};
use crate::providers::{ExerciseCatalog, FoodCatalog, IntakeLog, PlanIntake, ProfileDirectory, SnapshotStore};
use crate::services::meal_ranker::rank_meals;
use crate::services::workout_ranker::rank_workouts;
use chrono::NaiveDate;
use fitness_planner_shared::biometrics::reference_bmr;
use fitness_planner_shared::goals::{daily_calorie_target, DifficultyTier, Goal, GoalPlan};
use fitness_planner_shared::macros::macro_targets_for_bmi;
use fitness_planner_shared::types::{
    FoodRecommendation, MealSlot, PersonalizedPlan, WorkoutRecommendation,
};
use tracing::debug;
use uuid::Uuid;

/// Recommendation service
pub struct RecommendationService<'a> {
    profiles: &'a dyn ProfileDirectory,
    snapshots: &'a dyn SnapshotStore,
    foods: &'a dyn FoodCatalog,
    exercises: &'a dyn ExerciseCatalog,
    intake: &'a dyn IntakeLog,
    config: RecommendationConfig,
}

impl<'a> RecommendationService<'a> {
    pub fn new(
        profiles: &'a dyn ProfileDirectory,
        snapshots: &'a dyn SnapshotStore,
        foods: &'a dyn FoodCatalog,
        exercises: &'a dyn ExerciseCatalog,
        intake: &'a dyn IntakeLog,
        config: RecommendationConfig,
    ) -> Self {
        Self {
            profiles,
            snapshots,
            foods,
            exercises,
            intake,
            config,
        }
    }

    /// Recommend meals for one slot against a calorie budget
    pub async fn recommend_meals(
        &self,
        budget_kcal: f64,
        slot: MealSlot,
        goal: Option<Goal>,
        limit: usize,
    ) -> EngineResult<Vec<FoodRecommendation>> {
        let catalog = self.foods.all().await?;
        Ok(rank_meals(&catalog, budget_kcal, slot, goal, limit))
    }

    /// Recommend workouts for a goal and difficulty tier
    pub async fn recommend_workouts(
        &self,
        bmi: f64,
        goal: Goal,
        tier: DifficultyTier,
        limit: usize,
    ) -> EngineResult<Vec<WorkoutRecommendation>> {
        debug!(bmi, goal = goal.label(), tier = tier.label(), "ranking workout candidates");
        let catalog = self.exercises.all().await?;
        Ok(rank_workouts(
            &catalog,
            goal,
            tier,
            limit,
            self.config.workout_duration_min,
        ))
    }

    /// Build the personalized daily plan for a profile.
    ///
    /// Fails with a not-found error when the profile or its current
    /// biometric snapshot is missing; no partial result is returned. Empty
    /// candidate pools degrade to empty suggestion lists.
    pub async fn personalized_plan(
        &self,
        profile_id: Uuid,
        date: NaiveDate,
    ) -> EngineResult<PersonalizedPlan> {
        if !self.profiles.exists(profile_id).await? {
            return Err(EngineError::NotFound("profile".to_string()));
        }
        let snapshot = self
            .snapshots
            .current(profile_id)
            .await?
            .ok_or_else(|| EngineError::NotFound("biometric record".to_string()))?;

        let goal = Goal::for_bmi(snapshot.bmi);
        // Weekly goal from the chosen plan when present, otherwise resolved
        // from the BMI band.
        let plan = snapshot
            .goal
            .as_ref()
            .map(|g| g.plan.clone())
            .unwrap_or_else(|| GoalPlan::for_bmi(snapshot.bmi));

        let tdee = reference_bmr(snapshot.weight_kg, snapshot.height_cm) * snapshot.activity_factor;
        let daily_calories = daily_calorie_target(tdee, goal, plan.weekly_target_kg.abs());
        let macro_targets = macro_targets_for_bmi(daily_calories, snapshot.bmi);

        let consumed_calories =
            consumed_calories(&self.intake.plans_logged_on(profile_id, date).await?);
        // Deliberately unclamped: over-consumption drives this negative and
        // the meal rankers then find nothing in their windows.
        let remaining_calories = daily_calories - consumed_calories;

        let tier = DifficultyTier::for_practice_level(snapshot.practice_level);

        debug!(
            %profile_id,
            bmi = snapshot.bmi,
            daily_calories,
            consumed_calories,
            remaining_calories,
            "assembling personalized plan"
        );

        // Each catalog is fetched once and shared across the meal slots.
        let foods = self.foods.all().await?;
        let exercises = self.exercises.all().await?;

        let limits = &self.config;
        let breakfast = rank_meals(
            &foods,
            remaining_calories,
            MealSlot::Breakfast,
            Some(goal),
            limits.meal_limit,
        );
        let lunch = rank_meals(
            &foods,
            remaining_calories,
            MealSlot::Lunch,
            Some(goal),
            limits.meal_limit,
        );
        let dinner = rank_meals(
            &foods,
            remaining_calories,
            MealSlot::Dinner,
            Some(goal),
            limits.meal_limit,
        );
        let snacks = rank_meals(
            &foods,
            remaining_calories,
            MealSlot::Snack,
            Some(goal),
            limits.snack_limit,
        );
        let workouts = rank_workouts(
            &exercises,
            goal,
            tier,
            limits.workout_limit,
            limits.workout_duration_min,
        );

        Ok(PersonalizedPlan {
            goal: plan.assessment,
            goal_plan: goal,
            practice_level: snapshot.practice_level,
            current_bmi: snapshot.bmi,
            target_calories: daily_calories,
            consumed_calories,
            remaining_calories,
            macro_targets,
            breakfast,
            lunch,
            dinner,
            snacks,
            workouts,
        })
    }
}

/// Calorie tally over the items of the most recently created plan.
///
/// Older plans are ignored even if still active; no plans logged means zero
/// consumption.
pub fn consumed_calories(plans: &[PlanIntake]) -> f64 {
    plans
        .iter()
        .max_by_key(|p| p.plan_created_at)
        .map(|plan| {
            plan.items
                .iter()
                .map(|item| item.serving_count * item.calories_kcal)
                .sum()
        })
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::IntakeItem;
    use chrono::{TimeZone, Utc};

    fn intake(created_at_hour: u32, servings_and_calories: &[(f64, f64)]) -> PlanIntake {
        PlanIntake {
            plan_id: Uuid::new_v4(),
            plan_created_at: Utc.with_ymd_and_hms(2025, 6, 1, created_at_hour, 0, 0).unwrap(),
            items: servings_and_calories
                .iter()
                .map(|&(serving_count, calories_kcal)| IntakeItem {
                    food_item_id: Uuid::new_v4(),
                    serving_count,
                    calories_kcal,
                })
                .collect(),
        }
    }

    #[test]
    fn test_consumed_calories_empty() {
        assert_eq!(consumed_calories(&[]), 0.0);
    }

    #[test]
    fn test_consumed_calories_sums_servings() {
        let plans = vec![intake(8, &[(2.0, 150.0), (0.5, 400.0)])];
        assert_eq!(consumed_calories(&plans), 500.0);
    }

    #[test]
    fn test_consumed_calories_uses_latest_plan_only() {
        let plans = vec![
            intake(8, &[(1.0, 1000.0)]),
            intake(12, &[(1.0, 300.0)]),
            intake(10, &[(1.0, 700.0)]),
        ];
        // Only the 12:00 plan counts
        assert_eq!(consumed_calories(&plans), 300.0);
    }

    #[test]
    fn test_consumed_calories_latest_plan_with_no_items() {
        let plans = vec![intake(8, &[(1.0, 1000.0)]), intake(12, &[])];
        assert_eq!(consumed_calories(&plans), 0.0);
    }
}
