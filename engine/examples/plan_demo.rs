//! End-to-end demo: seeds in-memory catalogs, records a measurement and
//! prints the resulting personalized plan as JSON.
//!
//! Run with `cargo run --example plan_demo -p fitness-planner-engine`.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use fitness_planner_engine::config::EngineConfig;
use fitness_planner_engine::providers::{
    ExerciseCatalog, FoodCatalog, IntakeItem, IntakeLog, NewBiometricSnapshot, PlanIntake,
    ProfileDirectory, SnapshotStore,
};
use fitness_planner_engine::services::{BiometricService, RecommendationService};
use fitness_planner_shared::goals::{DifficultyTier, PracticeLevel};
use fitness_planner_shared::types::{
    BiometricSnapshot, ExerciseCandidate, FoodCandidate, GoalSnapshot,
};
use std::sync::Mutex;
use uuid::Uuid;

struct DemoStore {
    profile_id: Uuid,
    snapshots: Mutex<Vec<BiometricSnapshot>>,
    foods: Vec<FoodCandidate>,
    exercises: Vec<ExerciseCandidate>,
    intake: Vec<PlanIntake>,
}

#[async_trait]
impl ProfileDirectory for DemoStore {
    async fn exists(&self, profile_id: Uuid) -> Result<bool> {
        Ok(profile_id == self.profile_id)
    }
}

#[async_trait]
impl SnapshotStore for DemoStore {
    async fn current(&self, profile_id: Uuid) -> Result<Option<BiometricSnapshot>> {
        Ok(self
            .snapshots
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.profile_id == profile_id && s.is_current)
            .cloned())
    }

    async fn insert_current(&self, input: NewBiometricSnapshot) -> Result<BiometricSnapshot> {
        let mut snapshots = self.snapshots.lock().unwrap();
        for existing in snapshots.iter_mut() {
            if existing.profile_id == input.profile_id {
                existing.is_current = false;
            }
        }
        let snapshot = BiometricSnapshot {
            id: Uuid::new_v4(),
            profile_id: input.profile_id,
            height_cm: input.height_cm,
            weight_kg: input.weight_kg,
            bmi: input.bmi,
            assessment: input.assessment,
            activity_factor: input.activity_factor,
            practice_level: input.practice_level,
            is_current: true,
            goal: None,
            measured_at: input.measured_at,
            created_at: Utc::now(),
        };
        snapshots.push(snapshot.clone());
        Ok(snapshot)
    }

    async fn set_goal(&self, snapshot_id: Uuid, goal: GoalSnapshot) -> Result<BiometricSnapshot> {
        let mut snapshots = self.snapshots.lock().unwrap();
        let snapshot = snapshots
            .iter_mut()
            .find(|s| s.id == snapshot_id)
            .ok_or_else(|| anyhow::anyhow!("snapshot not found"))?;
        snapshot.goal = Some(goal);
        Ok(snapshot.clone())
    }
}

#[async_trait]
impl FoodCatalog for DemoStore {
    async fn all(&self) -> Result<Vec<FoodCandidate>> {
        Ok(self.foods.clone())
    }
}

#[async_trait]
impl ExerciseCatalog for DemoStore {
    async fn all(&self) -> Result<Vec<ExerciseCandidate>> {
        Ok(self.exercises.clone())
    }
}

#[async_trait]
impl IntakeLog for DemoStore {
    async fn plans_logged_on(&self, _profile_id: Uuid, _date: NaiveDate) -> Result<Vec<PlanIntake>> {
        Ok(self.intake.clone())
    }
}

fn food(name: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> FoodCandidate {
    FoodCandidate {
        id: Uuid::new_v4(),
        name: name.to_string(),
        calories_kcal: calories,
        protein_g: protein,
        carbs_g: carbs,
        fat_g: fat,
        serving_size: "100g".to_string(),
    }
}

fn exercise(title: &str, muscle: &str, difficulty: DifficultyTier, tags: &[&str]) -> ExerciseCandidate {
    ExerciseCandidate {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("{title}, controlled tempo"),
        primary_muscle: muscle.to_string(),
        secondary_muscles: vec![],
        difficulty,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fitness_planner_engine=debug".into()),
        )
        .init();

    let config = EngineConfig::load()?;

    let store = DemoStore {
        profile_id: Uuid::new_v4(),
        snapshots: Mutex::new(Vec::new()),
        foods: vec![
            food("Oatmeal with banana", 420.0, 12.0, 72.0, 8.0),
            food("Greek yogurt bowl", 350.0, 24.0, 38.0, 9.0),
            food("Grilled chicken with rice", 680.0, 45.0, 70.0, 16.0),
            food("Beef pho", 560.0, 32.0, 58.0, 18.0),
            food("Salmon and potatoes", 640.0, 38.0, 48.0, 28.0),
            food("Tofu stir-fry", 510.0, 26.0, 44.0, 22.0),
            food("Apple with peanut butter", 240.0, 7.0, 28.0, 12.0),
            food("Protein shake", 180.0, 30.0, 8.0, 3.0),
            food("Mixed nuts", 210.0, 6.0, 8.0, 18.0),
        ],
        exercises: vec![
            exercise("Push-up", "Chest", DifficultyTier::Beginner, &["bodyweight"]),
            exercise("Jumping Jacks", "Cardio", DifficultyTier::Beginner, &["cardio"]),
            exercise("Bench Press", "Chest", DifficultyTier::Intermediate, &["compound"]),
            exercise("Barbell Row", "Back", DifficultyTier::Intermediate, &["compound"]),
            exercise("Burpee", "Full Body", DifficultyTier::Intermediate, &["cardio"]),
            exercise("Walking Lunge", "Legs", DifficultyTier::Intermediate, &["bodyweight"]),
            exercise("Deadlift", "Back", DifficultyTier::Advanced, &["compound"]),
        ],
        intake: vec![PlanIntake {
            plan_id: Uuid::new_v4(),
            plan_created_at: Utc::now(),
            items: vec![IntakeItem {
                food_item_id: Uuid::new_v4(),
                serving_count: 1.0,
                calories_kcal: 420.0,
            }],
        }],
    };

    let profile_id = store.profile_id;
    BiometricService::record_measurement(&store, profile_id, 175.0, 82.0, 1.55, PracticeLevel::Medium)
        .await?;
    let with_goal = BiometricService::choose_plan(&store, profile_id).await?;
    println!(
        "chosen plan: {}",
        serde_json::to_string_pretty(&with_goal.goal)?
    );

    let service = RecommendationService::new(
        &store,
        &store,
        &store,
        &store,
        &store,
        config.recommendations,
    );
    let plan = service
        .personalized_plan(profile_id, Utc::now().date_naive())
        .await?;

    println!("personalized plan: {}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
