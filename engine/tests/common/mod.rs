//! Common test utilities for integration tests
//!
//! In-memory implementations of the provider seams plus catalog fixtures.

#![allow(dead_code)]

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use fitness_planner_engine::providers::{
    ExerciseCatalog, FoodCatalog, IntakeItem, IntakeLog, NewBiometricSnapshot, PlanIntake,
    ProfileDirectory, SnapshotStore,
};
use fitness_planner_shared::goals::DifficultyTier;
use fitness_planner_shared::types::{BiometricSnapshot, ExerciseCandidate, FoodCandidate, GoalSnapshot};
use std::sync::Mutex;
use uuid::Uuid;

/// In-memory store implementing every provider seam
#[derive(Default)]
pub struct InMemoryStore {
    pub profiles: Vec<Uuid>,
    pub snapshots: Mutex<Vec<BiometricSnapshot>>,
    pub foods: Vec<FoodCandidate>,
    pub exercises: Vec<ExerciseCandidate>,
    pub intake: Vec<(Uuid, NaiveDate, PlanIntake)>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile_id: Uuid) -> Self {
        self.profiles.push(profile_id);
        self
    }

    pub fn with_foods(mut self, foods: Vec<FoodCandidate>) -> Self {
        self.foods = foods;
        self
    }

    pub fn with_exercises(mut self, exercises: Vec<ExerciseCandidate>) -> Self {
        self.exercises = exercises;
        self
    }

    pub fn with_intake(mut self, profile_id: Uuid, date: NaiveDate, plan: PlanIntake) -> Self {
        self.intake.push((profile_id, date, plan));
        self
    }

    /// Number of snapshots currently flagged current for a profile
    pub fn current_count(&self, profile_id: Uuid) -> usize {
        self.snapshots
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.profile_id == profile_id && s.is_current)
            .count()
    }
}

#[async_trait]
impl ProfileDirectory for InMemoryStore {
    async fn exists(&self, profile_id: Uuid) -> Result<bool> {
        Ok(self.profiles.contains(&profile_id))
    }
}

#[async_trait]
impl SnapshotStore for InMemoryStore {
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
        match snapshots.iter_mut().find(|s| s.id == snapshot_id) {
            Some(snapshot) => {
                snapshot.goal = Some(goal);
                Ok(snapshot.clone())
            }
            None => bail!("snapshot {snapshot_id} not found"),
        }
    }
}

#[async_trait]
impl FoodCatalog for InMemoryStore {
    async fn all(&self) -> Result<Vec<FoodCandidate>> {
        Ok(self.foods.clone())
    }
}

#[async_trait]
impl ExerciseCatalog for InMemoryStore {
    async fn all(&self) -> Result<Vec<ExerciseCandidate>> {
        Ok(self.exercises.clone())
    }
}

#[async_trait]
impl IntakeLog for InMemoryStore {
    async fn plans_logged_on(&self, profile_id: Uuid, date: NaiveDate) -> Result<Vec<PlanIntake>> {
        Ok(self
            .intake
            .iter()
            .filter(|(p, d, _)| *p == profile_id && *d == date)
            .map(|(_, _, plan)| plan.clone())
            .collect())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn food(name: &str, calories: f64, protein: f64, carbs: f64) -> FoodCandidate {
    FoodCandidate {
        id: Uuid::new_v4(),
        name: name.to_string(),
        calories_kcal: calories,
        protein_g: protein,
        carbs_g: carbs,
        fat_g: 10.0,
        serving_size: "100g".to_string(),
    }
}

pub fn exercise(
    title: &str,
    muscle: &str,
    difficulty: DifficultyTier,
    tags: &[&str],
) -> ExerciseCandidate {
    ExerciseCandidate {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("{title} description"),
        primary_muscle: muscle.to_string(),
        secondary_muscles: vec![],
        difficulty,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// A calorie spread wide enough that every meal slot of a realistic daily
/// budget finds candidates in its acceptance window
pub fn sample_foods() -> Vec<FoodCandidate> {
    (1..=20)
        .map(|i| {
            let calories = 50.0 * i as f64;
            food(
                &format!("Sample food {i}"),
                calories,
                5.0 + i as f64 * 2.0,
                10.0 + i as f64 * 3.0,
            )
        })
        .collect()
}

pub fn sample_exercises() -> Vec<ExerciseCandidate> {
    vec![
        exercise("Push-up", "Chest", DifficultyTier::Beginner, &["bodyweight"]),
        exercise("Bodyweight Squat", "Legs", DifficultyTier::Beginner, &["bodyweight"]),
        exercise("Jumping Jacks", "Cardio", DifficultyTier::Beginner, &["cardio"]),
        exercise("Bench Press", "Chest", DifficultyTier::Intermediate, &["compound"]),
        exercise("Barbell Row", "Back", DifficultyTier::Intermediate, &["compound"]),
        exercise("Lunge", "Legs", DifficultyTier::Intermediate, &["bodyweight"]),
        exercise("Burpee", "Full Body", DifficultyTier::Intermediate, &["cardio"]),
        exercise("Deadlift", "Back", DifficultyTier::Advanced, &["compound"]),
        exercise("Clean and Jerk", "Full Body", DifficultyTier::Advanced, &["compound"]),
    ]
}
