//! Biometric-update path: measurement recording and plan selection
//!
//! This path writes through the snapshot store seam; the computations
//! themselves stay pure and are tested without a store.

use crate::error::{EngineError, EngineResult};
use crate::providers::{NewBiometricSnapshot, SnapshotStore};
use chrono::Utc;
use fitness_planner_shared::biometrics::{calculate_bmi, reference_bmr, BmiAssessment};
use fitness_planner_shared::goals::{GoalPlan, PracticeLevel};
use fitness_planner_shared::macros::band_macro_targets;
use fitness_planner_shared::types::{BiometricSnapshot, GoalSnapshot};
use tracing::debug;
use uuid::Uuid;

/// Biometric service
pub struct BiometricService;

impl BiometricService {
    /// Record a new measurement as the profile's current snapshot.
    ///
    /// Rejects non-positive height or weight. The store demotes every
    /// previous current snapshot for the profile on insert.
    pub async fn record_measurement(
        store: &dyn SnapshotStore,
        profile_id: Uuid,
        height_cm: f64,
        weight_kg: f64,
        activity_factor: f64,
        practice_level: PracticeLevel,
    ) -> EngineResult<BiometricSnapshot> {
        let bmi = calculate_bmi(height_cm, weight_kg)?;
        let assessment = BmiAssessment::classify(bmi);

        debug!(%profile_id, bmi, assessment = assessment.description(), "recording biometric measurement");

        let snapshot = store
            .insert_current(NewBiometricSnapshot {
                profile_id,
                height_cm,
                weight_kg,
                bmi,
                assessment,
                activity_factor,
                practice_level,
                measured_at: Utc::now(),
            })
            .await?;

        Ok(snapshot)
    }

    /// Choose a goal plan for the profile's current snapshot.
    ///
    /// Resolves the BMI-band plan, derives the daily energy budget from the
    /// snapshot's stored activity factor, allocates band macros and attaches
    /// the resulting payload to the snapshot.
    pub async fn choose_plan(
        store: &dyn SnapshotStore,
        profile_id: Uuid,
    ) -> EngineResult<BiometricSnapshot> {
        let record = store
            .current(profile_id)
            .await?
            .ok_or_else(|| EngineError::NotFound("biometric record".to_string()))?;

        let goal = plan_payload(&record);
        let updated = store.set_goal(record.id, goal).await?;
        Ok(updated)
    }
}

/// Build the goal payload for a snapshot.
///
/// The energy budget applies the plan's signed weekly target directly
/// (positive targets add a surplus, negative ones a deficit). This is the
/// plan-selection derivation; the recommendation path branches on the
/// canonical goal instead, and the two are intentionally not unified.
pub fn plan_payload(record: &BiometricSnapshot) -> GoalSnapshot {
    let plan = GoalPlan::for_bmi(record.bmi);
    let bmr = reference_bmr(record.weight_kg, record.height_cm);
    let tdee = bmr * record.activity_factor + plan.weekly_target_kg * 7700.0 / 7.0;
    let macros = band_macro_targets(tdee, record.bmi);

    GoalSnapshot { plan, macros, tdee }
}
