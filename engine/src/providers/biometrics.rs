//! Biometric snapshot store seam

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fitness_planner_shared::biometrics::BmiAssessment;
use fitness_planner_shared::goals::PracticeLevel;
use fitness_planner_shared::types::{BiometricSnapshot, GoalSnapshot};
use uuid::Uuid;

/// Input for creating a biometric snapshot
#[derive(Debug, Clone)]
pub struct NewBiometricSnapshot {
    pub profile_id: Uuid,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    pub assessment: BmiAssessment,
    pub activity_factor: f64,
    pub practice_level: PracticeLevel,
    pub measured_at: DateTime<Utc>,
}

/// Store for biometric snapshots
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// The current snapshot for a profile, if any
    async fn current(&self, profile_id: Uuid) -> Result<Option<BiometricSnapshot>>;

    /// Insert a new snapshot marked current.
    ///
    /// Implementations must first demote every previous current snapshot for
    /// the profile, so that exactly one snapshot per profile is current at
    /// any time.
    async fn insert_current(&self, input: NewBiometricSnapshot) -> Result<BiometricSnapshot>;

    /// Attach a chosen goal payload to a snapshot and return the updated
    /// record. The only snapshot fields that ever change after creation are
    /// the current flag and this payload.
    async fn set_goal(&self, snapshot_id: Uuid, goal: GoalSnapshot) -> Result<BiometricSnapshot>;
}
