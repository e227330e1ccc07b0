//! Logged nutrition intake seam

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// One food serving logged against a nutrition plan
#[derive(Debug, Clone)]
pub struct IntakeItem {
    pub food_item_id: Uuid,
    pub serving_count: f64,
    /// Calories per serving of the logged food item
    pub calories_kcal: f64,
}

/// A nutrition plan's items logged on a given day
#[derive(Debug, Clone)]
pub struct PlanIntake {
    pub plan_id: Uuid,
    pub plan_created_at: DateTime<Utc>,
    pub items: Vec<IntakeItem>,
}

/// Read-only access to logged nutrition-plan items
#[async_trait]
pub trait IntakeLog: Send + Sync {
    /// Items logged on `date`, grouped by the nutrition plan they belong to.
    /// The engine only tallies the most recently created plan; older plans
    /// are returned but ignored.
    async fn plans_logged_on(&self, profile_id: Uuid, date: NaiveDate)
        -> Result<Vec<PlanIntake>>;
}
