//! Food and exercise catalog seams

use anyhow::Result;
use async_trait::async_trait;
use fitness_planner_shared::types::{ExerciseCandidate, FoodCandidate};

/// Read-only food catalog
#[async_trait]
pub trait FoodCatalog: Send + Sync {
    /// The full catalog, fetched once per computation
    async fn all(&self) -> Result<Vec<FoodCandidate>>;
}

/// Read-only exercise catalog
#[async_trait]
pub trait ExerciseCatalog: Send + Sync {
    /// The full catalog, fetched once per computation
    async fn all(&self) -> Result<Vec<ExerciseCandidate>>;
}
