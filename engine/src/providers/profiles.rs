//! Profile directory seam

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Read-only access to user profiles
#[async_trait]
pub trait ProfileDirectory: Send + Sync {
    /// Whether a profile exists
    async fn exists(&self, profile_id: Uuid) -> Result<bool>;
}
