//! Configuration for the recommendation engine
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FP__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub recommendations: RecommendationConfig,
}

/// Recommendation tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Result limit for the breakfast/lunch/dinner slots
    pub meal_limit: usize,
    /// Result limit for the snack slot
    pub snack_limit: usize,
    /// Result limit for workout suggestions
    pub workout_limit: usize,
    /// Assumed workout duration for calorie-burn estimates
    pub workout_duration_min: i32,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            meal_limit: 5,
            snack_limit: 3,
            workout_limit: 5,
            workout_duration_min: 30,
        }
    }
}

impl EngineConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FP__ prefix
    ///    e.g., FP__RECOMMENDATIONS__MEAL_LIMIT=10
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&EngineConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            .add_source(config::Environment::with_prefix("FP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
