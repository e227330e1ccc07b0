//! Fitness Planner Recommendation Engine
//!
//! Converts a profile's biometric snapshot into calorie/macro targets and
//! ranked, goal-aware meal and workout suggestions, aggregated into one
//! personalized daily plan.
//!
//! ## Architecture
//!
//! The engine is a synchronous computation behind async read seams:
//! - Providers: read-only traits for the stores supplying snapshots,
//!   catalogs and logged intake (implemented by the caller)
//! - Services: the biometric-update path and the recommendation path
//! - The `fitness-planner-shared` crate holds the pure formulas and types
//!
//! The engine persists nothing itself, issues no retries, and reads every
//! input once at the start of a computation.

pub mod config;
pub mod error;
pub mod providers;
pub mod services;
