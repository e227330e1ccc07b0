//! Error types for the fitness planner domain calculations

use thiserror::Error;

/// Domain-level error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}
