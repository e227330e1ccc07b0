//! Engine error handling
//!
//! Validation and not-found failures abort the whole plan computation and
//! propagate unmodified to the caller. An empty candidate pool is not an
//! error: it degrades to an empty recommendation list inside an
//! otherwise-successful result.

use fitness_planner_shared::errors::AppError;
use thiserror::Error;

/// Engine error type
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Provider error")]
    Provider(#[from] anyhow::Error),
}

impl From<AppError> for EngineError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation(msg) => EngineError::Validation(msg),
            AppError::NotFound(msg) => EngineError::NotFound(msg),
        }
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
