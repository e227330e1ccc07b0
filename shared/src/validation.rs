//! Input validation functions
//!
//! Validation utilities for the raw biometric inputs the engine accepts.

use crate::errors::AppError;

/// Validate a height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), AppError> {
    if !height_cm.is_finite() {
        return Err(AppError::Validation(
            "Height must be a valid number".to_string(),
        ));
    }
    if height_cm <= 0.0 {
        return Err(AppError::Validation(
            "Height must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Validate a weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), AppError> {
    if !weight_kg.is_finite() {
        return Err(AppError::Validation(
            "Weight must be a valid number".to_string(),
        ));
    }
    if weight_kg <= 0.0 {
        return Err(AppError::Validation(
            "Weight must be positive".to_string(),
        ));
    }
    Ok(())
}
