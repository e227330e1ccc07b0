//! Engine services
//!
//! Business logic over the provider seams: the biometric-update path and
//! the recommendation path.

pub mod biometrics;
pub mod meal_ranker;
pub mod recommendation;
pub mod workout_ranker;

pub use biometrics::BiometricService;
pub use recommendation::RecommendationService;
