//! Provider seams for the engine's external collaborators
//!
//! The engine persists nothing and issues no queries of its own; everything
//! it reads arrives through these traits, implemented by the caller over
//! whatever store it uses. Every read is a point-in-time snapshot taken once
//! at the start of a computation — the engine never re-reads mid-flight and
//! performs no locking.

pub mod biometrics;
pub mod catalog;
pub mod intake;
pub mod profiles;

pub use biometrics::{NewBiometricSnapshot, SnapshotStore};
pub use catalog::{ExerciseCatalog, FoodCatalog};
pub use intake::{IntakeItem, IntakeLog, PlanIntake};
pub use profiles::ProfileDirectory;
