//! Macro allocation module
//!
//! Derives protein/carb/fat gram targets from a calorie target.
//!
//! Two allocators coexist on purpose, mirroring the two call paths that use
//! them: the goal-keyed table (recommendation path, floored grams) and the
//! BMI-band table (plan-selection path, fractional grams). Their ratios are
//! deliberately not unified.

use crate::goals::Goal;
use serde::{Deserialize, Serialize};

/// Energy density of protein and carbohydrate, kcal per gram
const KCAL_PER_G_PROTEIN_CARB: f64 = 4.0;
/// Energy density of fat, kcal per gram
const KCAL_PER_G_FAT: f64 = 9.0;

/// Daily macro targets derived from a calorie target
///
/// A derived value object: recomputed on every call, never persisted by the
/// engine itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub calories_kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Allocate macros for a calorie target by goal (recommendation path)
///
/// Gram targets are floored to whole grams.
pub fn macro_targets(calories_kcal: f64, goal: Goal) -> MacroTargets {
    let (protein_ratio, carbs_ratio, fat_ratio) = match goal {
        // High protein & carbs
        Goal::MuscleGain => (0.30, 0.45, 0.25),
        // High protein, moderate fat
        Goal::WeightLoss => (0.35, 0.30, 0.35),
        // Balanced
        Goal::Maintenance => (0.25, 0.45, 0.30),
    };

    MacroTargets {
        calories_kcal,
        protein_g: (calories_kcal * protein_ratio / KCAL_PER_G_PROTEIN_CARB).floor(),
        carbs_g: (calories_kcal * carbs_ratio / KCAL_PER_G_PROTEIN_CARB).floor(),
        fat_g: (calories_kcal * fat_ratio / KCAL_PER_G_FAT).floor(),
    }
}

/// Allocate macros for a calorie target from a BMI value, resolving the goal
/// first (the aggregator's entry point)
pub fn macro_targets_for_bmi(calories_kcal: f64, bmi: f64) -> MacroTargets {
    macro_targets(calories_kcal, Goal::for_bmi(bmi))
}

/// Carb/protein/fat energy ratios by BMI band (plan-selection path)
///
/// Carb share tapers and fat share grows as BMI rises; every row sums to 1.
pub fn macro_split_for_band(bmi: f64) -> (f64, f64, f64) {
    match bmi {
        b if b < 16.0 => (0.65, 0.20, 0.15),
        b if b < 17.0 => (0.62, 0.20, 0.18),
        b if b < 18.0 => (0.60, 0.20, 0.20),
        b if b < 18.5 => (0.58, 0.20, 0.22),
        b if b < 19.5 => (0.55, 0.20, 0.25),
        b if b < 21.0 => (0.53, 0.20, 0.27),
        b if b < 23.0 => (0.50, 0.22, 0.28),
        b if b < 25.0 => (0.47, 0.23, 0.30),
        b if b < 27.0 => (0.45, 0.25, 0.30),
        b if b < 29.0 => (0.42, 0.26, 0.32),
        b if b < 30.0 => (0.40, 0.28, 0.32),
        b if b < 32.0 => (0.38, 0.30, 0.32),
        b if b < 35.0 => (0.35, 0.30, 0.35),
        _ => (0.32, 0.33, 0.35),
    }
}

/// Allocate macros for a calorie target by BMI band (plan-selection path)
///
/// Unlike the goal-keyed allocator, gram targets keep their fractional part.
pub fn band_macro_targets(calories_kcal: f64, bmi: f64) -> MacroTargets {
    let (carbs_ratio, protein_ratio, fat_ratio) = macro_split_for_band(bmi);
    MacroTargets {
        calories_kcal,
        protein_g: calories_kcal * protein_ratio / KCAL_PER_G_PROTEIN_CARB,
        carbs_g: calories_kcal * carbs_ratio / KCAL_PER_G_PROTEIN_CARB,
        fat_g: calories_kcal * fat_ratio / KCAL_PER_G_FAT,
    }
}
