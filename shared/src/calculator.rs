//! Macro calculator
//!
//! Turns a validated [`CalculationInput`] into a daily calorie and macro
//! target. Everything in here is a pure function over the validated domain:
//! no I/O, no clock, no failure path.
//!
//! Rounding uses [`f64::round`] (half away from zero) for every integer
//! output. All rounded quantities are non-negative, so this is the same as
//! rounding half up.

use crate::models::{CalculationInput, MacroResult, Sex};
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// Constants
// ============================================================================

/// Minimum daily calorie target, applied after the goal adjustment
pub const CALORIE_FLOOR: f64 = 1200.0;

/// Protein target per kilogram of body weight
pub const PROTEIN_GRAMS_PER_KG: f64 = 2.0;

/// Fat target per kilogram of body weight
pub const FAT_GRAMS_PER_KG: f64 = 1.0;

pub const KCAL_PER_GRAM_PROTEIN: i32 = 4;
pub const KCAL_PER_GRAM_FAT: i32 = 9;
pub const KCAL_PER_GRAM_CARB: i32 = 4;

// ============================================================================
// BMR and TDEE
// ============================================================================

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: i32, sex: Sex) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64 + sex.bmr_offset()
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × activity factor
pub fn calculate_tdee(input: &CalculationInput) -> f64 {
    let bmr = calculate_bmr_mifflin(input.weight_kg, input.height_cm, input.age_years, input.sex);
    bmr * input.activity.factor()
}

// ============================================================================
// Macro Target
// ============================================================================

/// Macro target together with the intermediate values it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    pub bmr: f64,
    pub tdee: f64,
    /// TDEE plus the goal adjustment, before the calorie floor
    pub adjusted_calories: f64,
    /// Whether the calorie floor replaced the adjusted value
    pub floor_applied: bool,
    pub protein_kcal: i32,
    pub fat_kcal: i32,
    pub carbs_kcal: i32,
    pub result: MacroResult,
}

/// Compute the daily target and keep the intermediate values
pub fn compute_breakdown(input: &CalculationInput) -> MacroBreakdown {
    let bmr = calculate_bmr_mifflin(input.weight_kg, input.height_cm, input.age_years, input.sex);
    let tdee = bmr * input.activity.factor();
    let adjusted_calories = tdee + input.goal.kcal_adjust() as f64;
    let calories = adjusted_calories.max(CALORIE_FLOOR).round() as i32;

    let protein_grams = (PROTEIN_GRAMS_PER_KG * input.weight_kg).max(0.0).round() as i32;
    let fat_grams = (FAT_GRAMS_PER_KG * input.weight_kg).max(0.0).round() as i32;

    // Carbs fill whatever the rounded protein and fat leave over
    let protein_kcal = protein_grams * KCAL_PER_GRAM_PROTEIN;
    let fat_kcal = fat_grams * KCAL_PER_GRAM_FAT;
    let carbs_kcal = (calories - (protein_kcal + fat_kcal)).max(0);
    let carb_grams = (carbs_kcal as f64 / KCAL_PER_GRAM_CARB as f64).round() as i32;

    let floor_applied = adjusted_calories < CALORIE_FLOOR;

    debug!(
        bmr,
        tdee,
        adjusted_calories,
        floor_applied,
        calories,
        "Computed macro target"
    );

    MacroBreakdown {
        bmr,
        tdee,
        adjusted_calories,
        floor_applied,
        protein_kcal,
        fat_kcal,
        carbs_kcal,
        result: MacroResult {
            calories,
            protein_grams,
            fat_grams,
            carb_grams,
        },
    }
}

/// Compute the daily calorie and macro target for a validated input
pub fn compute(input: &CalculationInput) -> MacroResult {
    compute_breakdown(input).result
}
