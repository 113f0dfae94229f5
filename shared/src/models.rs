//! Domain types for the macro calculator
//!
//! All types are small immutable values, built per calculation and thrown
//! away afterwards. Inputs are always metric.

use crate::labels::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

// ============================================================================
// Selectors
// ============================================================================

/// Biological sex, used only for the BMR constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    /// All values in display order
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// Additive constant of the Mifflin-St Jeor equation
    pub fn bmr_offset(&self) -> f64 {
        match self {
            Sex::Male => 5.0,
            Sex::Female => -161.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "male" | "m" | "man" => Ok(Sex::Male),
            "female" | "f" | "woman" => Ok(Sex::Female),
            _ => Sex::ALL
                .into_iter()
                .find(|sex| sex.label(Locale::Ar) == trimmed)
                .ok_or_else(|| format!("Unknown sex: {}", s)),
        }
    }
}

/// Activity level with its TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Low,
    /// Regular training a few days a week
    #[default]
    Medium,
    /// Hard training most days
    High,
}

impl ActivityLevel {
    /// All values in display order
    pub const ALL: [ActivityLevel; 3] = [ActivityLevel::Low, ActivityLevel::Medium, ActivityLevel::High];

    /// Multiplier applied to BMR
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Low => 1.2,
            ActivityLevel::Medium => 1.55,
            ActivityLevel::High => 1.75,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "low",
            ActivityLevel::Medium => "medium",
            ActivityLevel::High => "high",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "low" | "sedentary" | "light" => Ok(ActivityLevel::Low),
            "medium" | "moderate" | "moderately_active" => Ok(ActivityLevel::Medium),
            "high" | "active" | "very_active" => Ok(ActivityLevel::High),
            _ => ActivityLevel::ALL
                .into_iter()
                .find(|level| level.label(Locale::Ar) == trimmed)
                .ok_or_else(|| format!("Unknown activity level: {}", s)),
        }
    }
}

/// Body composition goal with its calorie adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Cut,
    #[default]
    Maintain,
    Bulk,
}

impl Goal {
    /// All values in display order
    pub const ALL: [Goal; 3] = [Goal::Cut, Goal::Maintain, Goal::Bulk];

    /// Calories added to TDEE (negative for a deficit)
    pub fn kcal_adjust(&self) -> i32 {
        match self {
            Goal::Cut => -400,
            Goal::Maintain => 0,
            Goal::Bulk => 300,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Cut => "cut",
            Goal::Maintain => "maintain",
            Goal::Bulk => "bulk",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "cut" | "lose" | "loss" => Ok(Goal::Cut),
            "maintain" | "maintenance" => Ok(Goal::Maintain),
            "bulk" | "gain" => Ok(Goal::Bulk),
            _ => Goal::ALL
                .into_iter()
                .find(|goal| goal.label(Locale::Ar) == trimmed)
                .ok_or_else(|| format!("Unknown goal: {}", s)),
        }
    }
}

// ============================================================================
// Calculation Input / Output
// ============================================================================

/// Validated input of a single calculation
///
/// Build it through [`crate::validation::validate_input`] or
/// [`CalculationInput::new`]; the range attributes mirror
/// [`crate::validation::AGE_RANGE`] and friends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct CalculationInput {
    pub sex: Sex,
    #[validate(range(min = 10, max = 80))]
    pub age_years: i32,
    #[validate(range(min = 120.0, max = 230.0))]
    pub height_cm: f64,
    #[validate(range(min = 30.0, max = 200.0))]
    pub weight_kg: f64,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

/// Daily calorie and macronutrient target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacroResult {
    /// Daily calories (kcal), never below 1200
    pub calories: i32,
    pub protein_grams: i32,
    pub fat_grams: i32,
    pub carb_grams: i32,
}
