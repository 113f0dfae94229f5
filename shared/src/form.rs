//! Calculator form state
//!
//! Holds what a single calculator screen shows: the current field values and
//! the outcome of the last submission. Every submission replaces the previous
//! outcome, so a stale result is never shown next to a new error.

use crate::calculator::compute;
use crate::errors::InputError;
use crate::labels::Locale;
use crate::models::{ActivityLevel, Goal, MacroResult, Sex};
use crate::validation::{validate_input, RawInput};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorForm {
    pub sex: Sex,
    pub age: String,
    pub height_cm: String,
    pub weight_kg: String,
    pub activity: ActivityLevel,
    pub goal: Goal,
    result: Option<MacroResult>,
    error: Option<InputError>,
}

impl CalculatorForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the current values and compute a new result
    ///
    /// On failure the error is stored and any previous result is cleared.
    pub fn submit(&mut self) -> Option<MacroResult> {
        let raw = RawInput {
            sex: self.sex,
            age: self.age.clone(),
            height_cm: self.height_cm.clone(),
            weight_kg: self.weight_kg.clone(),
            activity: self.activity,
            goal: self.goal,
        };

        match validate_input(&raw) {
            Ok(input) => {
                self.error = None;
                self.result = Some(compute(&input));
            }
            Err(err) => {
                self.error = Some(err);
                self.result = None;
            }
        }
        self.result
    }

    /// Restore default selections and clear all fields and outcomes
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn result(&self) -> Option<MacroResult> {
        self.result
    }

    pub fn error(&self) -> Option<&InputError> {
        self.error.as_ref()
    }

    pub fn error_message(&self, locale: Locale) -> Option<String> {
        self.error.as_ref().map(|err| err.user_message(locale))
    }
}
