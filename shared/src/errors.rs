//! Error types for the BodyFuel calculator
//!
//! The calculator itself cannot fail; everything here describes input that
//! was rejected before it reached the core.

use crate::labels::{Labels, Locale};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A field of the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Sex,
    Age,
    Height,
    Weight,
    Activity,
    Goal,
}

impl InputField {
    /// Stable machine-readable key
    pub fn key(&self) -> &'static str {
        match self {
            InputField::Sex => "sex",
            InputField::Age => "age",
            InputField::Height => "height",
            InputField::Weight => "weight",
            InputField::Activity => "activity",
            InputField::Goal => "goal",
        }
    }

    /// Map a struct field name of `CalculationInput` back to the form field
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "sex" => Some(InputField::Sex),
            "age" | "age_years" => Some(InputField::Age),
            "height" | "height_cm" => Some(InputField::Height),
            "weight" | "weight_kg" => Some(InputField::Weight),
            "activity" => Some(InputField::Activity),
            "goal" => Some(InputField::Goal),
            _ => None,
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

fn join_fields(fields: &[InputField]) -> String {
    fields
        .iter()
        .map(InputField::key)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rejected calculator input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid number: {}", join_fields(.fields))]
    InvalidNumber { fields: Vec<InputField> },

    #[error("Value out of range: {}", join_fields(.fields))]
    OutOfRange { fields: Vec<InputField> },

    #[error("Unknown {field} value: {value}")]
    UnknownChoice { field: InputField, value: String },
}

impl InputError {
    /// Error code for machine consumers (WASM/JSON output)
    pub fn code(&self) -> &'static str {
        match self {
            InputError::InvalidNumber { .. } => "INVALID_NUMBER",
            InputError::OutOfRange { .. } => "OUT_OF_RANGE",
            InputError::UnknownChoice { .. } => "UNKNOWN_CHOICE",
        }
    }

    /// Fields the error refers to
    pub fn fields(&self) -> Vec<InputField> {
        match self {
            InputError::InvalidNumber { fields } | InputError::OutOfRange { fields } => {
                fields.clone()
            }
            InputError::UnknownChoice { field, .. } => vec![*field],
        }
    }

    /// Format as a message suitable for showing next to the form
    pub fn user_message(&self, locale: Locale) -> String {
        let labels = Labels::for_locale(locale);
        match self {
            InputError::InvalidNumber { .. } => labels.invalid_number_message.to_string(),
            InputError::OutOfRange { .. } => labels.out_of_range_message.to_string(),
            InputError::UnknownChoice { field, value } => {
                format!("{}: {} \"{}\"", field.label(locale), labels.unknown_value, value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_round_trip() {
        for field in [
            InputField::Sex,
            InputField::Age,
            InputField::Height,
            InputField::Weight,
            InputField::Activity,
            InputField::Goal,
        ] {
            assert_eq!(InputField::from_key(field.key()), Some(field));
        }
        assert_eq!(InputField::from_key("height_cm"), Some(InputField::Height));
        assert_eq!(InputField::from_key("bogus"), None);
    }

    #[test]
    fn test_display_lists_fields() {
        let err = InputError::OutOfRange {
            fields: vec![InputField::Age, InputField::Weight],
        };
        assert_eq!(err.to_string(), "Value out of range: age, weight");
        assert_eq!(err.code(), "OUT_OF_RANGE");
    }

    #[test]
    fn test_user_messages() {
        let err = InputError::InvalidNumber {
            fields: vec![InputField::Height],
        };
        assert_eq!(
            err.user_message(Locale::En),
            "Please enter valid numbers for age/height/weight."
        );
        assert_eq!(
            err.user_message(Locale::Ar),
            "رجاءً أدخل أرقام صحيحة في العمر/الطول/الوزن."
        );

        let err = InputError::UnknownChoice {
            field: InputField::Goal,
            value: "shred".to_string(),
        };
        assert_eq!(err.fields(), vec![InputField::Goal]);
        assert_eq!(err.user_message(Locale::En), "Goal: unknown value \"shred\"");
    }
}
