//! Input validation
//!
//! Raw form text goes through two stages before it may reach the calculator:
//! parsing (is it a number at all?) and range checking (is it a number we
//! accept?). Range checks use the `validator` derive on [`CalculationInput`].

use crate::errors::{InputError, InputField};
use crate::models::{ActivityLevel, CalculationInput, Goal, Sex};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::debug;
use validator::Validate;

/// Accepted age in whole years
pub const AGE_RANGE: RangeInclusive<i32> = 10..=80;

/// Accepted height in centimeters
pub const HEIGHT_CM_RANGE: RangeInclusive<f64> = 120.0..=230.0;

/// Accepted weight in kilograms
pub const WEIGHT_KG_RANGE: RangeInclusive<f64> = 30.0..=200.0;

/// Form values as entered by the user
///
/// Selectors always hold a valid choice, numeric fields are free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    pub sex: Sex,
    pub age: String,
    pub height_cm: String,
    pub weight_kg: String,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

/// Parse an age in whole years
pub fn parse_age(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}

/// Parse a height in centimeters
pub fn parse_height_cm(raw: &str) -> Option<f64> {
    parse_real(raw)
}

/// Parse a weight in kilograms
pub fn parse_weight_kg(raw: &str) -> Option<f64> {
    parse_real(raw)
}

/// Parse a finite real number, accepting a decimal comma
fn parse_real(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Validate raw form input into a [`CalculationInput`]
///
/// Reports every unparsable field at once; range problems are only checked
/// once all three numbers parse.
pub fn validate_input(raw: &RawInput) -> Result<CalculationInput, InputError> {
    let age = parse_age(&raw.age);
    let height = parse_height_cm(&raw.height_cm);
    let weight = parse_weight_kg(&raw.weight_kg);

    let (age_years, height_cm, weight_kg) = match (age, height, weight) {
        (Some(a), Some(h), Some(w)) => (a, h, w),
        _ => {
            let mut fields = Vec::new();
            if age.is_none() {
                fields.push(InputField::Age);
            }
            if height.is_none() {
                fields.push(InputField::Height);
            }
            if weight.is_none() {
                fields.push(InputField::Weight);
            }
            debug!(?fields, "Rejected unparsable input");
            return Err(InputError::InvalidNumber { fields });
        }
    };

    CalculationInput::new(
        raw.sex,
        age_years,
        height_cm,
        weight_kg,
        raw.activity,
        raw.goal,
    )
}

impl CalculationInput {
    /// Build an input from typed values, enforcing the accepted ranges
    pub fn new(
        sex: Sex,
        age_years: i32,
        height_cm: f64,
        weight_kg: f64,
        activity: ActivityLevel,
        goal: Goal,
    ) -> Result<Self, InputError> {
        if !height_cm.is_finite() || !weight_kg.is_finite() {
            let mut fields = Vec::new();
            if !height_cm.is_finite() {
                fields.push(InputField::Height);
            }
            if !weight_kg.is_finite() {
                fields.push(InputField::Weight);
            }
            return Err(InputError::InvalidNumber { fields });
        }

        let input = CalculationInput {
            sex,
            age_years,
            height_cm,
            weight_kg,
            activity,
            goal,
        };

        input.validate().map_err(|errors| {
            let mut fields: Vec<InputField> = errors
                .field_errors()
                .keys()
                .filter_map(|key| InputField::from_key(key))
                .collect();
            fields.sort();
            debug!(?fields, "Rejected out-of-range input");
            InputError::OutOfRange { fields }
        })?;

        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn raw(age: &str, height: &str, weight: &str) -> RawInput {
        RawInput {
            age: age.to_string(),
            height_cm: height.to_string(),
            weight_kg: weight.to_string(),
            ..RawInput::default()
        }
    }

    #[test]
    fn test_valid_input() {
        let input = validate_input(&raw("25", "180", "80")).unwrap();
        assert_eq!(input.age_years, 25);
        assert_eq!(input.height_cm, 180.0);
        assert_eq!(input.weight_kg, 80.0);
        assert_eq!(input.sex, Sex::Male);
        assert_eq!(input.activity, ActivityLevel::Medium);
        assert_eq!(input.goal, Goal::Maintain);
    }

    #[rstest]
    #[case("10", "120.0", "30.0")]
    #[case("80", "230.0", "200.0")]
    #[case(" 42 ", "175,5", "72.25")]
    fn test_accepts_inclusive_bounds(#[case] age: &str, #[case] height: &str, #[case] weight: &str) {
        assert!(validate_input(&raw(age, height, weight)).is_ok());
    }

    #[rstest]
    #[case("9", "170", "70", InputField::Age)]
    #[case("81", "170", "70", InputField::Age)]
    #[case("30", "119.9", "70", InputField::Height)]
    #[case("30", "230.1", "70", InputField::Height)]
    #[case("30", "170", "29.9", InputField::Weight)]
    #[case("30", "170", "200.1", InputField::Weight)]
    fn test_rejects_out_of_range(
        #[case] age: &str,
        #[case] height: &str,
        #[case] weight: &str,
        #[case] field: InputField,
    ) {
        assert_eq!(
            validate_input(&raw(age, height, weight)),
            Err(InputError::OutOfRange { fields: vec![field] })
        );
    }

    #[test]
    fn test_reports_all_out_of_range_fields() {
        assert_eq!(
            validate_input(&raw("9", "119.9", "200.1")),
            Err(InputError::OutOfRange {
                fields: vec![InputField::Age, InputField::Height, InputField::Weight],
            })
        );
    }

    #[rstest]
    #[case("", "180", "80", vec![InputField::Age])]
    #[case("25.5", "180", "80", vec![InputField::Age])]
    #[case("25", "abc", "", vec![InputField::Height, InputField::Weight])]
    #[case("x", "NaN", "inf", vec![InputField::Age, InputField::Height, InputField::Weight])]
    fn test_rejects_unparsable(
        #[case] age: &str,
        #[case] height: &str,
        #[case] weight: &str,
        #[case] fields: Vec<InputField>,
    ) {
        assert_eq!(
            validate_input(&raw(age, height, weight)),
            Err(InputError::InvalidNumber { fields })
        );
    }

    #[test]
    fn test_parse_errors_win_over_range_errors() {
        // Age is out of range but weight is not a number: parsing is reported
        assert_eq!(
            validate_input(&raw("5", "170", "heavy")),
            Err(InputError::InvalidNumber {
                fields: vec![InputField::Weight],
            })
        );
    }

    #[test]
    fn test_new_rejects_non_finite() {
        let err = CalculationInput::new(
            Sex::Female,
            30,
            f64::NAN,
            60.0,
            ActivityLevel::Low,
            Goal::Cut,
        )
        .unwrap_err();
        assert_eq!(err, InputError::InvalidNumber { fields: vec![InputField::Height] });
    }

    #[test]
    fn test_ranges_match_constants() {
        let edge = |age, height, weight| {
            CalculationInput::new(Sex::Male, age, height, weight, ActivityLevel::Low, Goal::Bulk)
        };
        assert!(edge(*AGE_RANGE.start(), *HEIGHT_CM_RANGE.start(), *WEIGHT_KG_RANGE.start()).is_ok());
        assert!(edge(*AGE_RANGE.end(), *HEIGHT_CM_RANGE.end(), *WEIGHT_KG_RANGE.end()).is_ok());
        assert!(edge(*AGE_RANGE.start() - 1, 170.0, 70.0).is_err());
        assert!(edge(*AGE_RANGE.end() + 1, 170.0, 70.0).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_ranges_accepted(
            age in 10i32..=80,
            height in 120.0f64..=230.0,
            weight in 30.0f64..=200.0
        ) {
            let result = validate_input(&raw(&age.to_string(), &height.to_string(), &weight.to_string()));
            prop_assert!(result.is_ok(), "{} / {} / {} should be valid: {:?}", age, height, weight, result);
        }

        #[test]
        fn prop_weight_above_max_rejected(weight in 200.01f64..1000.0) {
            prop_assert!(validate_input(&raw("30", "170", &weight.to_string())).is_err());
        }

        #[test]
        fn prop_height_below_min_rejected(height in 0.0f64..119.99) {
            prop_assert!(validate_input(&raw("30", &height.to_string(), "70")).is_err());
        }
    }
}
