//! BodyFuel WASM Module
//!
//! This crate exposes the macro calculator to a web or mobile front-end.
//! Values cross the boundary as strings and JSON so the front-end never has
//! to mirror the Rust types.

use bodyfuel_shared::calculator::calculate_bmr_mifflin;
use bodyfuel_shared::{
    compute, validate_input, ActivityLevel, CalculatorForm, Goal, InputError, InputField, Labels,
    Locale, MacroResult, RawInput, Sex,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// JSON envelope returned by [`calculate_macros`]
#[derive(Debug, Serialize)]
struct CalculationResponse {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<MacroResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorBody>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
    fields: Vec<InputField>,
}

impl ErrorBody {
    fn from_error(err: &InputError, locale: Locale) -> Self {
        Self {
            code: err.code(),
            message: err.user_message(locale),
            fields: err.fields(),
        }
    }
}

#[derive(Debug, Serialize)]
struct OptionLabel {
    value: &'static str,
    label: &'static str,
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        format!(r#"{{"ok":false,"error":{{"code":"SERIALIZATION","message":"{}","fields":[]}}}}"#, e)
    })
}

fn parse_locale(locale: &str) -> Locale {
    locale.parse().unwrap_or_default()
}

fn parse_choice<T: std::str::FromStr>(value: &str, field: InputField) -> Result<T, InputError> {
    value.parse().map_err(|_| InputError::UnknownChoice {
        field,
        value: value.to_string(),
    })
}

fn calculate(
    sex: &str,
    age: &str,
    height_cm: &str,
    weight_kg: &str,
    activity: &str,
    goal: &str,
) -> Result<MacroResult, InputError> {
    let raw = RawInput {
        sex: parse_choice(sex, InputField::Sex)?,
        age: age.to_string(),
        height_cm: height_cm.to_string(),
        weight_kg: weight_kg.to_string(),
        activity: parse_choice(activity, InputField::Activity)?,
        goal: parse_choice(goal, InputField::Goal)?,
    };
    let input = validate_input(&raw)?;
    Ok(compute(&input))
}

/// Validate raw form values and compute the daily target
///
/// Returns `{"ok":true,"result":{...}}` or
/// `{"ok":false,"error":{"code":...,"message":...,"fields":[...]}}`.
#[wasm_bindgen]
pub fn calculate_macros(
    sex: &str,
    age: &str,
    height_cm: &str,
    weight_kg: &str,
    activity: &str,
    goal: &str,
    locale: &str,
) -> String {
    let response = match calculate(sex, age, height_cm, weight_kg, activity, goal) {
        Ok(result) => CalculationResponse {
            ok: true,
            result: Some(result),
            error: None,
        },
        Err(err) => CalculationResponse {
            ok: false,
            result: None,
            error: Some(ErrorBody::from_error(&err, parse_locale(locale))),
        },
    };
    to_json(&response)
}

/// Calculate BMR (Mifflin-St Jeor)
#[wasm_bindgen]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: i32, is_male: bool) -> f64 {
    let sex = if is_male { Sex::Male } else { Sex::Female };
    calculate_bmr_mifflin(weight_kg, height_cm, age_years, sex)
}

/// Calculate TDEE (Total Daily Energy Expenditure)
///
/// Returns NaN for an unknown activity level.
#[wasm_bindgen]
pub fn calculate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    is_male: bool,
    activity: &str,
) -> f64 {
    match activity.parse::<ActivityLevel>() {
        Ok(level) => calculate_bmr(weight_kg, height_cm, age_years, is_male) * level.factor(),
        Err(_) => f64::NAN,
    }
}

/// Options for a selector as a JSON list of `{value, label}`
///
/// `kind` is one of `sex`, `activity` or `goal`; anything else yields `[]`.
#[wasm_bindgen]
pub fn option_labels(kind: &str, locale: &str) -> String {
    let locale = parse_locale(locale);
    let options: Vec<OptionLabel> = match kind {
        "sex" => Sex::ALL
            .iter()
            .map(|v| OptionLabel { value: v.as_str(), label: v.label(locale) })
            .collect(),
        "activity" => ActivityLevel::ALL
            .iter()
            .map(|v| OptionLabel { value: v.as_str(), label: v.label(locale) })
            .collect(),
        "goal" => Goal::ALL
            .iter()
            .map(|v| OptionLabel { value: v.as_str(), label: v.label(locale) })
            .collect(),
        _ => Vec::new(),
    };
    to_json(&options)
}

/// Static screen strings (title, button, result rows, note) as a JSON object
#[wasm_bindgen]
pub fn screen_labels(locale: &str) -> String {
    to_json(Labels::for_locale(parse_locale(locale)))
}

/// Stateful calculator screen
#[wasm_bindgen]
pub struct MacroForm {
    inner: CalculatorForm,
    locale: Locale,
}

#[wasm_bindgen]
impl MacroForm {
    #[wasm_bindgen(constructor)]
    pub fn new(locale: &str) -> MacroForm {
        MacroForm {
            inner: CalculatorForm::new(),
            locale: parse_locale(locale),
        }
    }

    /// Returns false and keeps the current value if `value` is unknown
    pub fn set_sex(&mut self, value: &str) -> bool {
        match value.parse() {
            Ok(sex) => {
                self.inner.sex = sex;
                true
            }
            Err(_) => false,
        }
    }

    pub fn set_activity(&mut self, value: &str) -> bool {
        match value.parse() {
            Ok(activity) => {
                self.inner.activity = activity;
                true
            }
            Err(_) => false,
        }
    }

    pub fn set_goal(&mut self, value: &str) -> bool {
        match value.parse() {
            Ok(goal) => {
                self.inner.goal = goal;
                true
            }
            Err(_) => false,
        }
    }

    pub fn set_age(&mut self, value: String) {
        self.inner.age = value;
    }

    pub fn set_height(&mut self, value: String) {
        self.inner.height_cm = value;
    }

    pub fn set_weight(&mut self, value: String) {
        self.inner.weight_kg = value;
    }

    /// Run the calculation; true when a result is available
    pub fn submit(&mut self) -> bool {
        self.inner.submit().is_some()
    }

    pub fn result_json(&self) -> Option<String> {
        self.inner.result().map(|result| to_json(&result))
    }

    pub fn error_message(&self) -> Option<String> {
        self.inner.error_message(self.locale)
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }
}
