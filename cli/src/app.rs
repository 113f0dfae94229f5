//! Application runner: merges flags with configuration, validates, computes
//! and renders.

use crate::args::Args;
use crate::config::{AppConfig, OutputFormat};
use crate::error::CliError;
use crate::output;
use bodyfuel_shared::{compute_breakdown, validate_input, InputError, InputField, Locale, RawInput};
use std::str::FromStr;
use tracing::{debug, info};

/// Locale chosen by flag, falling back to configuration
pub fn resolve_locale(args: &Args, config: &AppConfig) -> Locale {
    args.locale.unwrap_or(config.output.locale)
}

fn choice<T: FromStr>(flag: Option<&str>, default: T, field: InputField) -> Result<T, InputError> {
    match flag {
        Some(value) => value.parse().map_err(|_| InputError::UnknownChoice {
            field,
            value: value.to_string(),
        }),
        None => Ok(default),
    }
}

/// Build the raw form input from flags and configured defaults
///
/// A missing numeric flag becomes an empty field, which validation reports
/// like any other unparsable number.
pub fn raw_input(args: &Args, config: &AppConfig) -> Result<RawInput, InputError> {
    Ok(RawInput {
        sex: choice(args.sex.as_deref(), config.defaults.sex, InputField::Sex)?,
        age: args.age.clone().unwrap_or_default(),
        height_cm: args.height.clone().unwrap_or_default(),
        weight_kg: args.weight.clone().unwrap_or_default(),
        activity: choice(args.activity.as_deref(), config.defaults.activity, InputField::Activity)?,
        goal: choice(args.goal.as_deref(), config.defaults.goal, InputField::Goal)?,
    })
}

/// Run one calculation and return the rendered output
pub fn run(args: &Args, config: &AppConfig) -> Result<String, CliError> {
    let locale = resolve_locale(args, config);
    let format = args.format.unwrap_or(config.output.format);
    let details = args.details || config.output.details;

    let raw = raw_input(args, config)?;
    debug!(?raw, "Collected input");

    let input = validate_input(&raw)?;
    let breakdown = compute_breakdown(&input);

    info!(
        sex = %input.sex,
        activity = %input.activity,
        goal = %input.goal,
        calories = breakdown.result.calories,
        "Calculated daily target"
    );

    let rendered = match format {
        OutputFormat::Text => output::render_text(&breakdown, locale, details),
        OutputFormat::Json => output::render_json(&breakdown, details)?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodyfuel_shared::{ActivityLevel, Goal, Sex};
    use rstest::rstest;

    fn args(age: &str, height: &str, weight: &str) -> Args {
        Args {
            age: Some(age.to_string()),
            height: Some(height.to_string()),
            weight: Some(weight.to_string()),
            ..Args::default()
        }
    }

    #[test]
    fn test_flags_override_config_defaults() {
        let mut config = AppConfig::default();
        config.defaults.goal = Goal::Bulk;
        config.defaults.sex = Sex::Female;

        let mut flags = args("25", "180", "80");
        flags.sex = Some("male".to_string());
        let raw = raw_input(&flags, &config).unwrap();
        assert_eq!(raw.sex, Sex::Male);
        assert_eq!(raw.goal, Goal::Bulk);
        assert_eq!(raw.activity, ActivityLevel::Medium);
    }

    #[test]
    fn test_unknown_choice() {
        let mut flags = args("25", "180", "80");
        flags.activity = Some("extreme".to_string());
        let err = raw_input(&flags, &AppConfig::default()).unwrap_err();
        assert_eq!(
            err,
            InputError::UnknownChoice {
                field: InputField::Activity,
                value: "extreme".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_numbers_are_invalid() {
        let err = run(&Args::default(), &AppConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Input(InputError::InvalidNumber { ref fields }) if fields.len() == 3
        ));
    }

    #[rstest]
    #[case(OutputFormat::Text, "Calories  2798 kcal")]
    #[case(OutputFormat::Json, "\"calories\": 2798")]
    fn test_run_formats(#[case] format: OutputFormat, #[case] expected: &str) {
        let mut flags = args("25", "180", "80");
        flags.format = Some(format);
        let output = run(&flags, &AppConfig::default()).unwrap();
        assert!(output.contains(expected), "{}", output);
    }

    #[test]
    fn test_config_enables_details_and_locale() {
        let mut config = AppConfig::default();
        config.output.details = true;
        config.output.locale = Locale::Ar;
        let flags = args("25", "180", "80");
        assert_eq!(resolve_locale(&flags, &config), Locale::Ar);
        let output = run(&flags, &config).unwrap();
        assert!(output.contains("BMR   1805 kcal"));
        assert!(output.contains("السعرات"));
    }
}
