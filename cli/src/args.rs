//! Command-line flags.

use crate::config::OutputFormat;
use bodyfuel_shared::Locale;
use clap::Parser;
use std::path::PathBuf;

/// BodyFuel: daily calorie and macro calculator (Mifflin-St Jeor).
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "bodyfuel", version, about)]
pub struct Args {
    /// Sex: male or female.
    #[arg(long)]
    pub sex: Option<String>,

    /// Age in whole years (10-80).
    #[arg(short, long, env = "BODYFUEL_AGE", allow_hyphen_values = true)]
    pub age: Option<String>,

    /// Height in centimeters (120-230).
    #[arg(short = 'H', long, env = "BODYFUEL_HEIGHT", allow_hyphen_values = true)]
    pub height: Option<String>,

    /// Weight in kilograms (30-200).
    #[arg(short, long, env = "BODYFUEL_WEIGHT", allow_hyphen_values = true)]
    pub weight: Option<String>,

    /// Activity level: low, medium or high.
    #[arg(long)]
    pub activity: Option<String>,

    /// Goal: cut, maintain or bulk.
    #[arg(short, long)]
    pub goal: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Label language: en or ar.
    #[arg(short, long, value_parser = parse_locale)]
    pub locale: Option<Locale>,

    /// Show BMR, TDEE and calorie accounting.
    #[arg(short, long)]
    pub details: bool,

    /// Extra TOML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parse CLI arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "bodyfuel", "--sex", "female", "--age", "30", "--height", "160", "--weight", "55",
            "--activity", "low", "--goal", "cut", "--format", "json", "--locale", "ar", "--details",
        ])
        .unwrap();
        assert_eq!(args.sex.as_deref(), Some("female"));
        assert_eq!(args.age.as_deref(), Some("30"));
        assert_eq!(args.height.as_deref(), Some("160"));
        assert_eq!(args.weight.as_deref(), Some("55"));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.locale, Some(Locale::Ar));
        assert!(args.details);
    }

    #[test]
    fn accepts_negative_numbers_as_values() {
        let args = Args::try_parse_from(["bodyfuel", "--age", "-5"]).unwrap();
        assert_eq!(args.age.as_deref(), Some("-5"));
    }

    #[test]
    fn rejects_unknown_locale() {
        assert!(Args::try_parse_from(["bodyfuel", "--locale", "fr"]).is_err());
    }
}
