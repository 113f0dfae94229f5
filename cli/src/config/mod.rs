//! Configuration management for the BodyFuel CLI
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. An explicit file passed with `--config`
//! 4. Environment variables (prefix: BF__)
//!
//! Command-line flags are applied on top by the caller.

use anyhow::Result;
use bodyfuel_shared::{ActivityLevel, Goal, Locale, Sex};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Selector values used when a flag is not given
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub sex: Sex,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

/// Output rendering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub locale: Locale,
    /// Include BMR, TDEE and calorie accounting
    pub details: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON log lines instead of pretty output
    pub json: bool,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. `explicit_file`, which must exist when given
    /// 4. Environment variables with BF__ prefix
    pub fn load(explicit_file: Option<&Path>) -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let mut builder = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false));

        if let Some(path) = explicit_file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            // Override with environment variables (BF__ prefix)
            // e.g., BF__OUTPUT__FORMAT=json sets output.format
            .add_source(config::Environment::with_prefix("BF").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
