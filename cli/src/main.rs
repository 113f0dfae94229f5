//! BodyFuel CLI
//!
//! Computes a daily calorie and macronutrient target from the command line.
//! Results go to stdout; logs and error messages go to stderr.

use bodyfuel_cli::{app, args::Args, config::AppConfig, error::EXIT_FAILURE};
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Load configuration
    let config = match AppConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    // Initialize tracing
    init_tracing(&config);

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        "Starting BodyFuel"
    );

    match app::run(&args, &config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            warn!(error = %err, "Calculation failed");
            eprintln!("{}", err.user_message(app::resolve_locale(&args, &config)));
            ExitCode::from(err.exit_code())
        }
    }
}

/// Initialize tracing/logging on stderr
fn init_tracing(config: &AppConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if AppConfig::is_production() {
            "bodyfuel_cli=warn,bodyfuel_shared=warn".into()
        } else {
            "bodyfuel_cli=info,bodyfuel_shared=warn".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config.logging.json || AppConfig::is_production() {
        // JSON logging (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}
