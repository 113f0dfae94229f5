//! CLI error handling
//!
//! Maps failures to a message for stderr and a process exit code.

use bodyfuel_shared::{InputError, Locale};
use thiserror::Error;

/// Exit code for rejected input
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Exit code for everything else
pub const EXIT_FAILURE: u8 = 1;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Input(_) => EXIT_INVALID_INPUT,
            CliError::Serialization(_) => EXIT_FAILURE,
        }
    }

    /// Message shown to the user, localized where a translation exists
    pub fn user_message(&self, locale: Locale) -> String {
        match self {
            CliError::Input(err) => err.user_message(locale),
            other => other.to_string(),
        }
    }
}
