//! BodyFuel Shared Library
//!
//! This crate contains the macro calculator core, its domain types, input
//! validation and the static labels used by the CLI and WASM front-ends.

pub mod calculator;
pub mod errors;
pub mod form;
pub mod labels;
pub mod models;
pub mod validation;

// Re-export commonly used items
pub use calculator::{compute, compute_breakdown, MacroBreakdown};
pub use errors::*;
pub use form::CalculatorForm;
pub use labels::{Labels, Locale};
pub use models::*;
pub use validation::{validate_input, RawInput};
