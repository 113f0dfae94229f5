//! BodyFuel CLI library
//!
//! Command-line front-end for the macro calculator in `bodyfuel-shared`.
//! Split from the binary so the runner can be tested without a process.

pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod output;
