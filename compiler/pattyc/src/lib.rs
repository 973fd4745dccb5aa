#![allow(
    clippy::result_large_err,
    reason = "CliError wraps EngineError, which is already the large variant"
)]
//! Patty CLI library: argument parsing and the commands behind the `patty`
//! binary.

pub mod cli;
pub mod commands;
mod errors;
pub mod tracing_setup;

pub use errors::CliError;
