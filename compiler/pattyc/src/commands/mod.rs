//! Command handlers for the `patty` binary.
//!
//! `run` reads, optionally dumps, and evaluates a program; `inspect` holds the
//! token and tree dumps behind `--tokens`, `--ast` and `--no-eval`.

use std::path::Path;

use crate::errors::CliError;

mod inspect;
mod run;

pub use inspect::{print_tokens, print_tree};
pub use run::{run_file, run_source};

/// Read a source file.
pub fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })
}
