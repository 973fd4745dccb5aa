//! Errors surfaced by the `patty` binary.

use std::io;
use std::path::PathBuf;

use patty_reader::ReadError;
use patty_value::EngineError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Bad command line.
    #[error("{0}")]
    Usage(String),

    #[error("cannot open file '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output: {0}")]
    Output(#[source] io::Error),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Eval(#[from] EngineError),
}

impl CliError {
    #[cold]
    pub fn usage(message: impl Into<String>) -> Self {
        CliError::Usage(message.into())
    }
}
