//! `patty <file>`: read one expression and evaluate it.

use std::io::Write;

use patty_eval::{Executor, Interpreter};

use super::{print_tokens, print_tree, read_file};
use crate::cli::Options;
use crate::errors::CliError;

/// Run the file named in `options` with stdout/stdin handlers.
pub fn run_file(options: &Options, out: &mut dyn Write) -> Result<(), CliError> {
    let source = read_file(&options.filename)?;
    tracing::debug!(path = %options.filename.display(), bytes = source.len(), "loaded source");

    let mut builder = Interpreter::builder();
    if let Some(depth) = options.max_depth {
        builder = builder.max_call_depth(depth);
    }
    let mut interpreter = builder.build();
    run_source(&source, options, &mut interpreter, out)
}

/// Process `source` as `options` ask, writing dumps and the program's result
/// to `out`. Program output goes through the interpreter's print handler.
///
/// Only the first expression of `source` is read; a program is usually a
/// single `(do ...)` form.
pub fn run_source(
    source: &str,
    options: &Options,
    interpreter: &mut Interpreter,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if options.tokens {
        return print_tokens(source, out);
    }

    let expr = patty_reader::Reader::new(source).read()?;
    if options.ast {
        print_tree(&expr, out)?;
    }
    if options.no_eval {
        writeln!(out, "{}", expr.quoted()).map_err(CliError::Output)?;
        return Ok(());
    }

    let value = interpreter.eval(expr)?;
    writeln!(out, "{value}").map_err(CliError::Output)
}
