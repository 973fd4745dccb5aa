//! Token and expression tree dumps.

use std::io::Write;

use patty_stack::ensure_sufficient_stack;
use patty_value::Value;

use crate::errors::CliError;

/// One line per token: span, kind, text.
pub fn print_tokens(source: &str, out: &mut dyn Write) -> Result<(), CliError> {
    for token in patty_reader::Scanner::new(source) {
        writeln!(out, "{}", token?).map_err(CliError::Output)?;
    }
    Ok(())
}

/// Indented tree, one node per line, two spaces per level.
pub fn print_tree(expr: &Value, out: &mut dyn Write) -> Result<(), CliError> {
    write_node(expr, 0, out).map_err(CliError::Output)
}

fn write_node(expr: &Value, depth: usize, out: &mut dyn Write) -> std::io::Result<()> {
    let indent = depth * 2;
    match expr {
        Value::List(items) => ensure_sufficient_stack(|| {
            writeln!(out, "{:indent$}list ({})", "", items.len())?;
            for item in items {
                write_node(item, depth + 1, out)?;
            }
            Ok(())
        }),
        Value::String(_) => writeln!(out, "{:indent$}string {}", "", expr.quoted()),
        other => writeln!(out, "{:indent$}{} {other}", "", other.type_name()),
    }
}
