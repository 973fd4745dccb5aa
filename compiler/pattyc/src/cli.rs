//! Command-line parsing.
//!
//! Flags may appear before or after the file name.

use std::path::PathBuf;

use crate::errors::CliError;

pub const USAGE: &str = "\
usage: patty [options] <filename>
  --ast          print the expression tree before evaluating
  --no-eval      print the expression tree and do not evaluate
  --tokens       print the token stream and exit
  --max-depth N  fail with a recursion error past N nested user calls
  -h, --help     print usage info
";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub filename: PathBuf,
    pub ast: bool,
    pub no_eval: bool,
    pub tokens: bool,
    pub max_depth: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(Options),
}

/// Parse the arguments that follow the program name.
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut filename: Option<PathBuf> = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--ast" => options.ast = true,
            "--no-eval" => options.no_eval = true,
            "--tokens" => options.tokens = true,
            "--max-depth" => {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::usage("--max-depth requires a value"))?;
                options.max_depth = Some(parse_depth(&value)?);
            }
            flag => {
                if let Some(value) = flag.strip_prefix("--max-depth=") {
                    options.max_depth = Some(parse_depth(value)?);
                } else if flag.starts_with('-') && flag.len() > 1 {
                    return Err(CliError::usage(format!("unknown option '{flag}'")));
                } else if filename.is_some() {
                    return Err(CliError::usage("more than one filename was specified"));
                } else {
                    filename = Some(PathBuf::from(flag));
                }
            }
        }
    }

    options.filename =
        filename.ok_or_else(|| CliError::usage("REPL mode is not implemented yet"))?;
    Ok(Command::Run(options))
}

fn parse_depth(value: &str) -> Result<usize, CliError> {
    match value.parse() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(CliError::usage(format!(
            "--max-depth expects a positive integer, got '{value}'"
        ))),
    }
}
