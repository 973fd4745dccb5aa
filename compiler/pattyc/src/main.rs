//! `patty`: run a Patty program.

use std::process::ExitCode;

use pattyc::cli::{parse_args, Command, USAGE};
use pattyc::commands::run_file;
use pattyc::CliError;

fn main() -> ExitCode {
    pattyc::tracing_setup::init_tracing();

    let result = parse_args(std::env::args().skip(1)).and_then(|command| match command {
        Command::Help => {
            print!("{USAGE}");
            Ok(())
        }
        Command::Run(options) => run_file(&options, &mut std::io::stdout()),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn report(err: &CliError) -> ExitCode {
    eprintln!("patty: error: {err}");
    if matches!(err, CliError::Usage(_)) {
        eprint!("{USAGE}");
    }
    ExitCode::FAILURE
}
