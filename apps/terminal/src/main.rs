use std::process::ExitCode;

use clap::Parser;
use hearth_terminal::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match hearth_terminal::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "hearth terminated");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
