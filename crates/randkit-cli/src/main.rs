//! randkit command-line entry point.

use std::process::ExitCode;

use randkit_cli::{CliError, Command, USAGE, run};
use randkit_core::{Random, SourceConfig};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the result.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match execute(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) if err.is_usage() => {
            eprintln!("error: {err}\n\n{USAGE}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &[String]) -> Result<String, CliError> {
    let command = Command::parse(args)?;
    let config = SourceConfig::from_env()?;
    tracing::debug!(?command, ?config, "running command");

    let mut random = Random::from_config(&config);
    run(&command, &mut random)
}
