use std::process::ExitCode;

use anyhow::Context;
use bookquote::cli::{self, output, Cli};
use clap::Parser;
use tracing::debug;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            output::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = cli.load_config().context("failed to load configuration")?;
    config.init_logging();
    debug!(command = ?cli.command, "bookquote starting");

    let code = cli::execute(&cli.command, &config)?;
    Ok(code)
}
