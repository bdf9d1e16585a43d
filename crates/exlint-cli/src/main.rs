use std::process::ExitCode;

use clap::Parser;
use exlint_check::ExitStatus;

mod bootstrap;
mod cli;
mod commands;
mod output;

/// Exit code when at least one example fails a check.
const LINT_FAILURE: u8 = 1;
/// Exit code when the run itself could not complete.
const FATAL: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(ExitStatus::Success) => ExitCode::SUCCESS,
        Ok(ExitStatus::Failure) => ExitCode::from(LINT_FAILURE),
        Err(error) => {
            eprintln!("exlint error: {error:#}");
            ExitCode::from(FATAL)
        }
    }
}

fn run() -> anyhow::Result<ExitStatus> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    match &cli.command {
        cli::Commands::Check(args) => commands::check::handle(args, &flags),
        cli::Commands::List => {
            commands::list::handle(&flags)?;
            Ok(ExitStatus::Success)
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("EXLINT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
