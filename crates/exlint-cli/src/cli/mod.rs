use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{CheckArgs, Commands};

/// Top-level CLI parser for the `exlint` binary.
#[derive(Debug, Parser)]
#[command(
    name = "exlint",
    version,
    about = "Checks that every example project is named and registered correctly"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Repository root (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub repo: Option<String>,

    /// Extra config file, merged over .exlint.toml
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}
