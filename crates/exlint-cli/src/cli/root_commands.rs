use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Check every example against its package.json and the workspace registry.
    Check(CheckArgs),
    /// List discovered examples with their expected package names.
    List,
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Read the registry listing from a JSON file instead of running the registry command.
    #[arg(long)]
    pub registry_file: Option<PathBuf>,

    /// Worker threads for per-example checks (0 = all cores, 1 = sequential).
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Maximum directory depth searched below the examples directory.
    #[arg(long)]
    pub max_depth: Option<usize>,
}
