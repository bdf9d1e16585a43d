use std::io;

use anyhow::Context;
use exlint_check::{ExitStatus, Reporter, run_check};

use crate::bootstrap;
use crate::cli::{CheckArgs, GlobalFlags};

/// Handle `exlint check`.
pub fn handle(args: &CheckArgs, flags: &GlobalFlags) -> anyhow::Result<ExitStatus> {
    let repo_root = bootstrap::resolve_repo_root(flags.repo.as_deref())?;
    let config = bootstrap::load_config(&repo_root, flags, Some(args))?;
    let options = bootstrap::check_options(&config);
    let registry = bootstrap::registry_source(&config, &repo_root, args.registry_file.is_some());

    let report = run_check(&repo_root, &options, registry.as_ref())
        .with_context(|| format!("cannot lint examples under '{}'", repo_root.display()))?;

    let mut reporter = Reporter::new(
        io::stdout().lock(),
        io::stderr().lock(),
        config.layout.manifest.as_str(),
        flags.format.into(),
    );
    reporter
        .report(&report)
        .context("failed to write lint report")
}
