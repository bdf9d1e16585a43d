//! Repository root, configuration, and collaborator setup shared by commands.

use std::path::{Path, PathBuf};

use anyhow::Context;
use exlint_check::CheckOptions;
use exlint_config::ExlintConfig;
use exlint_discovery::{LocateOptions, MarkerSet};
use exlint_registry::{CommandRegistry, FileRegistry, RegistrySource};

use crate::cli::{CheckArgs, GlobalFlags};

/// Resolve `--repo` or fall back to the current directory.
pub fn resolve_repo_root(repo: Option<&str>) -> anyhow::Result<PathBuf> {
    let root = match repo {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    if !root.is_dir() {
        anyhow::bail!(
            "invalid --repo '{}': directory does not exist",
            root.display()
        );
    }
    Ok(root)
}

/// Merge config sources, apply `check` flag overrides, then validate.
///
/// Without `check` arguments only the layout is validated: commands that never
/// query the registry do not need a registry program.
pub fn load_config(
    repo_root: &Path,
    flags: &GlobalFlags,
    overrides: Option<&CheckArgs>,
) -> anyhow::Result<ExlintConfig> {
    let explicit = flags.config.as_deref().map(Path::new);
    let mut config =
        ExlintConfig::extract(repo_root, explicit).context("failed to load exlint configuration")?;

    if let Some(args) = overrides {
        if let Some(path) = &args.registry_file {
            config.registry.listing_file = path.display().to_string();
        }
        if let Some(jobs) = args.jobs {
            config.check.jobs = jobs;
        }
        if let Some(depth) = args.max_depth {
            config.layout.max_depth = depth;
        }
    }

    if overrides.is_some() {
        config.validate()
    } else {
        config.validate_layout()
    }
    .context("invalid exlint configuration")?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

#[must_use]
pub fn check_options(config: &ExlintConfig) -> CheckOptions {
    CheckOptions {
        examples_dir: PathBuf::from(&config.layout.examples_dir),
        locate: LocateOptions {
            markers: MarkerSet::new(config.layout.markers.iter().cloned()),
            max_depth: config.layout.max_depth,
        },
        rule: config.identity_rule(),
        manifest_file: config.layout.manifest.clone(),
        jobs: config.check.jobs,
    }
}

/// The configured registry: a saved listing if one is set, otherwise the
/// registry command run in the repository root.
///
/// A relative listing path resolves against the current directory when given
/// on the command line and against the repository root when configured.
#[must_use]
pub fn registry_source(
    config: &ExlintConfig,
    repo_root: &Path,
    from_flag: bool,
) -> Box<dyn RegistrySource> {
    match config.registry.listing_file() {
        Some(path) if from_flag || path.is_absolute() => Box::new(FileRegistry::new(path)),
        Some(path) => Box::new(FileRegistry::new(repo_root.join(path))),
        None => Box::new(CommandRegistry::new(
            config.registry.program.clone(),
            config.registry.args.iter().cloned(),
            repo_root,
        )),
    }
}
