use anyhow::Context;
use exlint_check::discover;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{print_json, print_rows};

#[derive(Debug, Serialize)]
struct ListedProject {
    project: String,
    identity: String,
}

/// Handle `exlint list`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let repo_root = bootstrap::resolve_repo_root(flags.repo.as_deref())?;
    let config = bootstrap::load_config(&repo_root, flags, None)?;
    let options = bootstrap::check_options(&config);

    let projects = discover(&repo_root, &options)
        .with_context(|| format!("cannot list examples under '{}'", repo_root.display()))?;

    let listed: Vec<ListedProject> = projects
        .into_iter()
        .map(|(project, identity)| ListedProject {
            project: project.to_string(),
            identity,
        })
        .collect();

    match flags.format {
        OutputFormat::Json => print_json(&listed),
        OutputFormat::Text => {
            print_rows(
                listed
                    .iter()
                    .map(|item| [item.project.as_str(), item.identity.as_str()]),
            );
            Ok(())
        }
    }
}
