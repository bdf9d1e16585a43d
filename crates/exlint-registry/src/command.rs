//! Registry listing produced by an external command.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{RegistryError, RegistryListing, RegistrySource};

/// Runs the workspace tool (e.g. `npx lerna list --all --json`) in the
/// repository root and parses its stdout.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    program: String,
    args: Vec<String>,
    cwd: PathBuf,
}

impl CommandRegistry {
    pub fn new<I, S>(program: impl Into<String>, args: I, cwd: impl AsRef<Path>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.as_ref().to_path_buf(),
        }
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl RegistrySource for CommandRegistry {
    fn fetch(&self) -> Result<RegistryListing, RegistryError> {
        let command = self.command_line();
        tracing::debug!(%command, cwd = %self.cwd.display(), "querying workspace registry");

        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.cwd)
            .output()
            .map_err(|source| RegistryError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(RegistryError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let listing = RegistryListing::parse(json_payload(&stdout), &format!("`{command}`"))?;
        tracing::debug!(packages = listing.len(), "workspace registry listed");
        Ok(listing)
    }

    fn describe(&self) -> String {
        format!("`{}`", self.command_line())
    }
}

/// Skip banner lines some package runners print before the JSON array.
fn json_payload(stdout: &str) -> &str {
    let mut offset = 0;
    for line in stdout.split_inclusive('\n') {
        if line.trim_start().starts_with('[') {
            return &stdout[offset..];
        }
        offset += line.len();
    }
    stdout
}
