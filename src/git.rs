//! Changed-file enumeration for the commit-ref variant of `update`.

use std::process::Command;

use anyhow::{Context, Result, bail};

/// List the paths changed by `commit_ref` via `git diff-tree`.
///
/// Blocking, no timeout; a non-zero git exit or spawn failure is fatal
/// for the run.
pub fn changed_files(commit_ref: &str) -> Result<Vec<String>> {
    let output = Command::new("git")
        .args(["diff-tree", "--no-commit-id", "--name-only", "-r", commit_ref])
        .output()
        .context("Failed to run git diff-tree")?;

    if !output.status.success() {
        bail!(
            "git diff-tree failed for {}: {}",
            commit_ref,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
