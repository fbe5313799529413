//! Commit payload types and the author filter.
//!
//! The CI workflow hands over the push event's commit array as JSON; the
//! filter keeps the target author's commits and strips them down to the
//! `{id, message}` pairs the downstream workflow step consumes.

use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A commit as delivered in the push event payload. Unknown fields are
/// ignored; only `id`, `message` and `author.username` are consumed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Commit {
    pub id: String,
    pub message: String,
    #[serde(default)]
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommitAuthor {
    pub username: String,
}

/// The filter's output shape: a commit stripped to id and message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitSummary {
    pub id: String,
    pub message: String,
}

/// Parse the JSON commit array from the `COMMITS` environment payload.
pub fn parse_commits(json: &str) -> Result<Vec<Commit>> {
    serde_json::from_str(json).context("Failed to parse COMMITS payload")
}

/// Keep commits authored by `author` (exact, case-sensitive match),
/// preserving order. Commits without an author never match.
pub fn filter_by_author(commits: &[Commit], author: &str) -> Vec<CommitSummary> {
    commits
        .iter()
        .filter(|commit| {
            commit
                .author
                .as_ref()
                .is_some_and(|a| a.username == author)
        })
        .map(|commit| CommitSummary {
            id: commit.id.clone(),
            message: commit.message.clone(),
        })
        .collect()
}

/// Emit a `name=value` step-output pair.
///
/// Appends to the file named by `GITHUB_OUTPUT` when the variable is set
/// (the hosted-runner path), otherwise prints the pair to stdout so the
/// tool stays usable outside the workflow.
///
/// Returns true when the pair went to the step-output file.
pub fn emit_step_output(name: &str, value: &str) -> Result<bool> {
    match env::var_os("GITHUB_OUTPUT") {
        Some(path) => {
            let path = PathBuf::from(path);
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| {
                    format!("Failed to open step output file: {}", path.display())
                })?;
            writeln!(file, "{}={}", name, value)
                .context("Failed to write step output")?;
            Ok(true)
        }
        None => {
            println!("{}={}", name, value);
            Ok(false)
        }
    }
}
