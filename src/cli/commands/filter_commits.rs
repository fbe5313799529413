use anyhow::{Context, Result};

use super::super::args::FilterCommitsCommand;
use super::{CommandSummary, FilterCommitsSummary};
use crate::commits::{emit_step_output, filter_by_author, parse_commits};

/// Filter the push event's commits down to one author and emit the
/// surviving `{id, message}` pairs as the `commits` step output.
pub fn filter_commits(cmd: FilterCommitsCommand) -> Result<CommandSummary> {
    let commits = parse_commits(&cmd.commits)?;
    let filtered = filter_by_author(&commits, &cmd.author);

    let payload =
        serde_json::to_string(&filtered).context("Failed to serialize filtered commits")?;
    let wrote_step_output = emit_step_output("commits", &payload)?;

    Ok(CommandSummary::FilterCommits(FilterCommitsSummary {
        author: cmd.author,
        total: commits.len(),
        matched: filtered.len(),
        wrote_step_output,
    }))
}
