use std::path::PathBuf;

/// Result of running a credit command, consumed by the report layer.
#[derive(Debug)]
pub enum CommandSummary {
    Update(UpdateSummary),
    Render(RenderSummary),
    FilterCommits(FilterCommitsSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct UpdateSummary {
    pub user: String,
    /// Distinct language codes seen in the changed files, input order.
    pub languages_seen: Vec<String>,
    /// Codes the user was newly credited for this run.
    pub languages_added: Vec<String>,
    pub output_path: PathBuf,
}

#[derive(Debug)]
pub struct RenderSummary {
    pub main_count: usize,
    /// Languages with at least one translator, i.e. those that rendered a line.
    pub language_count: usize,
    pub output_path: PathBuf,
}

#[derive(Debug)]
pub struct FilterCommitsSummary {
    pub author: String,
    pub total: usize,
    pub matched: usize,
    /// True when the pair went to the GITHUB_OUTPUT file rather than stdout.
    pub wrote_step_output: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}
