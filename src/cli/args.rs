//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `update`: credit a user for the translation files touched by a commit
//!   and regenerate the contributors document
//! - `render`: regenerate the contributors document from the current record
//! - `filter-commits`: filter a commit payload down to one author's commits
//!   and emit them as a workflow step output
//! - `init`: initialize a credit configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Update(cmd)) => cmd.common.verbose,
            Some(Command::Render(cmd)) => cmd.common.verbose,
            Some(Command::FilterCommits(_)) | Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by the record-touching commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Contributors record file (overrides config file)
    #[arg(long)]
    pub contributors_file: Option<PathBuf>,

    /// Template document path (overrides config file)
    #[arg(long)]
    pub template_file: Option<PathBuf>,

    /// Output document path (overrides config file)
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Username credited for the commit
    pub user: String,

    /// File paths changed by the commit
    #[arg(conflicts_with = "commit")]
    pub paths: Vec<String>,

    /// Derive changed paths from a commit ref via `git diff-tree`
    #[arg(long, value_name = "REF")]
    pub commit: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RenderCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FilterCommitsCommand {
    /// Author username to keep commits for
    #[arg(long, env = "AUTHOR")]
    pub author: String,

    /// JSON array of commit objects from the push event payload
    #[arg(long, env = "COMMITS", hide_env_values = true)]
    pub commits: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Credit a user for changed translation files and regenerate the document
    Update(UpdateCommand),
    /// Regenerate the contributors document from the current record
    Render(RenderCommand),
    /// Keep one author's commits from a commit payload and emit a step output
    FilterCommits(FilterCommitsCommand),
    /// Initialize a new .creditrc.json configuration file
    Init,
}
