use anyhow::Result;

use super::args::{Arguments, Command};
use super::commands::{
    CommandSummary, filter_commits::filter_commits, init::init, render::render, update::update,
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandSummary> {
    match command {
        Some(Command::Update(cmd)) => update(cmd),
        Some(Command::Render(cmd)) => render(cmd),
        Some(Command::FilterCommits(cmd)) => filter_commits(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
