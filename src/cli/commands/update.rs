use anyhow::Result;

use super::super::args::UpdateCommand;
use super::{CommandSummary, PipelineContext, UpdateSummary};
use crate::{extract, git, merge};

/// The full update pipeline: changed paths -> language codes -> record
/// merge -> persisted record -> rendered document.
///
/// The record is saved and the document re-rendered even when no
/// translation files matched; both writes are then byte-identical.
pub fn update(cmd: UpdateCommand) -> Result<CommandSummary> {
    let ctx = PipelineContext::new(&cmd.common)?;

    let paths = match &cmd.commit {
        Some(commit_ref) => git::changed_files(commit_ref)?,
        None => cmd.paths,
    };

    let langs = extract::languages_from_paths(
        paths.iter().map(String::as_str),
        &ctx.translations_root,
    );

    let mut record = ctx.store.load()?;
    let added = merge::merge(
        &mut record,
        &cmd.user,
        &langs,
        ctx.skip_main_contributors,
    );
    ctx.store.save(&record)?;

    ctx.render_to_output(&record)?;

    Ok(CommandSummary::Update(UpdateSummary {
        user: cmd.user,
        languages_seen: dedup_in_order(langs),
        languages_added: added,
        output_path: ctx.output_path,
    }))
}

fn dedup_in_order(langs: Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    for lang in langs {
        if !seen.contains(&lang) {
            seen.push(lang);
        }
    }
    seen
}
