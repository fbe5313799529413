use anyhow::Result;

use super::super::args::RenderCommand;
use super::{CommandSummary, PipelineContext, RenderSummary};
use crate::render::rendered_language_count;

/// Regenerate the contributors document without touching the record.
pub fn render(cmd: RenderCommand) -> Result<CommandSummary> {
    let ctx = PipelineContext::new(&cmd.common)?;

    let record = ctx.store.load()?;
    ctx.render_to_output(&record)?;

    Ok(CommandSummary::Render(RenderSummary {
        main_count: record.main.len(),
        language_count: rendered_language_count(&record),
        output_path: ctx.output_path,
    }))
}
