//! Shared pipeline context for the record-touching commands.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::super::args::CommonArgs;
use crate::config::load_config;
use crate::render::{self, RenderOptions};
use crate::store::{ContributorRecord, ContributorStore};

/// Resolved file paths and policy for one run: config file values with
/// CLI overrides applied.
pub struct PipelineContext {
    pub store: ContributorStore,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    pub translations_root: String,
    pub render_options: RenderOptions,
    pub skip_main_contributors: bool,
}

impl PipelineContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to resolve working directory")?;
        let loaded = load_config(&cwd)?;
        let config = loaded.config;

        let contributors_path = common
            .contributors_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.contributors_file));
        let template_path = common
            .template_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.template_file));
        let output_path = common
            .output_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output_file));

        Ok(Self {
            store: ContributorStore::new(contributors_path),
            template_path,
            output_path,
            translations_root: config.translations_root,
            render_options: RenderOptions {
                mention: config.mention_format,
                language_names: config.language_names,
            },
            skip_main_contributors: config.skip_main_contributors,
        })
    }

    /// Render the document from `record` and overwrite the output file.
    pub fn render_to_output(&self, record: &ContributorRecord) -> Result<()> {
        let template = render::read_template(&self.template_path)?;
        let document = render::render_document(&template, record, &self.render_options);
        render::write_document(&self.output_path, &document)
    }
}
