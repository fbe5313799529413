//! Rendering the contributors document from a template.
//!
//! The template carries two literal placeholders, `[[main]]` and
//! `[[translators]]`, each substituted once. Rendering is pure: a fixed
//! record and template always produce byte-identical output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::languages::{LanguageNameSource, display_name};
use crate::store::ContributorRecord;

pub const MAIN_PLACEHOLDER: &str = "[[main]]";
pub const TRANSLATORS_PLACEHOLDER: &str = "[[translators]]";

/// How a username is rendered in the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MentionFormat {
    /// `[name](/name)`, a profile link relative to the hosting site.
    #[default]
    Link,
    /// `@name`, a plain tag.
    At,
}

impl MentionFormat {
    pub fn mention(&self, name: &str) -> String {
        match self {
            MentionFormat::Link => format!("[{}](/{})", name, name),
            MentionFormat::At => format!("@{}", name),
        }
    }
}

/// Rendering knobs, taken from the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub mention: MentionFormat,
    pub language_names: LanguageNameSource,
}

/// Substitute both placeholders and return the finished document.
pub fn render_document(
    template: &str,
    record: &ContributorRecord,
    options: &RenderOptions,
) -> String {
    template
        .replacen(MAIN_PLACEHOLDER, &main_section(record, options), 1)
        .replacen(
            TRANSLATORS_PLACEHOLDER,
            &translators_section(record, options),
            1,
        )
}

/// Fully overwrite the output document.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, contents)
        .with_context(|| format!("Failed to write output document: {}", path.display()))
}

/// Read the template document.
pub fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read template file: {}", path.display()))
}

fn main_section(record: &ContributorRecord, options: &RenderOptions) -> String {
    let mut names = record.main.clone();
    names.sort();
    names
        .iter()
        .map(|name| format!("* {}", options.mention.mention(name)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn translators_section(record: &ContributorRecord, options: &RenderOptions) -> String {
    // BTreeMap iteration gives code order; the sort below is stable, so
    // languages sharing a display name keep that order.
    let mut entries: Vec<(String, &Vec<String>)> = record
        .translators
        .iter()
        .filter(|(_, translators)| !translators.is_empty())
        .map(|(code, translators)| {
            (
                display_name(code, record, options.language_names),
                translators,
            )
        })
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    entries
        .iter()
        .map(|(name, translators)| {
            let mut sorted = (*translators).clone();
            sorted.sort();
            let mentions = sorted
                .iter()
                .map(|t| options.mention.mention(t))
                .collect::<Vec<_>>()
                .join(", ");
            format!("* {}: {}", name, mentions)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Count the languages that would produce a line in the rendered output.
pub fn rendered_language_count(record: &ContributorRecord) -> usize {
    record
        .translators
        .values()
        .filter(|translators| !translators.is_empty())
        .count()
}
