use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::languages::LanguageNameSource;
use crate::render::MentionFormat;

pub const CONFIG_FILE_NAME: &str = ".creditrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Persisted contributors record.
    #[serde(default = "default_contributors_file")]
    pub contributors_file: String,
    /// Template document with the `[[main]]` and `[[translators]]` placeholders.
    #[serde(default = "default_template_file")]
    pub template_file: String,
    /// Rendered contributors document, fully overwritten each run.
    #[serde(default = "default_output_file")]
    pub output_file: String,
    /// Directory prefix that translation files live under.
    #[serde(default = "default_translations_root")]
    pub translations_root: String,
    /// How usernames are rendered in the document.
    #[serde(default)]
    pub mention_format: MentionFormat,
    /// Where language display names come from.
    #[serde(default)]
    pub language_names: LanguageNameSource,
    /// Never add a main contributor to a translator list.
    #[serde(default = "default_skip_main_contributors")]
    pub skip_main_contributors: bool,
}

fn default_contributors_file() -> String {
    "./contributors.json".to_string()
}

fn default_template_file() -> String {
    "./contributors-template.md".to_string()
}

fn default_output_file() -> String {
    "./Contributors.md".to_string()
}

fn default_translations_root() -> String {
    "translations".to_string()
}

fn default_skip_main_contributors() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contributors_file: default_contributors_file(),
            template_file: default_template_file(),
            output_file: default_output_file(),
            translations_root: default_translations_root(),
            mention_format: MentionFormat::default(),
            language_names: LanguageNameSource::default(),
            skip_main_contributors: default_skip_main_contributors(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.translations_root.trim_matches('/').is_empty() {
            anyhow::bail!("'translationsRoot' must name a directory");
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
