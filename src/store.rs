//! Persisted contributors record.
//!
//! The record is a JSON file committed to the repository:
//!
//! ```json
//! {
//!   "main": ["alice"],
//!   "translators": { "fr": ["bob"] },
//!   "languages": { "fr": "French" }
//! }
//! ```
//!
//! It is required state: a missing or malformed file is a fatal error,
//! there is no recovery path. The whole record is rewritten on save.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The contributor listing persisted between runs.
///
/// `BTreeMap` keeps iteration and serialization deterministic, so a
/// no-op run writes back byte-identical state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContributorRecord {
    /// Core project contributors, credited once, not per-language.
    #[serde(default)]
    pub main: Vec<String>,
    /// Translator usernames per language code. No duplicates within a list.
    #[serde(default)]
    pub translators: BTreeMap<String, Vec<String>>,
    /// Explicit display names per language code. Only consulted when the
    /// record is configured as the language-name source.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub languages: BTreeMap<String, String>,
}

/// Load/save access to the contributors record file.
pub struct ContributorStore {
    path: PathBuf,
}

impl ContributorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the record. Typed deserialization is the load-boundary
    /// validation: shape mismatches fail here, not downstream.
    pub fn load(&self) -> Result<ContributorRecord> {
        let content = fs::read_to_string(&self.path).with_context(|| {
            format!("Failed to read contributors file: {}", self.path.display())
        })?;
        serde_json::from_str(&content).with_context(|| {
            format!(
                "Failed to parse contributors file: {}",
                self.path.display()
            )
        })
    }

    /// Serialize the full record and rewrite the file.
    ///
    /// Uses 2-space indentation and adds a trailing newline.
    pub fn save(&self, record: &ContributorRecord) -> Result<()> {
        let content = serde_json::to_string_pretty(record)
            .context("Failed to serialize contributors record")?;
        fs::write(&self.path, format!("{}\n", content)).with_context(|| {
            format!(
                "Failed to write contributors file: {}",
                self.path.display()
            )
        })
    }
}
