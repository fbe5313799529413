//! Credit - contributor listing maintenance for translation commits
//!
//! Credit is a CLI tool and library that keeps a project's contributor
//! listing in sync with translation commits. It extracts language codes
//! from changed translation files, merges the commit author into a
//! persisted contributors record, and regenerates a human-readable
//! contributors document from a template.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit codes)
//! - `commits`: Commit payload types and the author filter
//! - `config`: Configuration file loading and parsing
//! - `extract`: Language code extraction from changed file paths
//! - `git`: Changed-file enumeration via `git diff-tree`
//! - `languages`: Language code to display name resolution
//! - `merge`: Merging translators into the contributors record
//! - `render`: Rendering the contributors document from a template
//! - `store`: The persisted contributors record

pub mod cli;
pub mod commits;
pub mod config;
pub mod extract;
pub mod git;
pub mod languages;
pub mod merge;
pub mod render;
pub mod store;
