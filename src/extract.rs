//! Language code extraction from changed file paths.
//!
//! A commit touches many files; only those under the translations
//! directory named `translation_<code>.xml` credit the author as a
//! translator. Everything else is dropped silently.

use std::sync::LazyLock;

use regex::Regex;

static TRANSLATION_FILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"translation_(.{2})\.xml").unwrap());

/// Extract the language codes implied by `paths`.
///
/// Keeps paths starting with `<translations_root>/`, captures the
/// two-character code from the translation filename pattern, and returns
/// the codes in input order. Duplicates are permitted; deduplication is
/// the merge step's job.
pub fn languages_from_paths<'a, I>(paths: I, translations_root: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let prefix = format!("{}/", translations_root.trim_end_matches('/'));

    paths
        .into_iter()
        .filter(|path| path.starts_with(&prefix))
        .filter_map(|path| {
            TRANSLATION_FILE_REGEX
                .captures(path)
                .map(|captures| captures[1].to_string())
        })
        .collect()
}
