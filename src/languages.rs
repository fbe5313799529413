//! Language code to display name resolution.
//!
//! Translation files carry ISO 639-1 two-letter codes; the rendered
//! contributors document shows human-readable names. Names come either
//! from an embedded ISO 639-1 table or from the `languages` map inside
//! the contributors record, selected by [`LanguageNameSource`].

use serde::{Deserialize, Serialize};

use crate::store::ContributorRecord;

/// Where display names for language codes come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LanguageNameSource {
    /// Embedded ISO 639-1 English-name table.
    #[default]
    Builtin,
    /// The `languages` map of the contributors record.
    Record,
}

/// Resolve a display name for `code`, falling back to the code itself
/// when no name is known.
pub fn display_name(code: &str, record: &ContributorRecord, source: LanguageNameSource) -> String {
    let resolved = match source {
        LanguageNameSource::Builtin => language_name(code),
        LanguageNameSource::Record => record.languages.get(code).map(String::as_str),
    };
    resolved.unwrap_or(code).to_string()
}

/// English name of an ISO 639-1 two-letter code.
///
/// Returns `None` for unrecognised codes. Covers the languages commonly
/// seen in translation directories; callers fall back to the raw code.
///
/// Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "ar" => Some("Arabic"),
        "bg" => Some("Bulgarian"),
        "ca" => Some("Catalan"),
        "cs" => Some("Czech"),
        "da" => Some("Danish"),
        "de" => Some("German"),
        "el" => Some("Greek"),
        "en" => Some("English"),
        "es" => Some("Spanish"),
        "et" => Some("Estonian"),
        "eu" => Some("Basque"),
        "fa" => Some("Persian"),
        "fi" => Some("Finnish"),
        "fr" => Some("French"),
        "gl" => Some("Galician"),
        "he" => Some("Hebrew"),
        "hi" => Some("Hindi"),
        "hr" => Some("Croatian"),
        "hu" => Some("Hungarian"),
        "id" => Some("Indonesian"),
        "is" => Some("Icelandic"),
        "it" => Some("Italian"),
        "ja" => Some("Japanese"),
        "ko" => Some("Korean"),
        "lt" => Some("Lithuanian"),
        "lv" => Some("Latvian"),
        "ms" => Some("Malay"),
        "nl" => Some("Dutch"),
        "no" | "nb" => Some("Norwegian"),
        "pl" => Some("Polish"),
        "pt" => Some("Portuguese"),
        "ro" => Some("Romanian"),
        "ru" => Some("Russian"),
        "sk" => Some("Slovak"),
        "sl" => Some("Slovenian"),
        "sr" => Some("Serbian"),
        "sv" => Some("Swedish"),
        "th" => Some("Thai"),
        "tr" => Some("Turkish"),
        "uk" => Some("Ukrainian"),
        "vi" => Some("Vietnamese"),
        "zh" => Some("Chinese"),
        _ => None,
    }
}
