//! Merging newly-discovered translators into the contributors record.

use crate::store::ContributorRecord;

/// Credit `user` as a translator for each code in `langs`.
///
/// Creates missing translator lists, appends `user` only where not
/// already present, and, when `skip_main` is set, never adds a user who
/// is already a main contributor. Mutates the record in place and is
/// idempotent: merging the same input twice changes nothing.
///
/// Returns the codes the user was newly added to, for progress output.
pub fn merge(
    record: &mut ContributorRecord,
    user: &str,
    langs: &[String],
    skip_main: bool,
) -> Vec<String> {
    let mut added = Vec::new();

    for lang in langs {
        let translators = record.translators.entry(lang.clone()).or_default();
        if translators.iter().any(|item| item == user) {
            continue;
        }
        if skip_main && record.main.iter().any(|item| item == user) {
            continue;
        }
        translators.push(user.to_string());
        if !added.contains(lang) {
            added.push(lang.clone());
        }
    }

    added
}
