//! Report formatting and printing utilities.
//!
//! One green summary line per command, with per-language detail under
//! `--verbose`. Separate from the pipeline logic so output stays testable
//! through a writer.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandSummary, FilterCommitsSummary, InitSummary, RenderSummary, UpdateSummary,
};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the command summary to stdout.
pub fn print(summary: &CommandSummary, verbose: bool) {
    print_to(summary, verbose, &mut io::stdout().lock());
}

/// Print the command summary to a custom writer.
pub fn print_to<W: Write>(summary: &CommandSummary, verbose: bool, writer: &mut W) {
    match summary {
        CommandSummary::Update(summary) => print_update(summary, verbose, writer),
        CommandSummary::Render(summary) => print_render(summary, writer),
        CommandSummary::FilterCommits(summary) => print_filter_commits(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_update<W: Write>(summary: &UpdateSummary, verbose: bool, writer: &mut W) {
    if verbose {
        for lang in &summary.languages_added {
            let _ = writeln!(
                writer,
                "Adding contributor {} to language {}",
                summary.user, lang
            );
        }
    }

    let output = summary.output_path.display();
    let msg = if summary.languages_seen.is_empty() {
        format!("No translation files changed - wrote {}", output)
    } else if summary.languages_added.is_empty() {
        format!(
            "{} already recorded for {} - wrote {}",
            summary.user,
            join(&summary.languages_seen),
            output
        )
    } else {
        format!(
            "Credited {} for {} - wrote {}",
            summary.user,
            join(&summary.languages_added),
            output
        )
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn print_render<W: Write>(summary: &RenderSummary, writer: &mut W) {
    let msg = format!(
        "Rendered {} main {}, {} {} - wrote {}",
        summary.main_count,
        plural(summary.main_count, "contributor", "contributors"),
        summary.language_count,
        plural(summary.language_count, "language", "languages"),
        summary.output_path.display()
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn print_filter_commits<W: Write>(summary: &FilterCommitsSummary, writer: &mut W) {
    let target = if summary.wrote_step_output {
        "step output"
    } else {
        "stdout"
    };
    let msg = format!(
        "Matched {} of {} {} for {} - emitted to {}",
        summary.matched,
        summary.total,
        plural(summary.total, "commit", "commits"),
        summary.author,
        target
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let msg = format!("Created {}", CONFIG_FILE_NAME);
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
    }
}

fn join(langs: &[String]) -> String {
    langs.join(", ")
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
