//! Report formatting and printing utilities.
//!
//! Kept apart from the actions so the library can be used without printing.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, ExportSummary, SyncSummary, TestSummary};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Sync(summary) => {
            print_sync(summary, result.warning_count, &mut io::stdout().lock())
        }
        CommandSummary::Export(summary) => print_export(summary, &mut io::stdout().lock()),
        CommandSummary::Test(summary) => print_test(summary, &mut io::stdout().lock()),
        CommandSummary::Usage(message) => eprintln!("Error: {}", message),
    }
}

/// Announce one exported template file.
pub fn print_written(path: &Path) {
    println!("Wrote to {}", path.display());
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

fn print_sync<W: Write>(summary: &SyncSummary, warning_count: usize, writer: &mut W) {
    for path in &summary.irregular_templates {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let _ = writeln!(
            writer,
            "{}: \"{}\" will not export under the same name",
            "warning".bold().yellow(),
            name
        );
        let _ = writeln!(
            writer,
            "  {} {} add its key to the irregular key table",
            "=".blue(),
            "hint:".bold().cyan()
        );
    }

    if warning_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} in the catalog will not round-trip through export",
            "warning:".bold().yellow(),
            warning_count,
            plural(warning_count, "key", "keys")
        );
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Synced {} {} into {}",
            summary.template_count,
            plural(summary.template_count, "template", "templates"),
            summary.catalog_path.display()
        )
        .green()
    );
}

fn print_export<W: Write>(summary: &ExportSummary, writer: &mut W) {
    let language_count = summary.languages.len();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Exported {} {} for {} {} into {}",
            summary.file_count,
            plural(summary.file_count, "template", "templates"),
            language_count,
            plural(language_count, "language", "languages"),
            summary.dest_dir.display()
        )
        .green()
    );
}

fn print_test<W: Write>(summary: &TestSummary, writer: &mut W) {
    if summary.matches {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{} and {} share the same {} {}",
                summary.source_path.display(),
                summary.doc_path.display(),
                summary.source_key_count,
                plural(summary.source_key_count, "key", "keys")
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}: {} ({} {}) and {} ({} {}) have different key sets",
            FAILURE_MARK.red(),
            "error".bold().red(),
            summary.source_path.display(),
            summary.source_key_count,
            plural(summary.source_key_count, "key", "keys"),
            summary.doc_path.display(),
            summary.doc_key_count,
            plural(summary.doc_key_count, "key", "keys"),
        );
    }
}
