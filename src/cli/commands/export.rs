use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, ExportSummary, ProjectContext};
use crate::{catalog::scan_catalogs, cli::report::print_written, templates::write_template};

/// Writes every language catalog out as template files below `destdir`.
///
/// The documentation catalog is skipped, as are metadata entries. Files are
/// overwritten; a failure aborts the run and leaves earlier files in place.
pub fn export(ctx: &ProjectContext, destdir: &Path) -> Result<CommandResult> {
    let dest_dir = destdir.join(&ctx.config.install_prefix);
    let files = scan_catalogs(&ctx.messages_dir)?;

    let mut languages = Vec::new();
    let mut file_count = 0;
    for file in &files {
        // Skipped by name; the documentation catalog is never parsed here.
        if file.locale == ctx.config.doc_locale {
            if ctx.verbose {
                eprintln!("Skipping documentation catalog {}", file.path.display());
            }
            continue;
        }

        let lang_dir = dest_dir.join(&file.locale);
        fs::create_dir_all(&lang_dir)
            .with_context(|| format!("Failed to create directory: {}", lang_dir.display()))?;

        let catalog = file.load()?;
        let messages = catalog.messages()?;
        for (key, value) in &messages {
            let path = write_template(&lang_dir, key, value)?;
            print_written(&path);
        }

        file_count += messages.len();
        languages.push((catalog.locale.clone(), messages.len()));
    }

    Ok(CommandResult {
        summary: CommandSummary::Export(ExportSummary {
            dest_dir,
            languages,
            file_count,
        }),
        error_count: 0,
        warning_count: 0,
    })
}
