use std::collections::BTreeMap;

use anyhow::Result;

use super::{CommandResult, CommandSummary, ProjectContext, SyncSummary};
use crate::{catalog::write_canonical, templates::read_template_dir};

/// Copies the English template files into the English catalog.
pub fn sync(ctx: &ProjectContext) -> Result<CommandResult> {
    let mut templates = read_template_dir(&ctx.templates_dir)?;

    // Directory order is arbitrary. With a stable order the later of two
    // templates sharing a key always wins.
    templates.sort_by(|a, b| a.key.cmp(&b.key).then_with(|| a.text.cmp(&b.text)));

    let mut irregular_templates = Vec::new();
    let mut messages = BTreeMap::new();
    for template in templates {
        if ctx.verbose {
            eprintln!("Read {} as \"{}\"", template.path.display(), template.key);
        }
        if template.needs_irregular_entry() {
            irregular_templates.push(template.path.clone());
        }
        messages.insert(template.key, template.text);
    }

    let catalog_path = ctx.source_catalog_path();
    write_canonical(&catalog_path, &messages)?;

    Ok(CommandResult {
        warning_count: irregular_templates.len(),
        error_count: 0,
        summary: CommandSummary::Sync(SyncSummary {
            template_count: messages.len(),
            catalog_path,
            irregular_templates,
        }),
    })
}
