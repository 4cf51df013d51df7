use anyhow::Result;

use super::{CommandResult, CommandSummary, ProjectContext, TestSummary};
use crate::catalog::Catalog;

/// Checks that the English catalog and the documentation catalog have the
/// same top-level keys.
pub fn check_keys(ctx: &ProjectContext) -> Result<CommandResult> {
    let source = Catalog::load(&ctx.source_catalog_path())?;
    let doc = Catalog::load(&ctx.doc_catalog_path())?;

    let source_keys = source.key_set();
    let doc_keys = doc.key_set();
    let matches = source_keys == doc_keys;

    if ctx.verbose {
        eprintln!(
            "Compared {} key(s) in {} with {} key(s) in {}",
            source_keys.len(),
            source.path.display(),
            doc_keys.len(),
            doc.path.display()
        );
    }

    Ok(CommandResult {
        summary: CommandSummary::Test(TestSummary {
            source_key_count: source_keys.len(),
            doc_key_count: doc_keys.len(),
            source_path: source.path.clone(),
            doc_path: doc.path.clone(),
            matches,
        }),
        error_count: usize::from(!matches),
        warning_count: 0,
    })
}
