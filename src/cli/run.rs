use super::{
    args::{Action, Arguments},
    commands::{
        CommandResult, ProjectContext, consistency::check_keys, export::export, sync::sync,
    },
};
use anyhow::Result;

/// Dispatches the parsed arguments to the matching action.
///
/// Usage errors are returned as a failed `CommandResult` before any file is
/// touched; I/O and parse errors come back as `Err`.
pub fn run(
    Arguments {
        action,
        destdir,
        common,
    }: Arguments,
) -> Result<CommandResult> {
    match action {
        Action::Sync => sync(&ProjectContext::new(&common)?),
        Action::Export => {
            let Some(destdir) = destdir else {
                return Ok(CommandResult::usage_error(
                    "--destdir is required for export",
                ));
            };
            export(&ProjectContext::new(&common)?, &destdir)
        }
        Action::Test => check_keys(&ProjectContext::new(&common)?),
    }
}
