use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Action, Arguments, CommonArgs};
pub use commands::{
    CommandResult, CommandSummary, ExportSummary, ProjectContext, SyncSummary, TestSummary,
};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let result = run::run(args)?;
    report::print(&result);
    Ok(result.exit_status())
}
