pub(crate) mod consistency;
mod command_result;
mod context;
pub(crate) mod export;
pub(crate) mod sync;

pub use command_result::{CommandResult, CommandSummary, ExportSummary, SyncSummary, TestSummary};
pub use context::ProjectContext;
