use std::path::PathBuf;

use super::super::ExitStatus;

#[derive(Debug)]
pub enum CommandSummary {
    Sync(SyncSummary),
    Export(ExportSummary),
    Test(TestSummary),
    /// The invocation was rejected before doing any work.
    Usage(String),
}

#[derive(Debug)]
pub struct SyncSummary {
    pub template_count: usize,
    pub catalog_path: PathBuf,
    /// Templates whose filename does not survive the key round-trip.
    pub irregular_templates: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct ExportSummary {
    pub dest_dir: PathBuf,
    /// Exported languages with the number of files written for each.
    pub languages: Vec<(String, usize)>,
    pub file_count: usize,
}

#[derive(Debug)]
pub struct TestSummary {
    pub source_path: PathBuf,
    pub doc_path: PathBuf,
    pub source_key_count: usize,
    pub doc_key_count: usize,
    pub matches: bool,
}

/// Result of running one action.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
}

impl CommandResult {
    pub fn usage_error(message: impl Into<String>) -> Self {
        Self {
            summary: CommandSummary::Usage(message.into()),
            error_count: 1,
            warning_count: 0,
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
