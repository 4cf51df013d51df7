use std::process::ExitCode;

/// Exit status of the CLI.
///
/// - `Success` (0): Action completed
/// - `Failure` (1): Usage error, or `test` found differing key sets
/// - `Error` (2): Action aborted on an I/O, JSON or config error
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Action completed.
    Success,
    /// Bad invocation or failed consistency check.
    Failure,
    /// Action aborted by an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
