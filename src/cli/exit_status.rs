use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed; an empty extraction result is still
///   a success, the run just changes nothing.
/// - `Error` (2): Command failed due to an internal error (missing state
///   file, parse error, git failure, etc.).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command failed due to internal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
