use std::process::ExitCode;

/// Process exit status of a glotsync run.
///
/// - `Success` (0): every source file and locale was processed
/// - `Failure` (1): the run finished, but some units could not be processed
/// - `Error` (2): the run could not start or was aborted (bad config, unreadable master catalog)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    Failure = 1,
    Error = 2,
}

impl ExitStatus {
    /// `Success` when no unit failed, `Failure` otherwise.
    pub fn from_failed_units(failed: usize) -> Self {
        if failed == 0 {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}
