use std::fmt;

/// How a supervised child process changed state.
///
/// Built once from the raw wait status reported by the kernel, see
/// [`TerminationOutcome::from_raw`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TerminationOutcome {
    /// The process ran to completion with exit code 0.
    ExitedNormally { code: i32 },

    /// The process ran to completion with a non-zero exit code.
    ExitedWithFailureCode { code: i32 },

    /// The process was killed by the given signal.
    KilledBySignal { signal: i32 },

    /// The process was suspended by the given signal. Only reported when
    /// stop observation is enabled.
    StoppedBySignal { signal: i32 },

    /// The status matched none of the patterns above.
    Unknown { raw_status: i32 },
}

impl TerminationOutcome {
    /// Decodes a raw status as reported by `waitpid(2)`.
    pub fn from_raw(status: libc::c_int) -> TerminationOutcome {
        if libc::WIFEXITED(status) {
            let code = libc::WEXITSTATUS(status);
            if code == 0 {
                TerminationOutcome::ExitedNormally { code }
            } else {
                TerminationOutcome::ExitedWithFailureCode { code }
            }
        } else if libc::WIFSIGNALED(status) {
            TerminationOutcome::KilledBySignal {
                signal: libc::WTERMSIG(status),
            }
        } else if libc::WIFSTOPPED(status) {
            TerminationOutcome::StoppedBySignal {
                signal: libc::WSTOPSIG(status),
            }
        } else {
            TerminationOutcome::Unknown { raw_status: status }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TerminationOutcome::ExitedNormally { .. })
    }
}

impl fmt::Display for TerminationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationOutcome::ExitedNormally { .. } => write!(f, "Child process has completed."),
            TerminationOutcome::ExitedWithFailureCode { code } => {
                write!(f, "Child exited with non-zero code: {}", code)
            }
            TerminationOutcome::KilledBySignal { signal } => {
                write!(f, "Child terminated by signal: {}", signal)
            }
            TerminationOutcome::StoppedBySignal { signal } => {
                write!(f, "Child was stopped by signal: {}", signal)
            }
            TerminationOutcome::Unknown { raw_status } => write!(
                f,
                "Child ended in an unexpected state (status={}).",
                raw_status
            ),
        }
    }
}
