use super::error::{Error, Result};
use super::process::ProcessHandle;
use super::system;
use crate::process::TerminationOutcome;
use log::debug;
use nix::errno::Errno;
use nix::sys::wait::WaitPidFlag;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct WaitOptions {
    /// Also resolve the wait when the child is stopped by a signal.
    pub observe_stops: bool,
}

impl WaitOptions {
    fn flags(&self) -> WaitPidFlag {
        if self.observe_stops {
            WaitPidFlag::WUNTRACED
        } else {
            WaitPidFlag::empty()
        }
    }
}

/// Calls `op` again for as long as it is interrupted by a signal.
pub fn retry_on_interrupt<T, F>(mut op: F) -> nix::Result<T>
where
    F: FnMut() -> nix::Result<T>,
{
    loop {
        match op() {
            Err(Errno::EINTR) => debug!("interrupted by signal, retrying"),
            result => return result,
        }
    }
}

#[derive(Debug, Default)]
pub struct Supervisor {
    options: WaitOptions,
}

impl Supervisor {
    pub fn new(options: WaitOptions) -> Supervisor {
        Supervisor { options }
    }

    /// Blocks until the child behind `handle` changes state.
    pub fn wait_for(&self, handle: ProcessHandle) -> Result<TerminationOutcome> {
        let pid = handle.pid();
        let flags = self.options.flags();

        debug!("waiting for pid {}", pid);
        let (waited, status) = retry_on_interrupt(|| system::waitpid(pid, flags))
            .map_err(|source| Error::Wait { pid, source })?;
        debug_assert_eq!(waited, pid);

        let outcome = TerminationOutcome::from_raw(status);
        debug!("pid {} resolved: {:?}", pid, outcome);
        Ok(outcome)
    }
}
