use super::error::{Error, Result};
use super::system;
use crate::commands::Command;
use log::debug;
use nix::sys::signal::{kill, Signal};
use nix::unistd::{fork, getpid, ForkResult, Pid};
use std::ffi::CString;
use std::io::{self, Write};
use std::os::raw::c_char;
use std::os::unix::io::AsRawFd;

/// Exit code of a child whose image could not be replaced.
pub const EXEC_FAILURE_CODE: i32 = 127;

/// A spawned child that has not been collected yet.
///
/// Deliberately neither `Clone` nor `Copy`: waiting consumes the handle.
#[derive(Debug)]
pub struct ProcessHandle {
    pid: Pid,
}

impl ProcessHandle {
    #[cfg(test)]
    pub(super) fn from_pid(pid: Pid) -> ProcessHandle {
        ProcessHandle { pid }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn signal(&self, signal: Signal) -> Result<()> {
        kill(self.pid, signal).map_err(|source| Error::Kill {
            pid: self.pid,
            signal,
            source,
        })
    }
}

/// Forks a child which replaces its image with `command`.
///
/// A failed exec is not reported here: the child exits with
/// [`EXEC_FAILURE_CODE`] and the supervisor observes it.
pub fn spawn(command: Command) -> Result<ProcessHandle> {
    // Everything the child touches is allocated before fork.
    let cstr_args = command
        .as_slice()
        .iter()
        .enumerate()
        .map(|(index, arg)| {
            CString::new(arg.as_str()).map_err(|source| Error::NulInArgument { index, source })
        })
        .collect::<Result<Vec<CString>>>()?;
    let mut argv: Vec<*const c_char> = cstr_args.iter().map(|arg| arg.as_ptr()).collect();
    argv.push(std::ptr::null());

    let stdout = io::stdout();
    {
        let mut out = stdout.lock();
        writeln!(out, "Parent Process ID: {}", getpid())?;
        // the child must not inherit unflushed output
        out.flush()?;
    }
    let stdout_fd = stdout.as_raw_fd();
    let stderr_fd = io::stderr().as_raw_fd();

    debug!("spawning {} with arguments {:?}", command.program(), command.args());
    match unsafe { fork() }.map_err(Error::Fork)? {
        ForkResult::Parent { child } => {
            debug!("spawned {} as pid {}", command.program(), child);
            Ok(ProcessHandle { pid: child })
        }
        ForkResult::Child => {
            system::write_pid_line(stdout_fd, b"Child Process ID: ", getpid());

            let errno = system::execvp(&argv);

            system::write_errno_line(stderr_fd, b"execvp", errno);
            // skips atexit handlers and stdio flushing inherited from the parent
            unsafe { libc::_exit(EXEC_FAILURE_CODE) }
        }
    }
}
