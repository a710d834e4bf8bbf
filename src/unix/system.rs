use libc::{self, c_char, c_int};

use nix::errno::Errno;
use nix::sys::wait::WaitPidFlag;
use nix::unistd::Pid;
use nix::Result;
use std::os::unix::io::RawFd;

pub fn waitpid(pid: Pid, options: WaitPidFlag) -> Result<(Pid, c_int)> {
    let mut status: c_int = 0;
    let res = unsafe { libc::waitpid(pid.as_raw(), &mut status, options.bits()) };

    Errno::result(res).map(|pid| (Pid::from_raw(pid), status))
}

/// Replaces the process image, returning only on failure.
///
/// `argv` must be null-terminated and is prepared before fork, so nothing here
/// allocates.
pub fn execvp(argv: &[*const c_char]) -> Errno {
    unsafe { libc::execvp(argv[0], argv.as_ptr()) };

    Errno::last()
}

/// Writes `label` and `pid` followed by a newline straight to `fd`.
///
/// Runs between fork and exec, so it must not allocate or take locks.
pub fn write_pid_line(fd: RawFd, label: &[u8], pid: Pid) {
    let mut buf = [0u8; 96];
    let mut len = 0;
    for &b in label.iter().take(buf.len() - 24) {
        buf[len] = b;
        len += 1;
    }
    len += format_decimal(pid.as_raw() as i64, &mut buf[len..]);
    buf[len] = b'\n';
    len += 1;

    write_all(fd, &buf[..len]);
}

/// Writes `prefix: <errno description>` and a newline to `fd`, like perror.
pub fn write_errno_line(fd: RawFd, prefix: &[u8], errno: Errno) {
    write_all(fd, prefix);
    write_all(fd, b": ");
    write_all(fd, errno.desc().as_bytes());
    write_all(fd, b"\n");
}

fn write_all(fd: RawFd, mut bytes: &[u8]) {
    while !bytes.is_empty() {
        let res = unsafe { libc::write(fd, bytes.as_ptr() as *const libc::c_void, bytes.len()) };
        match Errno::result(res) {
            Ok(0) => return,
            Ok(n) => bytes = &bytes[n as usize..],
            Err(Errno::EINTR) => {}
            // Nothing sensible left to do with a broken diagnostics stream.
            Err(_) => return,
        }
    }
}

fn format_decimal(value: i64, out: &mut [u8]) -> usize {
    let mut digits = [0u8; 20];
    let mut n = value.unsigned_abs();
    let mut count = 0;
    loop {
        digits[count] = b'0' + (n % 10) as u8;
        count += 1;
        n /= 10;
        if n == 0 {
            break;
        }
    }

    let mut len = 0;
    if value < 0 {
        out[len] = b'-';
        len += 1;
    }
    for i in (0..count).rev() {
        out[len] = digits[i];
        len += 1;
    }
    len
}
