use std::ffi::CString;
use std::fmt;
use std::io;

use libc::c_int;

use crate::{Error, Result};

/// Raw wait status as returned by `system(3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status(c_int);

impl Status {
    pub fn success(self) -> bool {
        self.0 == 0
    }

    /// Exit code of the shell, `None` if it was killed by a signal.
    pub fn code(self) -> Option<c_int> {
        if libc::WIFEXITED(self.0) {
            Some(libc::WEXITSTATUS(self.0))
        } else {
            None
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code() {
            Some(code) => write!(f, "exit code {}", code),
            None => write!(f, "wait status {:#x}", self.0),
        }
    }
}

/// Runs `command` through `/bin/sh -c`, inheriting stdin, stdout and stderr,
/// and blocks until it finishes.
pub fn system(command: &str) -> Result<Status> {
    let command = CString::new(command)?;
    let status = unsafe { libc::system(command.as_ptr()) };
    if status == -1 {
        return Err(Error::Spawn(io::Error::last_os_error()));
    }
    Ok(Status(status))
}
