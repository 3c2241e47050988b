use std::io;
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::process::{Command, Stdio};

use super::ProcessError;
use crate::core::env::Environment;

/// How a dispatched child ended, normalized to the shell's status scheme.
#[derive(Debug)]
pub enum ChildResult {
    /// Normal termination with this exit code.
    Exited(i32),
    /// Killed by this signal; the status is 128 + the signal number.
    Signaled(i32),
    /// The program image could not be installed in the child.
    ExecFailed(io::Error),
}

impl ChildResult {
    /// The value recorded as the last status and used by a bare `exit`.
    pub fn status(&self) -> i32 {
        match self {
            ChildResult::Exited(code) => *code,
            ChildResult::Signaled(signo) => 128 + signo,
            ChildResult::ExecFailed(_) => 127,
        }
    }
}

#[derive(Clone)]
pub struct ProcessRunner;

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }

    /// Spawn `path` with `argv` and the shell's environment copy, then
    /// block until that child ends.
    ///
    /// `argv` must be non-empty and `argv[0]` stays the word the user
    /// typed, not the resolved path. The child restores default signal
    /// dispositions before the image is replaced, so the shell's ignored
    /// SIGQUIT does not leak into it.
    pub fn run(
        &self,
        path: &str,
        argv: &[String],
        environment: &Environment,
    ) -> Result<ChildResult, ProcessError> {
        let mut command = Command::new(path);
        command
            .arg0(&argv[0])
            .args(&argv[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(environment.iter());

        // The only code that runs in the child between duplication and
        // image replacement.
        unsafe {
            command.pre_exec(|| {
                unsafe {
                    libc::signal(libc::SIGINT, libc::SIG_DFL);
                    libc::signal(libc::SIGQUIT, libc::SIG_DFL);
                }
                Ok(())
            });
        }

        let mut child = match command.spawn() {
            Ok(child) => child,
            // EAGAIN/ENOMEM mean the duplication itself failed and no
            // child ever existed. Anything else is the child failing to
            // exec the image; the resolver's probe has already lost its
            // race by the time the answer lands here.
            Err(err) => match err.raw_os_error() {
                Some(libc::EAGAIN | libc::ENOMEM) => return Err(ProcessError::Spawn(err)),
                _ => return Ok(ChildResult::ExecFailed(err)),
            },
        };

        let status = child.wait().map_err(ProcessError::Wait)?;
        if let Some(code) = status.code() {
            Ok(ChildResult::Exited(code))
        } else if let Some(signo) = status.signal() {
            Ok(ChildResult::Signaled(signo))
        } else {
            Err(ProcessError::Wait(io::Error::other(
                "child neither exited nor was signaled",
            )))
        }
    }
}
