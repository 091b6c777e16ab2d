//! External command execution
//!
//! The runner only needs one capability from the operating system: start a
//! program with arguments, wait for it, and hand back its exit status and
//! captured output. [`CommandRunner`] is that seam; [`SystemRunner`] is the
//! real implementation and tests plug in their own.

use crate::error::{DoctestError, DoctestResult};
use std::ffi::OsString;
use std::process::{Command, Stdio};
use tracing::debug;

/// Captured result of a completed process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub status: Option<i32>,
    /// Standard output, decoded lossily as UTF-8
    pub stdout: String,
    /// Standard error, decoded lossily as UTF-8
    pub stderr: String,
}

impl CommandOutput {
    /// True when the process exited with status zero
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Stderr followed by stdout, each trimmed, skipping empty streams
    pub fn stderrout(&self) -> String {
        [self.stderr.trim(), self.stdout.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Runs an external program to completion
pub trait CommandRunner {
    /// Run `program` with `args` and wait for it to exit.
    ///
    /// Returns `Ok` for any process that ran, whatever its exit status.
    /// Returns [`DoctestError::SpawnFailed`] when the program could not be
    /// started at all.
    fn run(&self, program: &str, args: &[OsString]) -> DoctestResult<CommandOutput>;
}

/// [`CommandRunner`] backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[OsString]) -> DoctestResult<CommandOutput> {
        debug!(program, ?args, "spawning");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| DoctestError::SpawnFailed {
                program: program.to_string(),
                source,
            })?;

        debug!(program, status = ?output.status.code(), "exited");

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
