//! External process runner for realestate.
//!
//! Every command ends in exactly one external tool invocation. Invocations are
//! always an explicit argument vector handed to `std::process::Command`; user
//! input is never spliced into a shell string.

use crate::error::{DevError, Result};
use std::fmt;
use std::process::{Command, Output, Stdio};
use tracing::{debug, warn};

/// Which output streams are captured from the child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Capture stdout and stderr; stderr is reported when the tool fails.
    Both,
    /// Capture stdout only; stderr is discarded.
    StdoutOnly,
}

/// A fully resolved external program call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Create an invocation of `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Program followed by its arguments.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for Invocation {
    /// Renders the invocation the way a user would type it into a shell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&shell_words::join(self.argv()))
    }
}

/// Raw output of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// Exit code, or `None` when the process was terminated by a signal.
    pub status: Option<i32>,
}

impl ExecutionResult {
    fn from_output(output: Output) -> Self {
        Self {
            status: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }

    /// Returns true if the process exited with code 0.
    pub fn is_success(&self) -> bool {
        self.status == Some(0)
    }

    /// Standard output decoded lossily.
    #[cfg(test)]
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    /// Standard error decoded lossily.
    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }

    /// Convert a finished run into a `Result`, attaching stderr to failures
    /// when it was captured.
    pub fn into_result(self, program: &str, capture: Capture) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }

        let stderr = match capture {
            Capture::Both => Some(self.stderr_text()),
            Capture::StdoutOnly => None,
        };

        Err(DevError::SubprocessExitFailure {
            program: program.to_string(),
            code: self.status,
            stderr,
        })
    }
}

/// Runs invocations. The router only talks to processes through this trait.
pub trait CommandRunner {
    /// Run `invocation` to completion and return whatever it produced.
    ///
    /// Only a failure to start the process is an error here; a non-zero exit
    /// is reported through [`ExecutionResult::status`].
    fn run(&self, invocation: &Invocation, capture: Capture) -> Result<ExecutionResult>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, invocation: &Invocation, capture: Capture) -> Result<ExecutionResult> {
        (**self).run(invocation, capture)
    }
}

/// Runs invocations as real child processes, blocking until they exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation, capture: Capture) -> Result<ExecutionResult> {
        let stderr = match capture {
            Capture::Both => Stdio::piped(),
            Capture::StdoutOnly => Stdio::null(),
        };

        debug!(command = %invocation, ?capture, "spawning");

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(stderr)
            .output()
            .map_err(|e| {
                warn!(program = %invocation.program, error = %e, "failed to spawn");
                DevError::SubprocessLaunchFailure {
                    program: invocation.program.clone(),
                    source: e,
                }
            })?;

        let result = ExecutionResult::from_output(output);
        debug!(program = %invocation.program, status = ?result.status, "process exited");
        Ok(result)
    }
}
