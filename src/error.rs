//! Error types for the realestate CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for realestate operations.
#[derive(Error, Debug)]
pub enum DevError {
    /// No registered command matches the given name or alias.
    #[error("unknown command '{0}'. Run `realestate help` to list available commands.")]
    UnknownCommand(String),

    /// The command was given the wrong number of positional arguments.
    #[error("{0}")]
    UsageError(String),

    /// The external executable could not be started.
    #[error("failed to execute '{program}': {source}. Is it installed and in PATH?")]
    SubprocessLaunchFailure {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external process ran but exited unsuccessfully.
    #[error("{}", exit_failure_message(.program, .code, .stderr))]
    SubprocessExitFailure {
        program: String,
        code: Option<i32>,
        stderr: Option<String>,
    },

    /// Relayed output could not be written to stdout.
    #[error("failed to write output: {0}")]
    OutputError(#[source] std::io::Error),

    /// The configuration file could not be read, parsed, or validated.
    #[error("{0}")]
    ConfigError(String),
}

fn exit_failure_message(program: &str, code: &Option<i32>, stderr: &Option<String>) -> String {
    let status = match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    };

    match stderr.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => format!("{} failed ({}): {}", program, status, text),
        _ => format!("{} failed ({})", program, status),
    }
}

impl DevError {
    /// Returns the process exit code for this error.
    ///
    /// A failing subprocess's own exit code is passed through.
    pub fn exit_code(&self) -> i32 {
        match self {
            DevError::UnknownCommand(_) => exit_codes::USER_ERROR,
            DevError::UsageError(_) => exit_codes::USER_ERROR,
            DevError::ConfigError(_) => exit_codes::USER_ERROR,
            DevError::SubprocessLaunchFailure { .. } => exit_codes::LAUNCH_FAILURE,
            DevError::OutputError(_) => exit_codes::OUTPUT_FAILURE,
            DevError::SubprocessExitFailure { code, .. } => match code {
                Some(code) if (1..=255).contains(code) => *code,
                _ => exit_codes::SUBPROCESS_FAILURE,
            },
        }
    }
}

/// Result type alias for realestate operations.
pub type Result<T> = std::result::Result<T, DevError>;
