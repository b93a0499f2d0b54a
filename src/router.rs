//! Command router for realestate.
//!
//! Resolves the first token of the argument vector against the [`Registry`],
//! checks the remaining tokens against the command's arity, and runs the
//! resulting invocation through a [`CommandRunner`]. One process at most,
//! always awaited before returning.

use crate::commands::{CommandSpec, Registry};
use crate::config::Config;
use crate::error::{DevError, Result};
use crate::process::{CommandRunner, ExecutionResult};
use std::fmt::Write as _;
use tracing::{debug, info};

/// Printed when no command is given.
pub const GREETING: &str = "Hello friend!";

const HELP_NAME: &str = "help";
const HELP_ALIAS: &str = "h";
const HELP_USAGE: &str = "Shows a list of commands or help for one command";

/// What a successful dispatch produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No command was given.
    Greeting,
    /// `help` was requested; the text to print.
    Help(String),
    /// An external tool ran and exited successfully.
    Completed(ExecutionResult),
}

/// Routes command tokens to registered commands.
pub struct Router<'a, R> {
    registry: &'a Registry,
    config: &'a Config,
    runner: R,
}

impl<'a, R: CommandRunner> Router<'a, R> {
    pub fn new(registry: &'a Registry, config: &'a Config, runner: R) -> Self {
        Self {
            registry,
            config,
            runner,
        }
    }

    /// Resolve a token to a command by exact name or alias.
    pub fn resolve(&self, token: &str) -> Result<&'a CommandSpec> {
        self.registry
            .find(token)
            .ok_or_else(|| DevError::UnknownCommand(token.to_string()))
    }

    /// Dispatch `tokens` (command name followed by its arguments).
    pub fn dispatch(&self, tokens: &[String]) -> Result<Outcome> {
        let Some((first, rest)) = tokens.split_first() else {
            debug!("no command given");
            return Ok(Outcome::Greeting);
        };

        if first == HELP_NAME || first == HELP_ALIAS {
            return self.help(rest);
        }

        let spec = self.resolve(first)?;
        debug!(command = spec.name, token = %first, "resolved command");

        let arg = spec.arity.take(spec.name, rest)?;
        let invocation = spec.invocation(self.config, arg);
        info!(command = spec.name, invocation = %invocation, "running");

        let result = self.runner.run(&invocation, spec.capture)?;
        result
            .into_result(&invocation.program, spec.capture)
            .map(Outcome::Completed)
    }

    fn help(&self, rest: &[String]) -> Result<Outcome> {
        match rest {
            [] => Ok(Outcome::Help(self.usage())),
            [token] if token == HELP_NAME || token == HELP_ALIAS => {
                Ok(Outcome::Help(format!("{} - {}\n", HELP_NAME, HELP_USAGE)))
            }
            [token] => {
                let spec = self.resolve(token)?;
                Ok(Outcome::Help(command_usage(spec)))
            }
            _ => Err(DevError::UsageError(
                "'help' takes at most one command name".to_string(),
            )),
        }
    }

    /// Top-level usage listing, commands sorted by name.
    ///
    /// The built-in `help` row is appended after the sorted commands rather
    /// than sorted in with them.
    pub fn usage(&self) -> String {
        let mut rows: Vec<(String, &str)> = self
            .registry
            .iter()
            .map(|spec| (format!("{}, {}", spec.name, spec.alias), spec.usage))
            .collect();
        rows.push((format!("{}, {}", HELP_NAME, HELP_ALIAS), HELP_USAGE));

        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {}\n{}\n",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            crate::cli::ABOUT
        );
        let _ = writeln!(out, "USAGE:\n    {} [OPTIONS] [COMMAND] [ARG]\n", env!("CARGO_PKG_NAME"));
        let _ = writeln!(out, "COMMANDS:");
        for (label, usage) in rows {
            let _ = writeln!(out, "    {:<width$}    {}", label, usage, width = width);
        }
        out
    }
}

/// Usage text for a single command.
fn command_usage(spec: &CommandSpec) -> String {
    format!(
        "{} - {}\n\nUSAGE:\n    {} {}\n\nALIAS:\n    {}\n",
        spec.name,
        spec.usage,
        env!("CARGO_PKG_NAME"),
        spec.synopsis(),
        spec.alias
    )
}
