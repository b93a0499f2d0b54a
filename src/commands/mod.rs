//! Command registry for realestate.
//!
//! Each command is a static [`CommandSpec`] whose handler turns the loaded
//! [`Config`] and the optional positional argument into one [`Invocation`].
//! The [`Registry`] is built once in `main` and handed to the router.

mod compose;
mod container;
mod migrate;


use crate::config::Config;
use crate::error::{DevError, Result};
use crate::process::{Capture, Invocation};
use std::collections::HashSet;

/// Names the router handles itself; commands may not claim them.
pub const RESERVED_NAMES: &[&str] = &["help", "h"];

/// How many positional arguments a command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// No positional argument.
    None,
    /// Zero or one positional argument.
    Optional,
    /// Exactly one positional argument.
    Required,
}

impl Arity {
    /// Check `args` against this arity, returning the positional argument if any.
    pub fn take<'a>(self, command: &str, args: &'a [String]) -> Result<Option<&'a str>> {
        let max = match self {
            Arity::None => 0,
            Arity::Optional | Arity::Required => 1,
        };

        if self == Arity::Required && args.is_empty() {
            return Err(DevError::UsageError(format!(
                "'{}' requires an argument. Run `realestate help {}` for usage.",
                command, command
            )));
        }

        if args.len() > max {
            return Err(DevError::UsageError(format!(
                "'{}' takes at most {} argument(s), got {}: {}",
                command,
                max,
                args.len(),
                shell_words::join(args)
            )));
        }

        Ok(args.first().map(String::as_str))
    }
}

/// Builds the external invocation for a command.
pub type Handler = fn(&Config, Option<&str>) -> Invocation;

/// Static registration record connecting a name and alias to a handler.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub alias: &'static str,
    pub usage: &'static str,
    /// Placeholder shown for the positional argument in help output.
    pub arg_name: Option<&'static str>,
    pub arity: Arity,
    pub capture: Capture,
    pub handler: Handler,
}

impl CommandSpec {
    /// Returns true if `token` is this command's name or alias.
    pub fn matches(&self, token: &str) -> bool {
        self.name == token || self.alias == token
    }

    /// Build the invocation for the given positional argument.
    pub fn invocation(&self, config: &Config, arg: Option<&str>) -> Invocation {
        (self.handler)(config, arg)
    }

    /// One-line synopsis, e.g. `migrate-create <name>`.
    pub fn synopsis(&self) -> String {
        match (self.arity, self.arg_name) {
            (Arity::Required, Some(arg)) => format!("{} <{}>", self.name, arg),
            (Arity::Optional, Some(arg)) => format!("{} [{}]", self.name, arg),
            _ => self.name.to_string(),
        }
    }
}

/// Immutable table of commands, ordered by name.
#[derive(Debug, Clone)]
pub struct Registry {
    commands: Vec<CommandSpec>,
}

impl Registry {
    /// Build a registry, rejecting duplicate or reserved names and aliases.
    pub fn new(mut commands: Vec<CommandSpec>) -> Result<Self> {
        let mut seen: HashSet<&'static str> = RESERVED_NAMES.iter().copied().collect();

        for spec in &commands {
            for key in [spec.name, spec.alias] {
                if !seen.insert(key) {
                    return Err(DevError::ConfigError(format!(
                        "command name or alias '{}' is registered twice or reserved",
                        key
                    )));
                }
            }
        }

        commands.sort_by(|a, b| a.name.cmp(b.name));
        Ok(Self { commands })
    }

    /// The built-in development environment commands.
    pub fn builtin() -> Result<Self> {
        let mut commands = Vec::new();
        commands.extend(compose::commands());
        commands.extend(migrate::commands());
        commands.extend(container::commands());
        Self::new(commands)
    }

    /// Find a command by exact name or alias (case-sensitive).
    pub fn find(&self, token: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|spec| spec.matches(token))
    }

    /// Commands in lexicographic order of name.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}
