//! Schema migration commands backed by the `migrate` CLI.

use super::{Arity, CommandSpec};
use crate::config::Config;
use crate::process::{Capture, Invocation};

pub(super) fn commands() -> [CommandSpec; 3] {
    [
        CommandSpec {
            name: "migrate-create",
            alias: "mc",
            usage: "Creates up and down migration files",
            arg_name: Some("name"),
            arity: Arity::Required,
            capture: Capture::Both,
            handler: create,
        },
        CommandSpec {
            name: "migrate-up",
            alias: "mu",
            usage: "Run up migrations",
            arg_name: None,
            arity: Arity::None,
            capture: Capture::StdoutOnly,
            handler: up,
        },
        CommandSpec {
            name: "migrate-down",
            alias: "md",
            usage: "Run down migrations",
            arg_name: None,
            arity: Arity::None,
            capture: Capture::StdoutOnly,
            handler: down,
        },
    ]
}

/// The migration name is passed through untouched as the `-seq` value.
fn create(config: &Config, name: Option<&str>) -> Invocation {
    Invocation::new("migrate")
        .args(["create", "-ext", "sql", "-dir"])
        .arg(&config.migrations_dir)
        .arg("-seq")
        .arg(name.unwrap_or_default())
}

fn against_database(config: &Config, direction: &str) -> Invocation {
    Invocation::new("migrate")
        .arg("-database")
        .arg(&config.database_url)
        .arg("-path")
        .arg(&config.migrations_dir)
        .arg(direction)
}

fn up(config: &Config, _arg: Option<&str>) -> Invocation {
    against_database(config, "up")
}

fn down(config: &Config, _arg: Option<&str>) -> Invocation {
    against_database(config, "down")
}
