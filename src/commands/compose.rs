//! docker-compose lifecycle commands: `start`, `stop`, `database`.

use super::{Arity, CommandSpec};
use crate::config::Config;
use crate::process::{Capture, Invocation};

pub(super) fn commands() -> [CommandSpec; 3] {
    [
        CommandSpec {
            name: "start",
            alias: "st",
            usage: "Start docker",
            arg_name: None,
            arity: Arity::None,
            capture: Capture::StdoutOnly,
            handler: start,
        },
        CommandSpec {
            name: "stop",
            alias: "sp",
            usage: "Stop docker",
            arg_name: None,
            arity: Arity::None,
            capture: Capture::StdoutOnly,
            handler: stop,
        },
        CommandSpec {
            name: "database",
            alias: "db",
            usage: "Access database (psql) CLI",
            arg_name: None,
            arity: Arity::None,
            capture: Capture::Both,
            handler: database,
        },
    ]
}

fn compose(config: &Config) -> Invocation {
    Invocation::new("docker-compose")
        .arg("-f")
        .arg(&config.compose_file)
}

fn start(config: &Config, _arg: Option<&str>) -> Invocation {
    compose(config).args(["up", "-d"])
}

fn stop(config: &Config, _arg: Option<&str>) -> Invocation {
    compose(config).arg("down")
}

fn database(config: &Config, _arg: Option<&str>) -> Invocation {
    compose(config)
        .arg("exec")
        .arg(&config.database_service)
        .arg("psql")
        .arg("-U")
        .arg(&config.database_user)
        .arg("-d")
        .arg(&config.database_name)
}
