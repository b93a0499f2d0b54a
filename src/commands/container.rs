//! Commands that run inside the app containers via `docker exec`.

use super::{Arity, CommandSpec};
use crate::config::Config;
use crate::process::{Capture, Invocation};

pub(super) fn commands() -> [CommandSpec; 4] {
    [
        CommandSpec {
            name: "cli-server",
            alias: "cs",
            usage: "Access go container cli",
            arg_name: None,
            arity: Arity::None,
            capture: Capture::StdoutOnly,
            handler: server_shell,
        },
        CommandSpec {
            name: "cli-database",
            alias: "cdb",
            usage: "Access database container cli",
            arg_name: None,
            arity: Arity::None,
            capture: Capture::StdoutOnly,
            handler: database_shell,
        },
        CommandSpec {
            name: "js-bundle",
            alias: "jsb",
            usage: "Bundle JavaScript assets and watch for changes",
            arg_name: None,
            arity: Arity::None,
            capture: Capture::StdoutOnly,
            handler: js_bundle,
        },
        CommandSpec {
            name: "js-install",
            alias: "jsi",
            usage: "Install NPM package",
            arg_name: Some("package"),
            arity: Arity::Optional,
            capture: Capture::Both,
            handler: js_install,
        },
    ]
}

fn docker_exec(container: &str, interactive: bool) -> Invocation {
    let inv = Invocation::new("docker").arg("exec");
    let inv = if interactive { inv.arg("-it") } else { inv };
    inv.arg(container)
}

fn server_shell(config: &Config, _arg: Option<&str>) -> Invocation {
    docker_exec(&config.server_container, true).arg("/bin/sh")
}

fn database_shell(config: &Config, _arg: Option<&str>) -> Invocation {
    docker_exec(&config.database_container, true).arg("/bin/bash")
}

fn js_bundle(config: &Config, _arg: Option<&str>) -> Invocation {
    docker_exec(&config.server_container, true).args(["/bin/sh", "-c", "npm run bundle"])
}

/// Without a package name, `npm install` installs everything in package.json.
fn js_install(config: &Config, package: Option<&str>) -> Invocation {
    let inv = docker_exec(&config.server_container, false).args(["npm", "install"]);
    match package {
        Some(package) => inv.arg(package),
        None => inv,
    }
}
