//! realestate: CLI helper for the Real Estate app's development environment.
//!
//! This is the main entry point for the `realestate` CLI. It parses global
//! options, loads the config, builds the command registry, and hands the
//! remaining tokens to the router. Errors are reported with exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod process;
mod router;

#[cfg(test)]
mod test_support;

use cli::Cli;
use commands::Registry;
use config::Config;
use error::{DevError, Result};
use process::SystemRunner;
use router::{Outcome, Router, GREETING};
use std::io::{ErrorKind, Write};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = if err.use_stderr() {
                exit_codes::PARSE_ERROR
            } else {
                exit_codes::SUCCESS
            };
            return ExitCode::from(code as u8);
        }
    };
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        DevError::ConfigError(format!("failed to determine working directory: {}", e))
    })?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;
    let registry = Registry::builtin()?;
    debug!(commands = registry.len(), "registry built");

    let router = Router::new(&registry, &config, SystemRunner);

    match router.dispatch(&cli.command) {
        Ok(outcome) => relay(&mut std::io::stdout().lock(), &outcome),
        Err(err @ DevError::UnknownCommand(_)) => {
            eprint!("{}", router.usage());
            eprintln!();
            Err(err)
        }
        Err(err) => Err(err),
    }
}

/// Write an outcome to `out`.
///
/// A reader that closed the pipe early is not an error; any other write
/// failure is.
fn relay<W: Write>(out: &mut W, outcome: &Outcome) -> Result<()> {
    let written = match outcome {
        Outcome::Greeting => writeln!(out, "{}", GREETING),
        Outcome::Help(text) => out.write_all(text.as_bytes()),
        Outcome::Completed(result) => out.write_all(&result.stdout),
    }
    .and_then(|()| out.flush());

    match written {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("stdout closed before output was written");
            Ok(())
        }
        Err(e) => Err(DevError::OutputError(e)),
    }
}

/// Initialize the tracing subscriber.
///
/// Diagnostics go to stderr so relayed tool output on stdout stays clean.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
