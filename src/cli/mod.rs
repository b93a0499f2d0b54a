//! CLI argument parsing for realestate.
//!
//! Clap handles the global options only. The command name and its arguments
//! are collected verbatim and resolved by the router against the command
//! registry, so the registry stays the single source of command names.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// One-line description shared by `--help` and the router's usage listing.
pub const ABOUT: &str = "CLI Helper for Real Estate app";

/// CLI Helper for Real Estate app.
///
/// Wraps docker-compose, migrate, docker and npm for the local development
/// environment. Run `realestate help` to list commands.
#[derive(Parser, Debug)]
#[command(name = "realestate")]
#[command(author, version, about = ABOUT, long_about = None)]
pub struct Cli {
    /// Path to a YAML config file (default: ./realestate.yaml when present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Command name or alias, followed by its argument.
    #[arg(value_name = "COMMAND", trailing_var_arg = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    ///
    /// `--help` and `--version` come back as errors too; the caller prints
    /// them and picks the exit code.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
