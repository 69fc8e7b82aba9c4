//! # CLI Module
//!
//! This module defines the command-line interface for utilkit using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `hash` | Print SHA256 digests of files and directories |
//! | `run` | Run a command, tee its output and report how long it took |
//! | `header` | Print a centred header line |
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//! - `-c, --config <FILE>` - Path to configuration file
//!
//! ## Examples
//!
//! ```bash
//! utilkit hash Cargo.toml src/
//! utilkit run --repeat 5 -- cargo build
//! utilkit header --padding = --code bold "Release notes"
//! ```

pub mod commands;
pub mod exit_codes;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{HashArgs, HeaderArgs, RunArgs};

/// utilkit - Small developer utilities for timing, hashing and terminal output
#[derive(Parser, Debug)]
#[command(name = "utilkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print SHA256 digests of files (directories are walked)
    Hash(HashArgs),

    /// Run a command, tee its output and report the elapsed time
    Run(RunArgs),

    /// Print a header centred in the terminal
    Header(HeaderArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::SgrCode;

    #[test]
    fn test_parse_run_with_trailing_command() {
        let cli = Cli::parse_from(["utilkit", "-vv", "run", "--repeat", "3", "--", "ls", "-la"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.repeat, 3);
                assert_eq!(args.command, vec!["ls", "-la"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_header_codes() {
        let cli = Cli::parse_from([
            "utilkit", "header", "--code", "bold", "--code", "red", "--padding", "=", "Title",
        ]);
        match cli.command {
            Commands::Header(args) => {
                assert_eq!(args.text, "Title");
                assert_eq!(args.codes, vec![SgrCode::Bold, SgrCode::Red]);
                assert_eq!(args.padding.as_deref(), Some("="));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_code() {
        let result = Cli::try_parse_from(["utilkit", "header", "--code", "sparkly", "Title"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_requires_a_command() {
        assert!(Cli::try_parse_from(["utilkit", "run"]).is_err());
    }
}
