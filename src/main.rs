//! utilkit - Small developer utilities for timing, hashing and terminal output
//!
//! This is the main entry point for the CLI application.

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use utilkit::cli::{commands, exit_codes, Cli, Commands};
use utilkit::config::Config;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(exit_codes::ERROR);
        }
    };

    let result = match cli.command {
        Commands::Hash(args) => commands::hash::execute(args, &config).await,
        Commands::Run(args) => commands::run::execute(args, &config).await,
        Commands::Header(args) => commands::header::execute(args, &config).await,
    };

    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr so stdout stays clean for digests and JSON
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
