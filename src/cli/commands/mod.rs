//! CLI commands module

pub mod hash;
pub mod header;
pub mod run;

use clap::Args;
use std::path::PathBuf;

use crate::term::SgrCode;

/// Arguments for the hash command
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Files or directories to hash
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Number of times to run the command
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub repeat: u32,

    /// Print the captured results as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Capture output without echoing it
    #[arg(short, long)]
    pub quiet: bool,

    /// Extra environment variable for the command
    #[arg(short, long = "env", value_name = "KEY=VALUE", value_parser = parse_env_pair)]
    pub env: Vec<(String, String)>,

    /// Working directory for the command
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// The command and its arguments
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    pub command: Vec<String>,
}

/// Arguments for the header command
#[derive(Args, Debug)]
pub struct HeaderArgs {
    /// Header text
    pub text: String,

    /// Fill used on both sides of the text
    #[arg(short, long)]
    pub padding: Option<String>,

    /// Spaces before the text
    #[arg(long, value_name = "N")]
    pub left_spaces: Option<usize>,

    /// Spaces after the text
    #[arg(long, value_name = "N")]
    pub right_spaces: Option<usize>,

    /// Style code to apply, repeatable (bold, red, bg_blue, ...)
    #[arg(long = "code", value_name = "CODE")]
    pub codes: Vec<SgrCode>,

    /// Emit style codes even when stdout is not a terminal
    #[arg(long)]
    pub force_sgr: bool,

    /// Emit the padding even when stdout is not a terminal
    #[arg(long)]
    pub force_prefix: bool,

    /// Print to stderr instead of stdout
    #[arg(long)]
    pub stderr: bool,
}

fn parse_env_pair(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((key, val)) if !key.is_empty() => Ok((key.to_string(), val.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", value)),
    }
}
