//! Hash command - Print SHA256 digests

use colored::Colorize;

use super::HashArgs;
use crate::config::Config;
use crate::error::HashError;
use crate::cli::exit_codes;
use crate::utils::files::{hash_file_with_buffer, hash_tree};

pub async fn execute(args: HashArgs, config: &Config) -> anyhow::Result<i32> {
    let mut failures = 0;

    for path in &args.paths {
        let digests: Result<Vec<_>, HashError> = if path.is_dir() {
            hash_tree(path)
        } else {
            hash_file_with_buffer(path, config.hash.buffer_size)
                .map(|digest| vec![(path.clone(), digest)])
        };

        match digests {
            Ok(digests) => {
                for (file, digest) in digests {
                    println!("{}  {}", digest, file.display());
                }
            }
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        tracing::info!("{} path(s) could not be hashed", failures);
        Ok(exit_codes::ERROR)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}
