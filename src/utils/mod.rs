//! Utility modules for utilkit

pub mod command;
pub mod files;
pub mod singleton;

pub use command::{run_command, run_command_blocking, ProcessOutput, RunOptions};
pub use files::{hash_file, hash_tree, Fallback};
pub use singleton::{instance, Singleton};
