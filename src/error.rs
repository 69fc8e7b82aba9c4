//! Error types for utilkit
//!
//! This module defines custom error types using `thiserror` for better error handling
//! and more descriptive error messages throughout the crate.

use thiserror::Error;

/// Main error type for utilkit
#[derive(Error, Debug)]
pub enum UtilkitError {
    /// Timing-related errors
    #[error("Timing error: {0}")]
    Timing(#[from] TimingError),

    /// Terminal output errors
    #[error("Terminal error: {0}")]
    Term(#[from] TermError),

    /// Subprocess errors
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    /// Hashing errors
    #[error("Hash error: {0}")]
    Hash(#[from] HashError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised by stopwatch statistics
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingError {
    /// A statistic was requested from a stopwatch without laps
    #[error("no laps recorded")]
    NoLaps,

    /// A timing is negative or too large for `std::time::Duration`
    #[error("{nanoseconds}ns does not fit in std::time::Duration")]
    OutOfRange {
        /// The offending nanosecond count
        nanoseconds: i128,
    },
}

/// Errors that occur while printing styled strings
#[derive(Error, Debug)]
pub enum TermError {
    /// A header was requested for an output holding more than one string
    #[error("only one string is allowed for the header, got {count}")]
    HeaderItems {
        /// Number of strings in the output
        count: usize,
    },

    /// A style name did not match any SGR code
    #[error("Unknown SGR code '{name}'")]
    UnknownCode {
        /// The name that failed to parse
        name: String,
    },

    /// Writing to the output stream failed
    #[error("Failed to write to {stream}: {source}")]
    Write {
        /// Name of the stream (stdout or stderr)
        stream: &'static str,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

/// Errors that occur while running a subprocess
#[derive(Error, Debug)]
pub enum CommandError {
    /// The process could not be started
    #[error("Failed to execute '{program}': {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Reading from or waiting on the process failed
    #[error("I/O error while running '{program}': {source}")]
    Io {
        /// Program being run
        program: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The process exited before its id could be read
    #[error("Process '{program}' has no pid")]
    MissingPid {
        /// Program being run
        program: String,
    },
}

/// Errors that occur while hashing files
#[derive(Error, Debug)]
pub enum HashError {
    /// Failed to open or read a file
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to walk a directory
    #[error("Failed to walk directory '{path}': {source}")]
    Walk {
        /// Root of the walk
        path: String,
        /// The underlying walkdir error
        source: walkdir::Error,
    },
}

/// Errors that occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        /// Path to the config file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to parse the configuration file
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        /// Path to the config file
        path: String,
        /// The underlying TOML error
        source: toml::de::Error,
    },
}
