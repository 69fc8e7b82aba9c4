//! Exit codes for the CLI
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning | Example |
//! |------|----------|---------|---------|
//! | 0 | `SUCCESS` | Success | All files hashed, header printed |
//! | 1 | `ERROR` | Runtime error | File not found, command failed to start |
//! | 2 | `INVALID_ARGS` | Invalid arguments | Unknown SGR code, missing command |
//!
//! `utilkit run` exits with the exit code of the command it ran; a command
//! killed by a signal maps to `ERROR`.

/// Success - operation completed normally.
pub const SUCCESS: i32 = 0;

/// Runtime error (unreadable file, spawn failure, bad configuration).
pub const ERROR: i32 = 1;

/// Invalid arguments, matching clap's own usage-error code.
pub const INVALID_ARGS: i32 = 2;

/// Exit code to report for a finished child process
pub fn from_child(exit_code: i32) -> i32 {
    if exit_code < 0 {
        ERROR
    } else {
        exit_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [SUCCESS, ERROR, INVALID_ARGS];
        for i in 0..codes.len() {
            for j in (i + 1)..codes.len() {
                assert_ne!(
                    codes[i], codes[j],
                    "Exit codes should be unique: {} and {} are both {}",
                    i, j, codes[i]
                );
            }
        }
    }

    #[test]
    fn test_from_child() {
        assert_eq!(from_child(0), SUCCESS);
        assert_eq!(from_child(7), 7);
        assert_eq!(from_child(-1), ERROR);
    }
}
