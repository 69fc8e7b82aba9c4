//! utilkit Library
//!
//! Small developer utilities: signed nanosecond durations and a lap
//! stopwatch, styled terminal output with centred headers, a timed
//! subprocess runner, file hashing and a per-type singleton registry.

pub mod cli;
pub mod config;
pub mod error;
pub mod term;
pub mod timing;
pub mod utils;

pub use error::UtilkitError;
pub use term::{SgrCode, StyledOutput, StyledString};
pub use timing::{Stopwatch, Timing};
