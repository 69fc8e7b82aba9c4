//! Terminal formatting with ANSI Select Graphic Rendition codes
//!
//! - [`SgrCode`] - the individual style parameters
//! - [`StyledString`] - text with codes, a prefix and a suffix
//! - [`StyledOutput`] - several styled strings printed as one line
//! - [`Terminal`] - the output seam ([`StdTerminal`] or [`BufferTerminal`])
//! - [`env`] - environment overrides for the force flags

pub mod codes;
pub mod env;
pub mod output;
pub mod styled;
pub mod terminal;

pub use codes::SgrCode;
pub use env::EnvOverrides;
pub use output::StyledOutput;
pub use styled::{HeaderOptions, StyledString};
pub use terminal::{BufferTerminal, StdTerminal, Stream, Terminal};

/// Platform line ending, the default `end` for printing
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Platform line ending, the default `end` for printing
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";
