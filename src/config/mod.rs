//! Configuration module

pub mod loader;

pub use loader::Config;

use serde::{Deserialize, Serialize};

use crate::term::{HeaderOptions, SgrCode, StyledOutput, StyledString, LINE_ENDING};
use crate::utils::files::DEFAULT_BUFFER_SIZE;

/// Terminal configuration; unset values fall back to the environment
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TermConfig {
    /// Emit style codes even when not writing to a terminal
    pub force_sgr: Option<bool>,

    /// Emit prefixes and suffixes even when not writing to a terminal
    pub force_prefix: Option<bool>,
}

impl TermConfig {
    /// Apply the configured forces to a styled string
    pub fn apply(&self, styled: StyledString) -> StyledString {
        let styled = match self.force_sgr {
            Some(force) => styled.with_force_sgr(force),
            None => styled,
        };
        match self.force_prefix {
            Some(force) => styled.with_force_prefix(force),
            None => styled,
        }
    }

    /// Apply the configured forces to every string of an output
    pub fn apply_output(&self, output: StyledOutput) -> StyledOutput {
        let output = match self.force_sgr {
            Some(force) => output.with_force_sgr(force),
            None => output,
        };
        match self.force_prefix {
            Some(force) => output.with_force_prefix(force),
            None => output,
        }
    }
}

/// Header layout defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderConfig {
    /// Fill repeated on both sides of the title
    #[serde(default = "default_fill")]
    pub padding: String,

    /// Spaces before the title
    #[serde(default = "default_spaces")]
    pub left_spaces: usize,

    /// Spaces after the title
    #[serde(default = "default_spaces")]
    pub right_spaces: usize,

    /// Separator between padding and title
    #[serde(default = "default_fill")]
    pub space: String,

    /// Style codes applied to the title
    #[serde(default)]
    pub codes: Vec<SgrCode>,
}

fn default_fill() -> String {
    " ".to_string()
}

fn default_spaces() -> usize {
    1
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            padding: default_fill(),
            left_spaces: default_spaces(),
            right_spaces: default_spaces(),
            space: default_fill(),
            codes: Vec::new(),
        }
    }
}

impl HeaderConfig {
    /// Header options for printing
    pub fn options(&self) -> HeaderOptions {
        HeaderOptions {
            padding: self.padding.clone(),
            left_spaces: self.left_spaces,
            right_spaces: self.right_spaces,
            space: self.space.clone(),
            end: LINE_ENDING.to_string(),
        }
    }
}

/// Hashing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashConfig {
    /// Bytes read per chunk
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}
