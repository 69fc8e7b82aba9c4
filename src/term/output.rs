//! Several styled strings printed as one line

use std::fmt;

use super::styled::{HeaderOptions, StyledString};
use super::terminal::{StdTerminal, Stream, Terminal};
use crate::error::TermError;

/// An ordered group of [`StyledString`]s printed together.
///
/// Batch overrides set with the `with_*` methods replace the matching flag on
/// every contained string; strings keep their own flags otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledOutput {
    strings: Vec<StyledString>,
    is_error: Option<bool>,
}

impl StyledOutput {
    pub fn new<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StyledString>,
    {
        Self {
            strings: strings.into_iter().map(Into::into).collect(),
            is_error: None,
        }
    }

    /// Coerce arbitrary displayable values into plain styled strings
    pub fn from_display<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        Self::new(values.into_iter().map(StyledString::from_display))
    }

    pub fn with_force_prefix(self, force_prefix: bool) -> Self {
        self.map_strings(|s| s.with_force_prefix(force_prefix))
    }

    pub fn with_force_sgr(self, force_sgr: bool) -> Self {
        self.map_strings(|s| s.with_force_sgr(force_sgr))
    }

    pub fn with_is_error(self, is_error: bool) -> Self {
        Self {
            is_error: Some(is_error),
            ..self.map_strings(|s| s.with_is_error(is_error))
        }
    }

    fn map_strings(self, f: impl Fn(StyledString) -> StyledString) -> Self {
        Self {
            strings: self.strings.into_iter().map(f).collect(),
            is_error: self.is_error,
        }
    }

    pub fn strings(&self) -> &[StyledString] {
        &self.strings
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Print every string to the process's stdout/stderr
    pub fn print(&self, sep: &str, end: &str) -> Result<(), TermError> {
        self.print_to(&mut StdTerminal, sep, end)
    }

    /// Print every string, each ending in `sep` except the last, which ends
    /// in `end`. An empty output writes just `end`.
    pub fn print_to(
        &self,
        terminal: &mut impl Terminal,
        sep: &str,
        end: &str,
    ) -> Result<(), TermError> {
        let Some((last, rest)) = self.strings.split_last() else {
            let stream = if self.is_error == Some(true) {
                Stream::Stderr
            } else {
                Stream::Stdout
            };
            return terminal
                .write(stream, end)
                .map_err(|source| TermError::Write {
                    stream: stream.name(),
                    source,
                });
        };

        for string in rest {
            string.print_to(terminal, sep, false)?;
        }
        last.print_to(terminal, end, false)
    }

    /// Print the single contained string as a centred header
    pub fn header(&self, options: &HeaderOptions) -> Result<(), TermError> {
        self.header_to(&mut StdTerminal, options)
    }

    pub fn header_to(
        &self,
        terminal: &mut impl Terminal,
        options: &HeaderOptions,
    ) -> Result<(), TermError> {
        match self.strings.as_slice() {
            [string] => string.header_to(terminal, options),
            strings => Err(TermError::HeaderItems {
                count: strings.len(),
            }),
        }
    }
}

impl FromIterator<StyledString> for StyledOutput {
    fn from_iter<I: IntoIterator<Item = StyledString>>(iter: I) -> Self {
        Self::new(iter)
    }
}
