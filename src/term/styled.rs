//! Strings carrying SGR styling, a prefix and a suffix

use std::fmt;
use std::ops::Mul;

use super::codes::SgrCode;
use super::env::EnvOverrides;
use super::terminal::{StdTerminal, Stream, Terminal};
use super::LINE_ENDING;
use crate::error::TermError;

/// Layout of a centred header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    /// Fill repeated on both sides of the title
    pub padding: String,
    /// Number of `space` strings before the text
    pub left_spaces: usize,
    /// Number of `space` strings after the text
    pub right_spaces: usize,
    /// Separator between the padding and the text
    pub space: String,
    /// Line ending written after the header
    pub end: String,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            padding: " ".to_string(),
            left_spaces: 1,
            right_spaces: 1,
            space: " ".to_string(),
            end: LINE_ENDING.to_string(),
        }
    }
}

/// An immutable string with optional SGR codes, prefix and suffix.
///
/// Rendering through [`Display`](fmt::Display) always includes every piece.
/// [`StyledString::print`] is terminal-aware: when the target stream is not an
/// interactive terminal the prefix, suffix and style codes are dropped, unless
/// `force_prefix` or `force_sgr` bring them back.
///
/// Unset flags default from the environment (see [`super::env`]) at
/// construction time.
///
/// ```
/// use utilkit::term::{SgrCode, StyledString};
///
/// let styled = StyledString::new("Hello, World!").with_codes([SgrCode::Bold, SgrCode::Red]);
/// assert_eq!(styled.to_string(), "\x1b[1m\x1b[31mHello, World!\x1b[0m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StyledString {
    text: String,
    codes: Vec<SgrCode>,
    prefix: String,
    suffix: String,
    force_prefix: bool,
    force_sgr: bool,
    is_error: bool,
    sgr_enabled: bool,
}

impl StyledString {
    /// Plain string, flags defaulted from the environment
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_env(text, EnvOverrides::from_env())
    }

    /// Plain string, flags defaulted from `overrides`
    pub fn with_env(text: impl Into<String>, overrides: EnvOverrides) -> Self {
        Self {
            text: text.into(),
            codes: Vec::new(),
            prefix: String::new(),
            suffix: String::new(),
            force_prefix: overrides.force_prefix,
            force_sgr: overrides.force_sgr,
            is_error: overrides.is_error,
            sgr_enabled: overrides.sgr_enabled,
        }
    }

    /// Coerce any displayable value
    pub fn from_display(value: impl fmt::Display) -> Self {
        Self::new(value.to_string())
    }

    pub fn with_codes(self, codes: impl IntoIterator<Item = SgrCode>) -> Self {
        Self {
            codes: codes.into_iter().collect(),
            ..self
        }
    }

    pub fn with_prefix(self, prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..self
        }
    }

    pub fn with_suffix(self, suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            ..self
        }
    }

    pub fn with_force_prefix(self, force_prefix: bool) -> Self {
        Self {
            force_prefix,
            ..self
        }
    }

    pub fn with_force_sgr(self, force_sgr: bool) -> Self {
        Self { force_sgr, ..self }
    }

    pub fn with_is_error(self, is_error: bool) -> Self {
        Self { is_error, ..self }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn codes(&self) -> &[SgrCode] {
        &self.codes
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn force_prefix(&self) -> bool {
        self.force_prefix
    }

    pub fn force_sgr(&self) -> bool {
        self.force_sgr
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Stream `print` writes to
    pub fn stream(&self) -> Stream {
        if self.is_error {
            Stream::Stderr
        } else {
            Stream::Stdout
        }
    }

    /// Visible width in characters: prefix, text and suffix. Style codes
    /// take no space.
    pub fn len(&self) -> usize {
        self.prefix.chars().count() + self.text.chars().count() + self.suffix.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Repeat the text `n` times, keeping everything else
    pub fn repeat(&self, n: usize) -> Self {
        Self {
            text: self.text.repeat(n),
            ..self.clone()
        }
    }

    /// Full rendering, same as `to_string()`
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn sgr_start(&self) -> String {
        self.codes.iter().map(|code| code.sequence()).collect()
    }

    fn sgr_end(&self) -> String {
        if self.codes.is_empty() {
            String::new()
        } else {
            SgrCode::Reset.sequence()
        }
    }

    /// Print to the process's stdout or stderr.
    ///
    /// With `full_color` the style codes wrap the prefix and suffix instead
    /// of sitting inside them.
    pub fn print(&self, end: &str, full_color: bool) -> Result<(), TermError> {
        self.print_to(&mut StdTerminal, end, full_color)
    }

    /// Print through an arbitrary [`Terminal`]
    pub fn print_to(
        &self,
        terminal: &mut impl Terminal,
        end: &str,
        full_color: bool,
    ) -> Result<(), TermError> {
        let stream = self.stream();
        let interactive = terminal.is_terminal(stream);
        let with_sgr = self.force_sgr || (interactive && self.sgr_enabled);
        let with_prefix = self.force_prefix || interactive;

        let (sgr_start, sgr_end) = if with_sgr {
            (self.sgr_start(), self.sgr_end())
        } else {
            (String::new(), String::new())
        };
        let (prefix, suffix) = if with_prefix {
            (self.prefix.as_str(), self.suffix.as_str())
        } else {
            ("", "")
        };

        let text = &self.text;
        let line = if full_color {
            format!("{sgr_start}{prefix}{text}{suffix}{sgr_end}{end}")
        } else {
            format!("{prefix}{sgr_start}{text}{sgr_end}{suffix}{end}")
        };

        terminal
            .write(stream, &line)
            .map_err(|source| TermError::Write {
                stream: stream.name(),
                source,
            })
    }

    /// Print centred within the terminal width
    pub fn header(&self, options: &HeaderOptions) -> Result<(), TermError> {
        self.header_to(&mut StdTerminal, options)
    }

    /// Centred print through an arbitrary [`Terminal`].
    ///
    /// Falls back to a plain print when the width is unknown or the title
    /// does not fit. Otherwise the padding is split with the extra column on
    /// the left, and lands in the prefix/suffix of the printed string, so
    /// it follows the same terminal rules as any prefix.
    pub fn header_to(
        &self,
        terminal: &mut impl Terminal,
        options: &HeaderOptions,
    ) -> Result<(), TermError> {
        let Some(columns) = terminal.columns(self.stream()) else {
            tracing::debug!("Terminal width unavailable, printing header unpadded");
            return self.print_to(terminal, &options.end, false);
        };

        let title_length = options.left_spaces + self.len() + options.right_spaces;
        if title_length >= columns {
            return self.print_to(terminal, &options.end, false);
        }

        let free = columns - title_length;
        let header = Self {
            prefix: format!(
                "{}{}{}",
                options.padding.repeat(free.div_ceil(2)),
                self.prefix,
                options.space.repeat(options.left_spaces)
            ),
            suffix: format!(
                "{}{}{}",
                options.space.repeat(options.right_spaces),
                self.suffix,
                options.padding.repeat(free / 2)
            ),
            ..self.clone()
        };
        header.print_to(terminal, &options.end, false)
    }
}

impl fmt::Display for StyledString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.prefix,
            self.sgr_start(),
            self.text,
            self.sgr_end(),
            self.suffix
        )
    }
}

impl From<&str> for StyledString {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for StyledString {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl Mul<usize> for StyledString {
    type Output = StyledString;

    fn mul(self, rhs: usize) -> StyledString {
        self.repeat(rhs)
    }
}

impl Mul<usize> for &StyledString {
    type Output = StyledString;

    fn mul(self, rhs: usize) -> StyledString {
        self.repeat(rhs)
    }
}

impl Mul<StyledString> for usize {
    type Output = StyledString;

    fn mul(self, rhs: StyledString) -> StyledString {
        rhs.repeat(self)
    }
}

impl Mul<&StyledString> for usize {
    type Output = StyledString;

    fn mul(self, rhs: &StyledString) -> StyledString {
        rhs.repeat(self)
    }
}
