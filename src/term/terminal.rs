//! Output streams and terminal capability queries

use console::Term;
use std::io;

/// Standard stream a styled string is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// Human-readable stream name
    pub fn name(self) -> &'static str {
        match self {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        }
    }
}

/// Where styled output goes, and what that destination can do.
///
/// Implementations must not fail capability queries: a stream that is not a
/// terminal reports `false` and no column count.
pub trait Terminal {
    /// Whether the stream is attached to an interactive terminal
    fn is_terminal(&self, stream: Stream) -> bool;

    /// Width of the terminal in columns, `None` when unavailable
    fn columns(&self, stream: Stream) -> Option<usize>;

    /// Write `text` verbatim to the stream
    fn write(&mut self, stream: Stream, text: &str) -> io::Result<()>;
}

/// The process's real stdout and stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StdTerminal;

impl StdTerminal {
    fn term(stream: Stream) -> Term {
        match stream {
            Stream::Stdout => Term::stdout(),
            Stream::Stderr => Term::stderr(),
        }
    }
}

impl Terminal for StdTerminal {
    fn is_terminal(&self, stream: Stream) -> bool {
        Self::term(stream).is_term()
    }

    fn columns(&self, stream: Stream) -> Option<usize> {
        Self::term(stream)
            .size_checked()
            .map(|(_rows, columns)| usize::from(columns))
    }

    fn write(&mut self, stream: Stream, text: &str) -> io::Result<()> {
        let term = Self::term(stream);
        term.write_str(text)?;
        term.flush()
    }
}

/// In-memory terminal capturing everything written to it.
///
/// ```
/// use utilkit::term::{BufferTerminal, StyledString};
///
/// let mut terminal = BufferTerminal::new();
/// StyledString::new("hello").print_to(&mut terminal, "\n", false).unwrap();
/// assert_eq!(terminal.stdout(), "hello\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferTerminal {
    interactive: bool,
    columns: Option<usize>,
    stdout: String,
    stderr: String,
}

impl BufferTerminal {
    /// A non-interactive buffer without a known width
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend both streams are (or are not) interactive terminals
    pub fn with_tty(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Report a fixed terminal width
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Everything written to stdout so far
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Everything written to stderr so far
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Drain both buffers, returning `(stdout, stderr)`
    pub fn take(&mut self) -> (String, String) {
        (
            std::mem::take(&mut self.stdout),
            std::mem::take(&mut self.stderr),
        )
    }
}

impl Terminal for BufferTerminal {
    fn is_terminal(&self, _stream: Stream) -> bool {
        self.interactive
    }

    fn columns(&self, _stream: Stream) -> Option<usize> {
        self.columns
    }

    fn write(&mut self, stream: Stream, text: &str) -> io::Result<()> {
        match stream {
            Stream::Stdout => self.stdout.push_str(text),
            Stream::Stderr => self.stderr.push_str(text),
        }
        Ok(())
    }
}
