//! Command execution utilities
//!
//! Runs an external command with both output streams piped, echoing each
//! chunk to this process's matching stream while capturing it, and times the
//! run with a [`Stopwatch`].

use serde::{Serialize, Serializer};
use std::ffi::OsStr;
use std::io;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::process::Command;

use crate::error::CommandError;
use crate::timing::{Stopwatch, Timing};

const CHUNK_SIZE: usize = 8192;

/// How a command is run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Extra environment variables
    pub env: Vec<(String, String)>,
    /// Start from an empty environment instead of inheriting this process's
    pub clear_env: bool,
    /// Working directory (defaults to the current directory)
    pub current_dir: Option<PathBuf>,
    /// Capture output without echoing it
    pub quiet: bool,
}

/// Result of a command execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessOutput {
    /// Captured standard output
    #[serde(serialize_with = "serialize_lossy")]
    pub stdout: Vec<u8>,
    /// Captured standard error
    #[serde(serialize_with = "serialize_lossy")]
    pub stderr: Vec<u8>,
    /// Process id of the child
    pub pid: u32,
    /// Exit code, -1 when the process was killed by a signal
    pub exit_code: i32,
    /// Time from spawn until the process was reaped
    pub elapsed: Timing,
}

fn serialize_lossy<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}

impl ProcessOutput {
    /// Check if the command succeeded (exit code 0)
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Execute a command, tee its output and capture it
///
/// # Arguments
/// * `program` - The program to execute
/// * `args` - Arguments to pass to the program
/// * `options` - Environment, working directory and echo settings
///
/// # Returns
/// * `Ok(ProcessOutput)` - Captured output, pid, exit code and elapsed time,
///   whatever the exit code
/// * `Err(CommandError)` - If the command failed to start or its pipes failed
pub async fn run_command<S: AsRef<OsStr>>(
    program: &str,
    args: &[S],
    options: &RunOptions,
) -> Result<ProcessOutput, CommandError> {
    let io_error = |source| CommandError::Io {
        program: program.to_string(),
        source,
    };

    let mut command = Command::new(program);
    command.args(args);
    if options.clear_env {
        command.env_clear();
    }
    command.envs(options.env.iter().map(|(key, value)| (key, value)));
    if let Some(dir) = &options.current_dir {
        command.current_dir(dir);
    }
    command.stdout(Stdio::piped()).stderr(Stdio::piped());

    tracing::debug!("Running '{}' with {} argument(s)", program, args.len());

    let mut stopwatch = Stopwatch::new();
    let lap = stopwatch.measure();
    let mut child = command.spawn().map_err(|source| CommandError::Spawn {
        program: program.to_string(),
        source,
    })?;
    let pid = child.id().ok_or_else(|| CommandError::MissingPid {
        program: program.to_string(),
    })?;

    let (stdout, stderr) = tokio::try_join!(
        drain(child.stdout.take(), (!options.quiet).then(tokio::io::stdout)),
        drain(child.stderr.take(), (!options.quiet).then(tokio::io::stderr)),
    )
    .map_err(io_error)?;
    drop(lap);

    let lap = stopwatch.measure();
    let status = child.wait().await.map_err(io_error)?;
    drop(lap);

    let output = ProcessOutput {
        stdout,
        stderr,
        pid,
        exit_code: status.code().unwrap_or(-1),
        elapsed: stopwatch.elapsed(),
    };
    tracing::debug!(
        "'{}' (pid {}) exited with code {} after {}",
        program,
        output.pid,
        output.exit_code,
        output.elapsed
    );
    Ok(output)
}

/// Blocking variant of [`run_command`] for callers outside a tokio runtime
pub fn run_command_blocking<S: AsRef<OsStr>>(
    program: &str,
    args: &[S],
    options: &RunOptions,
) -> Result<ProcessOutput, CommandError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|source| CommandError::Io {
            program: program.to_string(),
            source,
        })?;
    runtime.block_on(run_command(program, args, options))
}

/// Read `reader` to the end, echoing every chunk to `echo` as it arrives
async fn drain<R, W>(reader: Option<R>, mut echo: Option<W>) -> io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(mut reader) = reader else {
        return Ok(Vec::new());
    };

    let mut captured = Vec::new();
    let mut buffer = [0u8; CHUNK_SIZE];
    loop {
        let read = reader.read(&mut buffer).await?;
        if read == 0 {
            break;
        }
        let chunk = &buffer[..read];
        if let Some(echo) = echo.as_mut() {
            echo.write_all(chunk).await?;
            echo.flush().await?;
        }
        captured.extend_from_slice(chunk);
    }
    Ok(captured)
}
