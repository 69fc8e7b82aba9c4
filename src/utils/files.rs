//! File hashing and error fallbacks
//!
//! Hashes are SHA256 hex digests computed in fixed-size chunks, so large
//! files are never loaded whole. [`Fallback`] turns selected errors into a
//! default value, logging them on the way.

use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::Level;
use walkdir::WalkDir;

use crate::error::HashError;

/// Default read size for hashing (64 KiB)
pub const DEFAULT_BUFFER_SIZE: usize = 1 << 16;

/// Calculate the SHA256 hash of a file's content
///
/// # Arguments
///
/// * `path` - Path to the file
///
/// # Returns
///
/// The SHA256 hash as a hexadecimal string
pub fn hash_file(path: &Path) -> Result<String, HashError> {
    hash_file_with_buffer(path, DEFAULT_BUFFER_SIZE)
}

/// Same as [`hash_file`], reading `buffer_size` bytes at a time
pub fn hash_file_with_buffer(path: &Path, buffer_size: usize) -> Result<String, HashError> {
    let read_error = |source| HashError::FileRead {
        path: path.display().to_string(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;
    hash_reader(file, buffer_size).map_err(read_error)
}

/// Hash everything `reader` yields
pub fn hash_reader(mut reader: impl Read, buffer_size: usize) -> io::Result<String> {
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; buffer_size.max(1)];

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Calculate the SHA256 hash of content bytes
pub fn hash_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Hash every regular file under `root` (or `root` itself when it is a file),
/// in file-name order.
pub fn hash_tree(root: &Path) -> Result<Vec<(PathBuf, String)>, HashError> {
    let mut digests = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| HashError::Walk {
            path: root.display().to_string(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let digest = hash_file(entry.path())?;
        tracing::trace!("{} {}", digest, entry.path().display());
        digests.push((entry.into_path(), digest));
    }

    tracing::debug!("Hashed {} file(s) under {}", digests.len(), root.display());
    Ok(digests)
}

type ErrorFilter<E> = Box<dyn Fn(&E) -> bool + Send + Sync>;

/// Replaces handled errors with a default value.
///
/// ```
/// use utilkit::utils::files::Fallback;
///
/// let invert = Fallback::new(0.0).wrap("invert", |n: i32| {
///     if n == 0 {
///         Err("division by zero")
///     } else {
///         Ok(1.0 / f64::from(n))
///     }
/// });
/// assert_eq!(invert(2), Ok(0.5));
/// assert_eq!(invert(0), Ok(0.0));
/// ```
pub struct Fallback<T, E> {
    default: T,
    level: Level,
    filter: Option<ErrorFilter<E>>,
}

impl<T: Clone, E: fmt::Display> Fallback<T, E> {
    /// Handle every error, logging at INFO
    pub fn new(default: T) -> Self {
        Self {
            default,
            level: Level::INFO,
            filter: None,
        }
    }

    /// Log handled errors at `level`
    pub fn level(self, level: Level) -> Self {
        Self { level, ..self }
    }

    /// Handle only errors matching `filter`; others propagate
    pub fn only(self, filter: impl Fn(&E) -> bool + Send + Sync + 'static) -> Self {
        Self {
            filter: Some(Box::new(filter)),
            ..self
        }
    }

    /// Whether `error` would be replaced by the default
    pub fn handles(&self, error: &E) -> bool {
        self.filter.as_ref().map_or(true, |filter| filter(error))
    }

    /// Run `f`, replacing a handled error with the default value
    pub fn call(&self, name: &str, f: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        match f() {
            Ok(value) => Ok(value),
            Err(error) if self.handles(&error) => {
                log_at(
                    self.level,
                    format_args!("Function `{}` failed with `{}`", name, error),
                );
                Ok(self.default.clone())
            }
            Err(error) => Err(error),
        }
    }

    /// Wrap a one-argument function; the argument is logged with the error
    pub fn wrap<A, F>(self, name: &'static str, f: F) -> impl Fn(A) -> Result<T, E>
    where
        A: fmt::Debug,
        F: Fn(A) -> Result<T, E>,
    {
        move |arg| {
            let described = format!("{:?}", arg);
            match f(arg) {
                Ok(value) => Ok(value),
                Err(error) if self.handles(&error) => {
                    log_at(
                        self.level,
                        format_args!(
                            "Function `{}` failed with `{}` when called with {}",
                            name, error, described
                        ),
                    );
                    Ok(self.default.clone())
                }
                Err(error) => Err(error),
            }
        }
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Fallback<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fallback")
            .field("default", &self.default)
            .field("level", &self.level)
            .field("filtered", &self.filter.is_some())
            .finish()
    }
}

fn log_at(level: Level, message: fmt::Arguments<'_>) {
    match level {
        Level::ERROR => tracing::error!("{}", message),
        Level::WARN => tracing::warn!("{}", message),
        Level::INFO => tracing::info!("{}", message),
        Level::DEBUG => tracing::debug!("{}", message),
        _ => tracing::trace!("{}", message),
    }
}
