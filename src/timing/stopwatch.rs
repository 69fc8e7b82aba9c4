//! Lap-based stopwatch

use std::time::Instant;

use super::Timing;
use crate::error::TimingError;

/// Accumulates measured time intervals ("laps").
///
/// Each measurement is scoped: [`Stopwatch::measure`] returns a [`Lap`]
/// guard that records the elapsed time when it is dropped, whichever way the
/// scope is left (normal exit, `?` early return, or panic unwinding).
///
/// A stopwatch is not meant to be shared between threads. `measure` borrows
/// the stopwatch mutably, so measurements on one instance are serialised; use
/// one stopwatch per thread or task for concurrent timing.
///
/// ```
/// use utilkit::timing::Stopwatch;
///
/// let mut stopwatch = Stopwatch::new();
/// {
///     let _lap = stopwatch.measure();
///     // timed work
/// }
/// assert_eq!(stopwatch.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    laps: Vec<Timing>,
}

/// An in-flight measurement; the lap is appended to its stopwatch on drop.
#[derive(Debug)]
#[must_use = "the lap is recorded when the guard is dropped"]
pub struct Lap<'a> {
    stopwatch: &'a mut Stopwatch,
    start: Instant,
}

impl Lap<'_> {
    /// Time elapsed since this measurement started
    pub fn elapsed(&self) -> Timing {
        Timing::from(self.start.elapsed())
    }
}

impl Drop for Lap<'_> {
    fn drop(&mut self) {
        let lap = self.elapsed();
        tracing::trace!("Recorded lap {} ({})", self.stopwatch.laps.len() + 1, lap);
        self.stopwatch.laps.push(lap);
    }
}

impl Stopwatch {
    /// Create an empty stopwatch
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a scoped measurement
    pub fn measure(&mut self) -> Lap<'_> {
        Lap {
            stopwatch: self,
            start: Instant::now(),
        }
    }

    /// Run `f` as a single measured lap and return its result
    pub fn time<R>(&mut self, f: impl FnOnce() -> R) -> R {
        let _lap = self.measure();
        f()
    }

    /// Recorded laps, oldest first
    pub fn laps(&self) -> &[Timing] {
        &self.laps
    }

    /// Number of recorded laps
    pub fn len(&self) -> usize {
        self.laps.len()
    }

    /// Whether no lap has been recorded
    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
    }

    /// Whether the total elapsed time is zero
    pub fn is_zero(&self) -> bool {
        self.elapsed().is_zero()
    }

    /// Iterate over the recorded laps
    pub fn iter(&self) -> std::slice::Iter<'_, Timing> {
        self.laps.iter()
    }

    /// Drop all recorded laps
    pub fn reset(&mut self) {
        self.laps.clear();
    }

    /// Sum of all laps
    pub fn elapsed(&self) -> Timing {
        self.laps.iter().sum()
    }

    /// Mean lap, floored to the nanosecond
    pub fn average(&self) -> Result<Timing, TimingError> {
        if self.laps.is_empty() {
            return Err(TimingError::NoLaps);
        }
        let count = i64::try_from(self.laps.len()).unwrap_or(i64::MAX);
        Ok(self.elapsed().floor_div(count))
    }

    /// Shortest lap
    pub fn min(&self) -> Result<Timing, TimingError> {
        self.laps.iter().min().copied().ok_or(TimingError::NoLaps)
    }

    /// Longest lap
    pub fn max(&self) -> Result<Timing, TimingError> {
        self.laps.iter().max().copied().ok_or(TimingError::NoLaps)
    }
}

impl<'a> IntoIterator for &'a Stopwatch {
    type Item = &'a Timing;
    type IntoIter = std::slice::Iter<'a, Timing>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
