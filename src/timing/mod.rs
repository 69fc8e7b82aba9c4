//! Timing utilities for measuring and formatting durations
//!
//! [`Timing`] is a signed, nanosecond-resolution quantity with exact integer
//! arithmetic and a scale-adaptive [`Display`](fmt::Display) implementation.
//! [`Stopwatch`] accumulates measured laps.

mod stopwatch;

pub use stopwatch::{Lap, Stopwatch};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::error::TimingError;

/// Factor between consecutive metric units (ns → µs → ms → s)
pub const METRIC_MULTIPLIER: i128 = 1_000;
/// Seconds in a minute
pub const SECONDS_PER_MINUTE: u128 = 60;
/// Minutes in an hour
pub const MINUTES_PER_HOUR: u128 = 60;
/// Hours in a day
pub const HOURS_PER_DAY: u128 = 24;

const NANOS_PER_MICRO: i128 = METRIC_MULTIPLIER;
const NANOS_PER_MILLI: i128 = METRIC_MULTIPLIER * NANOS_PER_MICRO;
const NANOS_PER_SECOND: i128 = METRIC_MULTIPLIER * NANOS_PER_MILLI;
const NANOS_PER_DAY: i128 =
    (SECONDS_PER_MINUTE * MINUTES_PER_HOUR * HOURS_PER_DAY) as i128 * NANOS_PER_SECOND;

/// An immutable, signed amount of time with nanosecond resolution.
///
/// Unlike [`std::time::Duration`], a `Timing` may be negative, which makes it
/// closed under subtraction and negation. Values are ordered by their
/// nanosecond count and the zero timing is the only "empty" one (see
/// [`Timing::is_zero`]).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timing {
    nanoseconds: i128,
}

impl Timing {
    /// The zero timing
    pub const ZERO: Timing = Timing { nanoseconds: 0 };

    /// Build a timing by summing independently signed components.
    ///
    /// ```
    /// use utilkit::timing::Timing;
    ///
    /// let timing = Timing::from_parts(1, 0, 0, 0, 1);
    /// assert_eq!(timing.as_nanos(), 86_400_000_000_001);
    /// ```
    pub const fn from_parts(
        days: i64,
        seconds: i64,
        milliseconds: i64,
        microseconds: i64,
        nanoseconds: i64,
    ) -> Self {
        Self {
            nanoseconds: nanoseconds as i128
                + microseconds as i128 * NANOS_PER_MICRO
                + milliseconds as i128 * NANOS_PER_MILLI
                + seconds as i128 * NANOS_PER_SECOND
                + days as i128 * NANOS_PER_DAY,
        }
    }

    /// Create a timing from a nanosecond count
    pub const fn from_nanos(nanoseconds: i128) -> Self {
        Self { nanoseconds }
    }

    /// Create a timing from whole microseconds
    pub const fn from_micros(microseconds: i64) -> Self {
        Self::from_parts(0, 0, 0, microseconds, 0)
    }

    /// Create a timing from whole milliseconds
    pub const fn from_millis(milliseconds: i64) -> Self {
        Self::from_parts(0, 0, milliseconds, 0, 0)
    }

    /// Create a timing from whole seconds
    pub const fn from_secs(seconds: i64) -> Self {
        Self::from_parts(0, seconds, 0, 0, 0)
    }

    /// Create a timing from whole days
    pub const fn from_days(days: i64) -> Self {
        Self::from_parts(days, 0, 0, 0, 0)
    }

    /// Total number of nanoseconds
    pub const fn as_nanos(&self) -> i128 {
        self.nanoseconds
    }

    /// Number of seconds as a float
    pub fn as_secs_f64(&self) -> f64 {
        self.nanoseconds as f64 / NANOS_PER_SECOND as f64
    }

    /// Whether this timing is exactly zero
    pub const fn is_zero(&self) -> bool {
        self.nanoseconds == 0
    }

    /// Whether this timing is below zero
    pub const fn is_negative(&self) -> bool {
        self.nanoseconds < 0
    }

    /// Absolute value
    pub const fn abs(&self) -> Self {
        Self {
            nanoseconds: self.nanoseconds.abs(),
        }
    }

    /// Divide by an integer, rounding towards negative infinity.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero, like integer division.
    pub fn floor_div(self, divisor: i64) -> Self {
        Self {
            nanoseconds: floor_div(self.nanoseconds, i128::from(divisor)),
        }
    }

    /// Floor division returning `None` for a zero divisor
    pub fn checked_floor_div(self, divisor: i64) -> Option<Self> {
        (divisor != 0).then(|| self.floor_div(divisor))
    }

    /// True division returning `None` for a zero divisor
    pub fn checked_div(self, divisor: i64) -> Option<Self> {
        (divisor != 0).then(|| self / divisor)
    }
}

fn floor_div(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator / denominator;
    if numerator % denominator != 0 && ((numerator < 0) != (denominator < 0)) {
        quotient - 1
    } else {
        quotient
    }
}

// Rounds the exact quotient to the nearest integer, ties to even.
fn round_div(numerator: i128, denominator: i128) -> i128 {
    let quotient = floor_div(numerator, denominator);
    let twice_remainder = 2 * (numerator - quotient * denominator).abs();
    match twice_remainder.cmp(&denominator.abs()) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal if quotient % 2 == 0 => quotient,
        std::cmp::Ordering::Equal => quotient + 1,
    }
}

/// Insert `,` between groups of three digits
fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Scale-adaptive rendering.
///
/// | Magnitude | Format          | Example        |
/// |-----------|-----------------|----------------|
/// | 0         | `0ns`           | `0ns`          |
/// | < 1 µs    | `<n>ns`         | `999ns`        |
/// | < 1 ms    | `<n.n>µs`       | `1.0µs`        |
/// | < 1 s     | `<n.n>ms`       | `1.0ms`        |
/// | < 1 min   | `<n.nn>s`       | `1.00s`        |
/// | < 1 day   | `HH:MM:SS`      | `01:00:01`     |
/// | otherwise | `<d>d HH:MM:SS` | `1,000d 00:00:00` |
///
/// Negative values get a leading `-`. From one minute upwards the sub-second
/// part is dropped, and day counts are grouped with `,` (the day-based form is
/// used rather than a plain comma-grouped seconds count).
impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nanoseconds == 0 {
            return f.write_str("0ns");
        }
        let sign = if self.nanoseconds < 0 { "-" } else { "" };
        let nanoseconds = self.nanoseconds.unsigned_abs();

        let multiplier = METRIC_MULTIPLIER as u128;
        if nanoseconds < multiplier {
            return write!(f, "{sign}{nanoseconds}ns");
        }
        let microseconds = nanoseconds as f64 / 1_000.0;
        if microseconds < 1_000.0 {
            return write!(f, "{sign}{microseconds:.1}µs");
        }
        let milliseconds = microseconds / 1_000.0;
        if milliseconds < 1_000.0 {
            return write!(f, "{sign}{milliseconds:.1}ms");
        }
        let seconds = milliseconds / 1_000.0;
        if seconds < SECONDS_PER_MINUTE as f64 {
            return write!(f, "{sign}{seconds:.2}s");
        }

        let whole_seconds = nanoseconds / NANOS_PER_SECOND as u128;
        let (minutes, seconds) = (
            whole_seconds / SECONDS_PER_MINUTE,
            whole_seconds % SECONDS_PER_MINUTE,
        );
        let (hours, minutes) = (minutes / MINUTES_PER_HOUR, minutes % MINUTES_PER_HOUR);
        if hours < HOURS_PER_DAY {
            return write!(f, "{sign}{hours:02}:{minutes:02}:{seconds:02}");
        }
        let (days, hours) = (hours / HOURS_PER_DAY, hours % HOURS_PER_DAY);
        write!(
            f,
            "{sign}{}d {hours:02}:{minutes:02}:{seconds:02}",
            group_thousands(days)
        )
    }
}

impl Neg for Timing {
    type Output = Timing;

    fn neg(self) -> Timing {
        Timing::from_nanos(-self.nanoseconds)
    }
}

impl Add for Timing {
    type Output = Timing;

    fn add(self, rhs: Timing) -> Timing {
        Timing::from_nanos(self.nanoseconds + rhs.nanoseconds)
    }
}

impl Sub for Timing {
    type Output = Timing;

    fn sub(self, rhs: Timing) -> Timing {
        Timing::from_nanos(self.nanoseconds - rhs.nanoseconds)
    }
}

impl AddAssign for Timing {
    fn add_assign(&mut self, rhs: Timing) {
        *self = *self + rhs;
    }
}

impl SubAssign for Timing {
    fn sub_assign(&mut self, rhs: Timing) {
        *self = *self - rhs;
    }
}

impl Mul<i64> for Timing {
    type Output = Timing;

    fn mul(self, rhs: i64) -> Timing {
        Timing::from_nanos(self.nanoseconds * i128::from(rhs))
    }
}

impl Mul<Timing> for i64 {
    type Output = Timing;

    fn mul(self, rhs: Timing) -> Timing {
        rhs * self
    }
}

/// True division, rounded to the nearest nanosecond (ties to even).
///
/// Use [`Timing::floor_div`] for flooring division.
impl Div<i64> for Timing {
    type Output = Timing;

    fn div(self, rhs: i64) -> Timing {
        Timing::from_nanos(round_div(self.nanoseconds, i128::from(rhs)))
    }
}

impl Sum for Timing {
    fn sum<I: Iterator<Item = Timing>>(iter: I) -> Timing {
        iter.fold(Timing::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Timing> for Timing {
    fn sum<I: Iterator<Item = &'a Timing>>(iter: I) -> Timing {
        iter.copied().sum()
    }
}

impl From<std::time::Duration> for Timing {
    fn from(duration: std::time::Duration) -> Self {
        Timing::from_nanos(i128::try_from(duration.as_nanos()).unwrap_or(i128::MAX))
    }
}

impl TryFrom<Timing> for std::time::Duration {
    type Error = TimingError;

    fn try_from(timing: Timing) -> Result<Self, Self::Error> {
        let out_of_range = TimingError::OutOfRange {
            nanoseconds: timing.nanoseconds,
        };
        if timing.is_negative() {
            return Err(out_of_range);
        }
        let seconds = u64::try_from(timing.nanoseconds / NANOS_PER_SECOND)
            .map_err(|_| out_of_range)?;
        // Remainder is below one second, so it fits in u32
        let nanos = (timing.nanoseconds % NANOS_PER_SECOND) as u32;
        Ok(std::time::Duration::new(seconds, nanos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_sums_components() {
        assert_eq!(Timing::from_parts(0, 0, 0, 0, 0).as_nanos(), 0);
        assert_eq!(Timing::from_parts(0, 0, 0, 0, 1).as_nanos(), 1);
        assert_eq!(Timing::from_parts(1, 0, 0, 0, 1).as_nanos(), 86_400_000_000_001);
        assert_eq!(Timing::from_parts(0, 1, 0, 0, 1).as_nanos(), 1_000_000_001);
        assert_eq!(Timing::from_parts(0, 0, 1, 0, 1).as_nanos(), 1_000_001);
        assert_eq!(Timing::from_parts(0, 0, 0, 1, 1).as_nanos(), 1_001);
        assert_eq!(Timing::from_parts(1, 1, 1, 1, 1).as_nanos(), 86_401_001_001_001);
    }

    #[test]
    fn test_from_parts_mixed_signs() {
        let timing = Timing::from_parts(0, 1, -500, 0, 0);
        assert_eq!(timing, Timing::from_millis(500));
    }

    #[test]
    fn test_multi_year_range() {
        let timing = Timing::from_days(365 * 500);
        assert_eq!(timing.as_nanos(), 365 * 500 * 86_400_000_000_000);
        assert_eq!(timing.to_string(), "182,500d 00:00:00");
    }

    #[test]
    fn test_display_boundaries() {
        assert_eq!(Timing::ZERO.to_string(), "0ns");
        assert_eq!(Timing::from_nanos(1).to_string(), "1ns");
        assert_eq!(Timing::from_nanos(-1).to_string(), "-1ns");
        assert_eq!(Timing::from_nanos(999).to_string(), "999ns");
        assert_eq!(Timing::from_nanos(1_000).to_string(), "1.0µs");
        assert_eq!(Timing::from_parts(0, 0, 0, 1, 1).to_string(), "1.0µs");
        assert_eq!(Timing::from_micros(1_000).to_string(), "1.0ms");
        assert_eq!(Timing::from_parts(0, 0, 1, 0, 1).to_string(), "1.0ms");
        assert_eq!(Timing::from_secs(1).to_string(), "1.00s");
        assert_eq!(Timing::from_parts(0, 1, 0, 0, 1).to_string(), "1.00s");
        assert_eq!(Timing::from_secs(3_601).to_string(), "01:00:01");
        assert_eq!(Timing::from_days(1).to_string(), "1d 00:00:00");
        assert_eq!(Timing::from_parts(1, 0, 0, 0, 1).to_string(), "1d 00:00:00");
        assert_eq!(Timing::from_parts(1, 1, 1, 1, 1).to_string(), "1d 00:00:01");
    }

    #[test]
    fn test_display_fractional_units() {
        assert_eq!(Timing::from_nanos(1_500).to_string(), "1.5µs");
        assert_eq!(Timing::from_micros(12_300).to_string(), "12.3ms");
        assert_eq!(Timing::from_millis(1_234).to_string(), "1.23s");
        assert_eq!(Timing::from_millis(59_990).to_string(), "59.99s");
        assert_eq!(Timing::from_secs(60).to_string(), "00:01:00");
        assert_eq!(Timing::from_parts(0, 86_399, 999, 0, 0).to_string(), "23:59:59");
    }

    #[test]
    fn test_display_negative_scales() {
        assert_eq!(Timing::from_millis(-1_500).to_string(), "-1.50s");
        assert_eq!(Timing::from_secs(-3_601).to_string(), "-01:00:01");
        assert_eq!(Timing::from_days(-2).to_string(), "-2d 00:00:00");
    }

    #[test]
    fn test_display_groups_days() {
        assert_eq!(Timing::from_days(1_234).to_string(), "1,234d 00:00:00");
        assert_eq!(
            Timing::from_parts(1_234_567, 3_723, 0, 0, 0).to_string(),
            "1,234,567d 01:02:03"
        );
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(12_345_678), "12,345,678");
    }

    #[test]
    fn test_truthiness() {
        assert!(Timing::ZERO.is_zero());
        assert!(Timing::default().is_zero());
        assert!(Timing::from_nanos(0).is_zero());
        assert!(!Timing::from_nanos(1).is_zero());
        assert!(!Timing::from_nanos(-1).is_zero());
    }

    #[test]
    fn test_negation() {
        let timing = -Timing::from_nanos(5);
        assert_eq!(timing.as_nanos(), -5);
        assert_eq!(-(-timing), timing);
        assert_eq!(timing.abs(), Timing::from_nanos(5));
    }

    #[test]
    fn test_operators() {
        let timing = Timing::from_nanos(5);
        assert_eq!(timing + timing, Timing::from_nanos(10));
        assert_eq!(timing - timing, Timing::ZERO);
        assert_eq!(timing * 2, Timing::from_nanos(10));
        assert_eq!(2 * timing, Timing::from_nanos(10));
        assert_eq!(timing.floor_div(3), Timing::from_nanos(1));
        assert_eq!(timing / 3, Timing::from_nanos(2));
        assert_eq!(timing * 1, timing);
        assert_eq!(timing.floor_div(1), timing);
    }

    #[test]
    fn test_assign_operators() {
        let mut timing = Timing::from_millis(1);
        timing += Timing::from_micros(500);
        assert_eq!(timing, Timing::from_micros(1_500));
        timing -= Timing::from_millis(2);
        assert_eq!(timing, Timing::from_micros(-500));
    }

    #[test]
    fn test_floor_div_rounds_down() {
        assert_eq!(Timing::from_nanos(-5).floor_div(3), Timing::from_nanos(-2));
        assert_eq!(Timing::from_nanos(5).floor_div(-3), Timing::from_nanos(-2));
        assert_eq!(Timing::from_nanos(-6).floor_div(3), Timing::from_nanos(-2));
    }

    #[test]
    fn test_true_div_rounds_to_nearest_even() {
        assert_eq!(Timing::from_nanos(-5) / 3, Timing::from_nanos(-2));
        assert_eq!(Timing::from_nanos(5) / 2, Timing::from_nanos(2));
        assert_eq!(Timing::from_nanos(7) / 2, Timing::from_nanos(4));
        assert_eq!(Timing::from_nanos(-7) / 2, Timing::from_nanos(-4));
        assert_eq!(Timing::from_nanos(10) / -4, Timing::from_nanos(-2));
    }

    #[test]
    fn test_checked_division_by_zero() {
        assert_eq!(Timing::from_nanos(5).checked_div(0), None);
        assert_eq!(Timing::from_nanos(5).checked_floor_div(0), None);
        assert_eq!(
            Timing::from_nanos(6).checked_floor_div(3),
            Some(Timing::from_nanos(2))
        );
    }

    #[test]
    fn test_addition_round_trip() {
        for n in [-1_000_000_007i128, -3, 0, 1, 999, 86_400_000_000_000] {
            for m in [-42i128, 0, 7, 1_000_000_000] {
                assert_eq!(
                    Timing::from_nanos(n) + Timing::from_nanos(m),
                    Timing::from_nanos(n + m)
                );
            }
        }
    }

    #[test]
    fn test_ordering() {
        let mut timings = vec![
            Timing::from_secs(1),
            Timing::from_nanos(-1),
            Timing::ZERO,
            Timing::from_millis(2),
        ];
        timings.sort();
        assert_eq!(
            timings,
            vec![
                Timing::from_nanos(-1),
                Timing::ZERO,
                Timing::from_millis(2),
                Timing::from_secs(1),
            ]
        );
    }

    #[test]
    fn test_sum() {
        let laps = [Timing::from_millis(1), Timing::from_millis(2)];
        assert_eq!(laps.iter().sum::<Timing>(), Timing::from_millis(3));
        assert_eq!(Vec::<Timing>::new().into_iter().sum::<Timing>(), Timing::ZERO);
    }

    #[test]
    fn test_std_duration_conversions() {
        let timing = Timing::from(std::time::Duration::from_micros(1_500));
        assert_eq!(timing, Timing::from_micros(1_500));

        let duration = std::time::Duration::try_from(Timing::from_parts(0, 2, 5, 0, 0)).unwrap();
        assert_eq!(duration, std::time::Duration::from_millis(2_005));

        let err = std::time::Duration::try_from(Timing::from_nanos(-1)).unwrap_err();
        assert_eq!(err, TimingError::OutOfRange { nanoseconds: -1 });
    }

    #[test]
    fn test_serde_as_nanoseconds() {
        let json = serde_json::to_string(&Timing::from_micros(3)).unwrap();
        assert_eq!(json, "3000");
        let timing: Timing = serde_json::from_str("-12").unwrap();
        assert_eq!(timing, Timing::from_nanos(-12));
    }
}
