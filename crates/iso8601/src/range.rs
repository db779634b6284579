//! Time ranges written as `start/end`, `start/duration` or `duration/end`.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::datum::{parse_datum, parse_datum_after, parse_datum_detailed};
use crate::duration::{checked_add_duration, checked_subtract_duration, parse_duration};
use crate::error::TimeError;
use crate::format::{format, format_range};
use crate::temporal::Temporal7;

/// An ordered pair of normalized instants.
///
/// `start <= end` is not enforced: a range may run backwards, see
/// [`TimeRange::is_reversed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    start: Temporal7,
    end: Temporal7,
}

impl TimeRange {
    /// Creates a range from two instants, normalizing both.
    pub fn new(start: Temporal7, end: Temporal7) -> Self {
        Self {
            start: start.normalized(),
            end: end.normalized(),
        }
    }

    pub fn start(self) -> Temporal7 {
        self.start
    }

    pub fn end(self) -> Temporal7 {
        self.end
    }

    /// Returns `true` if the end lies before the start.
    pub fn is_reversed(self) -> bool {
        self.end < self.start
    }

    /// The `time.min` / `time.max` request parameters for this range.
    pub fn query_params(self) -> [(&'static str, String); 2] {
        [
            ("time.min", format(self.start)),
            ("time.max", format(self.end)),
        ]
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_range(self.start, self.end))
    }
}

impl FromStr for TimeRange {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_range(s)
    }
}

/// Parses an ISO-8601 time interval.
///
/// Each side of the `/` is a duration when it starts with `P` and a datum
/// otherwise:
///
/// - `datum/datum`: the end may be a continuation such as `03:45`, which
///   takes its missing date fields from the start.
/// - `datum/duration`: the end is the start plus the duration.
/// - `duration/datum`: the start is the end minus the duration.
///
/// # Errors
///
/// Returns [`TimeError::UnrecognizedFormat`] when there is not exactly one
/// `/` or both sides are durations. Otherwise the first failure from the
/// left side, then the right side, is returned. A duration that moves
/// the year past the `i32` range is [`TimeError::BadDuration`].
///
/// # Examples
///
/// ```
/// use hapitime_iso8601::{Temporal7, parse_range};
///
/// let range = parse_range("2007-03-01T13:00:00Z/P1Y2M10DT2H30M").unwrap();
/// assert_eq!(range.end(), Temporal7::new(2008, 5, 11, 15, 30, 0, 0));
///
/// let range = parse_range("2012-100T02:00/03:45").unwrap();
/// assert_eq!(range.end(), Temporal7::new(2012, 4, 9, 3, 45, 0, 0));
/// ```
pub fn parse_range(text: &str) -> Result<TimeRange, TimeError> {
    let Some((left, right)) = text.split_once('/') else {
        return Err(TimeError::unrecognized(text));
    };
    if right.contains('/') {
        return Err(TimeError::unrecognized(text));
    }

    let is_duration = |side: &str| side.starts_with('P');
    let range = match (is_duration(left), is_duration(right)) {
        (false, false) => {
            let start = parse_datum_detailed(left)?;
            let end = parse_datum_after(right, &start)?;
            TimeRange::new(start.value, end.value)
        }
        (false, true) => {
            let start = parse_datum(left)?;
            let delta = parse_duration(right)?;
            let end = checked_add_duration(start, &delta).ok_or_else(|| out_of_range(right))?;
            TimeRange::new(start, end)
        }
        (true, false) => {
            let delta = parse_duration(left)?;
            let end = parse_datum(right)?;
            let start =
                checked_subtract_duration(end, &delta).ok_or_else(|| out_of_range(left))?;
            TimeRange::new(start, end)
        }
        (true, true) => return Err(TimeError::unrecognized(text)),
    };
    debug!(text, start = %range.start, end = %range.end, "parsed range");
    Ok(range)
}

fn out_of_range(duration: &str) -> TimeError {
    TimeError::bad_duration(duration, "duration out of range")
}
