//! Sampling-window resolution for a dataset's published time coverage.

use serde::Deserialize;
use tracing::{info, warn};

use crate::datum::parse_datum;
use crate::duration::{IsoDuration, cadence_seconds, parse_duration};
use crate::error::TimeError;
use crate::range::TimeRange;
use crate::temporal::{Field, Temporal7};

/// The time-coverage fields of a HAPI `info` response.
///
/// Unknown fields are ignored so a whole `info` document can be
/// deserialized directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleInfo {
    #[serde(default)]
    pub start_date: Option<String>,
    pub stop_date: String,
    #[serde(default)]
    pub cadence: Option<String>,
    #[serde(default)]
    pub sample_start_date: Option<String>,
    #[serde(default)]
    pub sample_stop_date: Option<String>,
    /// Legacy spelling of `sampleStopDate` still published by some servers.
    #[serde(default)]
    pub sample_end_date: Option<String>,
}

/// Computes a short window ending at `stop`.
///
/// Without a cadence the window is one day wide. With one, the width
/// follows the cadence magnitude: under a second gives one minute, under a
/// minute gives one hour, anything longer gives one day.
///
/// # Examples
///
/// ```
/// use hapitime_iso8601::{Temporal7, parse_duration, resolve_default_sample_window};
///
/// let stop = Temporal7::from_date(2012, 3, 1);
/// let cadence = parse_duration("PT0.5S").unwrap();
/// let window = resolve_default_sample_window(stop, Some(&cadence));
/// assert_eq!(window.start(), Temporal7::new(2012, 2, 29, 23, 59, 0, 0));
/// ```
pub fn resolve_default_sample_window(
    stop: Temporal7,
    cadence: Option<&IsoDuration>,
) -> TimeRange {
    let stop = stop.normalized();
    let mut start = stop;
    let back = match cadence.map(cadence_seconds) {
        Some(seconds) if seconds < 1.0 => Field::Minute,
        Some(seconds) if seconds < 60.0 => Field::Hour,
        _ => Field::Day,
    };
    start[back] -= 1;
    TimeRange::new(start, stop)
}

/// Resolves the default window from `stopDate` and `cadence` alone.
///
/// An unparseable cadence is logged and treated as absent.
///
/// # Errors
///
/// Returns the [`TimeError`] from parsing `stopDate`.
pub fn default_window(info: &SampleInfo) -> Result<TimeRange, TimeError> {
    let stop = parse_datum(&info.stop_date)?;
    let cadence = match info.cadence.as_deref() {
        Some(text) => match parse_duration(text) {
            Ok(cadence) => Some(cadence),
            Err(err) => {
                warn!(cadence = text, error = %err, "parse error in cadence, using a one-day window");
                None
            }
        },
        None => None,
    };
    Ok(resolve_default_sample_window(stop, cadence.as_ref()))
}

/// Resolves the window a check should request from a dataset.
///
/// `sampleStartDate` and `sampleStopDate` (or the legacy `sampleEndDate`)
/// are used when published; each missing end comes from
/// [`default_window`].
///
/// # Errors
///
/// Returns the first [`TimeError`] from `startDate`, `stopDate` or a
/// published sample date.
pub fn sample_window(info: &SampleInfo) -> Result<TimeRange, TimeError> {
    if let Some(start_date) = &info.start_date {
        parse_datum(start_date)?;
    }
    let fallback = default_window(info)?;

    let sample_stop = match (&info.sample_stop_date, &info.sample_end_date) {
        (Some(stop), _) => Some(stop),
        (None, Some(end)) => {
            info!("info has sampleEndDate, which should be sampleStopDate");
            Some(end)
        }
        (None, None) => None,
    };
    let start = match &info.sample_start_date {
        Some(text) => parse_datum(text)?,
        None => fallback.start(),
    };
    let end = match sample_stop {
        Some(text) => parse_datum(text)?,
        None => fallback.end(),
    };
    Ok(TimeRange::new(start, end))
}
