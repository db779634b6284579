//! Error types for the hapitime-iso8601 crate.

use crate::temporal::Field;

/// Error type for all fallible parsing operations in the hapitime-iso8601 crate.
///
/// Every variant carries the text that was rejected so the failure can be
/// reported against the service field it came from. Normalization and
/// formatting are total and never produce this error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// Returned when the text matches none of the supported literal shapes.
    #[error("unrecognized time format: {text:?}")]
    UnrecognizedFormat {
        /// The rejected text.
        text: String,
    },

    /// Returned when duration text does not follow `P[nY][nM][nD][T[nH][nM][nS]]`.
    #[error("malformed ISO8601 duration {text:?}: {reason}")]
    BadDuration {
        /// The rejected duration text.
        text: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Returned when a UTC offset is not one of `±HH`, `±HHMM` or `±HH:MM`.
    #[error("malformed time zone designator in {text:?}")]
    BadTimezone {
        /// The full datum text containing the offset.
        text: String,
    },

    /// Returned when fractional seconds carry more than nine digits.
    #[error("fractional seconds {digits:?} exceed nanosecond resolution (max 9 digits)")]
    DigitOverflow {
        /// The fractional digits as written.
        digits: String,
    },

    /// Returned when a recognized shape holds a field value outside its range.
    #[error("{field} value {value} out of range in {text:?}")]
    FieldOutOfRange {
        /// The field that was out of range.
        field: Field,
        /// The value as written.
        value: i32,
        /// The rejected text.
        text: String,
    },
}

impl TimeError {
    pub(crate) fn unrecognized(text: &str) -> Self {
        Self::UnrecognizedFormat {
            text: text.to_string(),
        }
    }

    pub(crate) fn bad_duration(text: &str, reason: &'static str) -> Self {
        Self::BadDuration {
            text: text.to_string(),
            reason,
        }
    }
}
