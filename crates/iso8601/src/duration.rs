//! ISO-8601 durations and duration arithmetic.

use std::fmt;
use std::str::FromStr;

use crate::datum::fraction_nanos;
use crate::error::TimeError;
use crate::normalize::{checked_normalize, saturating_normalize};
use crate::temporal::Temporal7;

/// An amount of calendar time: how much of each unit to add or subtract.
///
/// Uses the same slot layout as [`Temporal7`] but is never itself a
/// calendar date, so it is a distinct type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsoDuration([i32; 7]);

impl IsoDuration {
    /// Creates a duration from its seven amounts.
    pub const fn new(
        years: i32,
        months: i32,
        days: i32,
        hours: i32,
        minutes: i32,
        seconds: i32,
        nanoseconds: i32,
    ) -> Self {
        Self([years, months, days, hours, minutes, seconds, nanoseconds])
    }

    /// Creates a duration from a raw field array.
    pub const fn from_fields(fields: [i32; 7]) -> Self {
        Self(fields)
    }

    /// Returns the raw field array.
    pub const fn fields(self) -> [i32; 7] {
        self.0
    }

    pub const fn years(self) -> i32 {
        self.0[0]
    }

    pub const fn months(self) -> i32 {
        self.0[1]
    }

    pub const fn days(self) -> i32 {
        self.0[2]
    }

    pub const fn hours(self) -> i32 {
        self.0[3]
    }

    pub const fn minutes(self) -> i32 {
        self.0[4]
    }

    pub const fn seconds(self) -> i32 {
        self.0[5]
    }

    pub const fn nanoseconds(self) -> i32 {
        self.0[6]
    }

    /// Returns `true` if every amount is zero.
    pub fn is_zero(self) -> bool {
        self.0.iter().all(|&v| v == 0)
    }
}

impl fmt::Display for IsoDuration {
    /// Writes `PnYnMnDTnHnMn.nS`, omitting zero amounts; zero is `PT0S`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("PT0S");
        }
        f.write_str("P")?;
        for (value, unit) in [(self.years(), 'Y'), (self.months(), 'M'), (self.days(), 'D')] {
            if value != 0 {
                write!(f, "{value}{unit}")?;
            }
        }
        if self.0[3..].iter().any(|&v| v != 0) {
            f.write_str("T")?;
            for (value, unit) in [(self.hours(), 'H'), (self.minutes(), 'M')] {
                if value != 0 {
                    write!(f, "{value}{unit}")?;
                }
            }
            if self.nanoseconds() != 0 {
                let fraction = format!("{:09}", self.nanoseconds());
                write!(f, "{}.{}S", self.seconds(), fraction.trim_end_matches('0'))?;
            } else if self.seconds() != 0 {
                write!(f, "{}S", self.seconds())?;
            }
        }
        Ok(())
    }
}

impl FromStr for IsoDuration {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration(s)
    }
}

/// Parses `P[nY][nM][nD][T[nH][nM][n[.f]S]]` into a duration.
///
/// Missing designators are zero. Seconds may carry up to nine fractional
/// digits, split into whole seconds and nanoseconds without rounding. A
/// bare `P` (or `PT`) is accepted as the zero duration.
///
/// # Errors
///
/// Returns [`TimeError::UnrecognizedFormat`] if the text does not start
/// with `P`, [`TimeError::DigitOverflow`] for more than nine fractional
/// digits and [`TimeError::BadDuration`] for any other structural fault,
/// notably an `S` designator without the `T` time marker.
///
/// # Examples
///
/// ```
/// use hapitime_iso8601::{IsoDuration, parse_duration};
///
/// let d = parse_duration("P1Y2M10DT2H30M").unwrap();
/// assert_eq!(d, IsoDuration::new(1, 2, 10, 2, 30, 0, 0));
/// assert!(parse_duration("P1Y2M10D2H30S").is_err());
/// ```
pub fn parse_duration(text: &str) -> Result<IsoDuration, TimeError> {
    let Some(mut rest) = text.strip_prefix('P') else {
        return Err(TimeError::unrecognized(text));
    };
    if text.contains('S') && !text.contains('T') {
        return Err(TimeError::bad_duration(
            text,
            "seconds designator without T time marker",
        ));
    }

    let mut fields = [0i32; 7];
    let mut next_slot = 0;
    let mut in_time = false;
    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('T') {
            if in_time {
                return Err(TimeError::bad_duration(text, "repeated T time marker"));
            }
            in_time = true;
            next_slot = 3;
            rest = after;
            continue;
        }

        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(|| TimeError::bad_duration(text, "number without designator"))?;
        if number_len == 0 {
            return Err(TimeError::bad_duration(text, "designator without number"));
        }
        let (number, tail) = rest.split_at(number_len);
        let designator = tail.as_bytes()[0];
        let slot = match (in_time, designator) {
            (false, b'Y') => 0,
            (false, b'M') => 1,
            (false, b'D') => 2,
            (true, b'H') => 3,
            (true, b'M') => 4,
            (true, b'S') => 5,
            _ => return Err(TimeError::bad_duration(text, "unexpected designator")),
        };
        if slot < next_slot {
            return Err(TimeError::bad_duration(text, "designators out of order"));
        }

        match number.split_once('.') {
            None => fields[slot] = whole(number, text)?,
            Some(_) if slot != 5 => {
                return Err(TimeError::bad_duration(
                    text,
                    "fraction is only allowed on seconds",
                ));
            }
            Some((int, frac)) => {
                if frac.is_empty() || frac.contains('.') {
                    return Err(TimeError::bad_duration(text, "malformed seconds fraction"));
                }
                fields[5] = if int.is_empty() { 0 } else { whole(int, text)? };
                fields[6] = fraction_nanos(frac)?;
            }
        }
        next_slot = slot + 1;
        rest = &tail[1..];
    }
    Ok(IsoDuration(fields))
}

fn whole(digits: &str, text: &str) -> Result<i32, TimeError> {
    digits
        .parse()
        .map_err(|_| TimeError::bad_duration(text, "number too large"))
}

/// Adds each duration amount to the matching field of `base`, then normalizes.
///
/// Fields are added independently, so `2012-01-31 + P1M` is February 31st,
/// which normalizes to March 2nd. A year past the `i32` range saturates;
/// see [`checked_add_duration`] to detect that instead.
pub fn add_duration(base: Temporal7, delta: &IsoDuration) -> Temporal7 {
    saturating_normalize(combine(base, delta, 1))
}

/// Subtracts each duration amount from the matching field of `base`, then normalizes.
///
/// A year past the `i32` range saturates; see [`checked_subtract_duration`].
pub fn subtract_duration(base: Temporal7, delta: &IsoDuration) -> Temporal7 {
    saturating_normalize(combine(base, delta, -1))
}

/// Like [`add_duration`], but returns `None` when the resulting year does
/// not fit in an `i32`.
pub fn checked_add_duration(base: Temporal7, delta: &IsoDuration) -> Option<Temporal7> {
    checked_normalize(combine(base, delta, 1))
}

/// Like [`subtract_duration`], but returns `None` when the resulting year
/// does not fit in an `i32`.
pub fn checked_subtract_duration(base: Temporal7, delta: &IsoDuration) -> Option<Temporal7> {
    checked_normalize(combine(base, delta, -1))
}

fn combine(base: Temporal7, delta: &IsoDuration, sign: i64) -> [i64; 7] {
    let mut fields = base.fields().map(i64::from);
    for (field, amount) in fields.iter_mut().zip(delta.0) {
        *field += sign * i64::from(amount);
    }
    fields
}

/// Approximates a duration in seconds with 365-day years and 30-day months.
///
/// Used to judge the magnitude of a dataset cadence.
pub fn cadence_seconds(delta: &IsoDuration) -> f64 {
    const DAY: f64 = 86_400.0;
    f64::from(delta.years()) * 365.0 * DAY
        + f64::from(delta.months()) * 30.0 * DAY
        + f64::from(delta.days()) * DAY
        + f64::from(delta.hours()) * 3_600.0
        + f64::from(delta.minutes()) * 60.0
        + f64::from(delta.seconds())
        + f64::from(delta.nanoseconds()) / 1e9
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn full_duration() {
        assert_eq!(
            parse_duration("P1Y2M10DT2H30M").unwrap(),
            IsoDuration::new(1, 2, 10, 2, 30, 0, 0)
        );
    }

    #[test]
    fn single_designators() {
        assert_eq!(parse_duration("P1D").unwrap(), IsoDuration::new(0, 0, 1, 0, 0, 0, 0));
        assert_eq!(parse_duration("PT1M").unwrap(), IsoDuration::new(0, 0, 0, 0, 1, 0, 0));
        assert_eq!(parse_duration("P1M").unwrap(), IsoDuration::new(0, 1, 0, 0, 0, 0, 0));
        assert_eq!(parse_duration("PT60S").unwrap(), IsoDuration::new(0, 0, 0, 0, 0, 60, 0));
    }

    #[test]
    fn fractional_seconds() {
        assert_eq!(
            parse_duration("PT1.5S").unwrap(),
            IsoDuration::new(0, 0, 0, 0, 0, 1, 500_000_000)
        );
        assert_eq!(
            parse_duration("PT12.25S").unwrap(),
            IsoDuration::new(0, 0, 0, 0, 0, 12, 250_000_000)
        );
        assert_eq!(
            parse_duration("PT.001S").unwrap(),
            IsoDuration::new(0, 0, 0, 0, 0, 0, 1_000_000)
        );
    }

    #[test]
    fn fractional_seconds_overflow() {
        assert_eq!(
            parse_duration("PT0.0000000001S").unwrap_err(),
            TimeError::DigitOverflow {
                digits: "0000000001".to_string()
            }
        );
    }

    #[test]
    fn bare_p_is_zero() {
        assert!(parse_duration("P").unwrap().is_zero());
        assert!(parse_duration("PT").unwrap().is_zero());
    }

    #[test]
    fn missing_t_is_bad_duration() {
        assert_eq!(
            parse_duration("P1Y2M10D2H30S").unwrap_err(),
            TimeError::BadDuration {
                text: "P1Y2M10D2H30S".to_string(),
                reason: "seconds designator without T time marker",
            }
        );
    }

    #[test]
    fn structural_faults() {
        for text in ["P1H", "P1D2H", "PT1D", "P1M1Y", "PT1S2M", "P1", "PY", "P1.5D", "PTT1H", "P1X"] {
            assert!(
                matches!(parse_duration(text), Err(TimeError::BadDuration { .. })),
                "{text}"
            );
        }
    }

    #[test]
    fn not_a_duration() {
        assert!(matches!(
            parse_duration("1D"),
            Err(TimeError::UnrecognizedFormat { .. })
        ));
    }

    #[test]
    fn display() {
        assert_eq!(IsoDuration::new(1, 2, 10, 2, 30, 0, 0).to_string(), "P1Y2M10DT2H30M");
        assert_eq!(IsoDuration::new(0, 0, 1, 0, 0, 0, 0).to_string(), "P1D");
        assert_eq!(IsoDuration::new(0, 0, 0, 0, 0, 1, 500_000_000).to_string(), "PT1.5S");
        assert_eq!(IsoDuration::default().to_string(), "PT0S");
    }

    #[test]
    fn add_worked_example() {
        let start = Temporal7::new(2007, 3, 1, 13, 0, 0, 0);
        let d = parse_duration("P1Y2M10DT2H30M").unwrap();
        assert_eq!(add_duration(start, &d), Temporal7::new(2008, 5, 11, 15, 30, 0, 0));
    }

    #[test]
    fn subtract_worked_example() {
        let end = Temporal7::new(2008, 5, 11, 15, 30, 0, 0);
        let d = parse_duration("P1Y2M10DT2H30M").unwrap();
        assert_eq!(subtract_duration(end, &d), Temporal7::new(2007, 3, 1, 13, 0, 0, 0));
    }

    #[test]
    fn add_carries_across_year() {
        let start = Temporal7::new(2012, 12, 31, 23, 0, 0, 0);
        let d = parse_duration("PT1H").unwrap();
        assert_eq!(add_duration(start, &d), Temporal7::from_date(2013, 1, 1));
    }

    #[test]
    fn subtract_borrows_fraction() {
        let end = Temporal7::from_date(2012, 3, 1);
        let d = parse_duration("PT0.5S").unwrap();
        assert_eq!(
            subtract_duration(end, &d),
            Temporal7::new(2012, 2, 29, 23, 59, 59, 500_000_000)
        );
    }

    #[test]
    fn month_end_addition_is_fieldwise() {
        let start = Temporal7::from_date(2012, 1, 31);
        let d = parse_duration("P1M").unwrap();
        assert_eq!(add_duration(start, &d), Temporal7::from_date(2012, 3, 2));
    }

    #[test]
    fn largest_day_count_stays_in_range() {
        let start = Temporal7::from_date(2012, 12, 31);
        let d = parse_duration("P2147483647D").unwrap();
        let end = checked_add_duration(start, &d).unwrap();
        assert!(end.is_normalized());
        assert!(end.year() > 5_000_000);
        assert_eq!(add_duration(start, &d), end);
    }

    #[test]
    fn year_overflow_is_detected() {
        let start = Temporal7::from_date(2012, 1, 1);
        let d = parse_duration("P2147483000Y").unwrap();
        assert_eq!(checked_add_duration(start, &d), None);
        assert_eq!(add_duration(start, &d), Temporal7::from_date(i32::MAX, 1, 1));

        let end = Temporal7::from_date(-2012, 1, 1);
        assert_eq!(checked_subtract_duration(end, &d), None);
        assert_eq!(subtract_duration(end, &d).year(), i32::MIN);
    }

    #[test]
    fn cadence_magnitudes() {
        assert_relative_eq!(cadence_seconds(&parse_duration("PT0.5S").unwrap()), 0.5);
        assert_relative_eq!(cadence_seconds(&parse_duration("PT1M").unwrap()), 60.0);
        assert_relative_eq!(cadence_seconds(&parse_duration("P1D").unwrap()), 86_400.0);
        assert_relative_eq!(
            cadence_seconds(&parse_duration("P1Y1M").unwrap()),
            395.0 * 86_400.0
        );
    }
}
