//! ISO-8601 rendering of instants and ranges.

use crate::calendar::day_of_year;
use crate::datum::Layout;
use crate::temporal::{Field, Temporal7};

/// Returns the coarsest precision that renders `t` without loss: minutes,
/// seconds when seconds are non-zero, nanoseconds when nanoseconds are.
pub fn minimal_precision(t: Temporal7) -> Field {
    if t.nanosecond() != 0 {
        Field::Nanosecond
    } else if t.second() != 0 {
        Field::Second
    } else {
        Field::Minute
    }
}

/// Formats an instant as canonical minimal-precision ISO-8601.
///
/// Always renders at least `YYYY-MM-DDTHH:MM`, adds seconds only when they
/// or the nanoseconds are non-zero, renders nanoseconds with nine digits and
/// ends with `Z`. The year is zero-padded to four digits and written in full
/// past 9999. Any non-negative year parses back to the same instant.
///
/// # Examples
///
/// ```
/// use hapitime_iso8601::{Temporal7, format};
///
/// assert_eq!(format(Temporal7::new(2008, 5, 11, 15, 30, 0, 0)), "2008-05-11T15:30Z");
/// assert_eq!(
///     format(Temporal7::new(2012, 3, 27, 12, 22, 36, 786_000_000)),
///     "2012-03-27T12:22:36.786000000Z"
/// );
/// ```
pub fn format(t: Temporal7) -> String {
    format_with_layout(t, Layout::calendar(minimal_precision(t)))
}

/// Formats a range as `start/end`.
///
/// When both ends fall on the same calendar date the end is written as a
/// bare time of day, e.g. `2012-04-09T02:00Z/03:45Z`. In that compact form
/// both ends share the finer of their two minimal precisions, so the end
/// lines up field-for-field when the text is parsed back.
pub fn format_range(start: Temporal7, end: Temporal7) -> String {
    if start.date() != end.date() {
        return format!("{}/{}", format(start), format(end));
    }
    let layout = Layout::calendar(minimal_precision(start).max(minimal_precision(end)));
    let start_text = format_with_layout(start, layout);
    let end_text = format_with_layout(end, layout);
    let time_of_day = end_text
        .split_once('T')
        .map_or(end_text.as_str(), |(_, time)| time);
    format!("{start_text}/{time_of_day}")
}

/// Formats an instant down to `layout.precision`.
///
/// Ordinal layouts write the date as `YYYY-DDD`. Fractional seconds are
/// truncated to `layout.fraction_digits` (at least one). A `Z` designator
/// follows whenever a time of day is written.
pub fn format_with_layout(t: Temporal7, layout: Layout) -> String {
    let precision = layout.precision;
    let mut out = format!("{:04}", t.year());
    if precision >= Field::Day && layout.ordinal {
        out.push_str(&format!(
            "-{:03}",
            day_of_year(t.year(), t.month(), t.day())
        ));
    } else if precision >= Field::Month {
        out.push_str(&format!("-{:02}", t.month()));
        if precision >= Field::Day {
            out.push_str(&format!("-{:02}", t.day()));
        }
    }
    if precision >= Field::Hour {
        out.push_str(&format!("T{:02}", t.hour()));
    }
    if precision >= Field::Minute {
        out.push_str(&format!(":{:02}", t.minute()));
    }
    if precision >= Field::Second {
        out.push_str(&format!(":{:02}", t.second()));
    }
    if precision >= Field::Nanosecond {
        let digits = usize::from(layout.fraction_digits.clamp(1, 9));
        let nanos = format!("{:09}", t.nanosecond());
        out.push('.');
        out.push_str(&nanos[..digits]);
    }
    if precision >= Field::Hour {
        out.push('Z');
    }
    out
}
