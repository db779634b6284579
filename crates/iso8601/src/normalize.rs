//! Carry/borrow normalization of seven-field tuples.

use crate::calendar::{DAYS_PER_400_YEARS, NANOS_PER_SECOND, days_in_month, month_length};
use crate::temporal::Temporal7;

/// Rebalances an out-of-range tuple into canonical form.
///
/// Carries cascade from nanoseconds up through seconds, minutes, hours and
/// days into months and years. Day carries use the length of the month
/// they currently sit in, re-evaluated after every step, so day-of-year
/// input such as `(2012, 1, 100)` resolves to `(2012, 4, 9)`. Negative
/// fields borrow from the next coarser field the same way.
///
/// Total over every tuple: carries are computed in 64 bits and a year
/// beyond the `i32` range saturates. Idempotent: a canonical tuple is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use hapitime_iso8601::{Temporal7, normalize};
///
/// let t = normalize(Temporal7::new(2012, 1, 100, 2, 0, 0, 0));
/// assert_eq!(t, Temporal7::new(2012, 4, 9, 2, 0, 0, 0));
/// ```
pub fn normalize(t: Temporal7) -> Temporal7 {
    saturating_normalize(t.fields().map(i64::from))
}

/// Normalizes widened fields, saturating the year at the `i32` bounds.
pub(crate) fn saturating_normalize(fields: [i64; 7]) -> Temporal7 {
    let [year, mut rest @ ..] = balance(fields);
    let saturated = year.clamp(i64::from(i32::MIN), i64::from(i32::MAX));
    // A saturated year may not share the leap status of the true one.
    rest[1] = rest[1].min(month_length(rest[0], saturated));
    assemble(saturated as i32, rest)
}

/// Normalizes widened fields, or `None` when the resulting year does not
/// fit in an `i32`.
pub(crate) fn checked_normalize(fields: [i64; 7]) -> Option<Temporal7> {
    let [year, rest @ ..] = balance(fields);
    i32::try_from(year).ok().map(|year| assemble(year, rest))
}

fn assemble(year: i32, [month, day, hour, minute, second, nano]: [i64; 6]) -> Temporal7 {
    // Everything below the year is in its canonical range here.
    Temporal7::new(
        year,
        month as i32,
        day as i32,
        hour as i32,
        minute as i32,
        second as i32,
        nano as i32,
    )
}

/// Carries and borrows in 64 bits. Inputs are sums of at most a few `i32`
/// values, so no step can overflow.
fn balance(fields: [i64; 7]) -> [i64; 7] {
    let [mut year, mut month, mut day, mut hour, mut minute, mut second, mut nano] = fields;
    let nanos_per_second = i64::from(NANOS_PER_SECOND);
    let days_per_cycle = i64::from(DAYS_PER_400_YEARS);

    second += nano.div_euclid(nanos_per_second);
    nano = nano.rem_euclid(nanos_per_second);
    minute += second.div_euclid(60);
    second = second.rem_euclid(60);
    hour += minute.div_euclid(60);
    minute = minute.rem_euclid(60);
    day += hour.div_euclid(24);
    hour = hour.rem_euclid(24);

    // Month must be canonical before month lengths can be looked up.
    year += (month - 1).div_euclid(12);
    month = (month - 1).rem_euclid(12) + 1;

    // The Gregorian calendar repeats exactly every 400 years.
    if day > days_per_cycle {
        let cycles = (day - 1) / days_per_cycle;
        day -= cycles * days_per_cycle;
        year += 400 * cycles;
    } else if day < -days_per_cycle {
        let cycles = -day / days_per_cycle;
        day += cycles * days_per_cycle;
        year -= 400 * cycles;
    }

    while day < 1 {
        month -= 1;
        if month == 0 {
            month = 12;
            year -= 1;
        }
        day += month_length(month, year);
    }
    loop {
        let dim = month_length(month, year);
        if day <= dim {
            break;
        }
        day -= dim;
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }

    [year, month, day, hour, minute, second, nano]
}

/// Returns `true` if every field except the year lies in its canonical range.
pub fn is_normalized(t: Temporal7) -> bool {
    (1..=12).contains(&t.month())
        && (1..=days_in_month(t.month(), t.year())).contains(&t.day())
        && (0..24).contains(&t.hour())
        && (0..60).contains(&t.minute())
        && (0..60).contains(&t.second())
        && (0..NANOS_PER_SECOND).contains(&t.nanosecond())
}
