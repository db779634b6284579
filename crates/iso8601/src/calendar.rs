//! Proleptic Gregorian calendar rules and field ranges.

use crate::temporal::Field;

/// Number of days in each month (index 0 unused, index 1 = January, ..., index 12 = December).
///
/// Row 0 is a common year, row 1 a leap year.
const DAYS_PER_MONTH: [[u8; 13]; 2] = [
    [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
    [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
];

/// Nanoseconds per second.
pub const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// Days in one full 400-year Gregorian cycle.
pub(crate) const DAYS_PER_400_YEARS: i32 = 146_097;

/// Returns `true` if `year` is a Gregorian leap year.
///
/// Divisible by 4, and either divisible by 400 or not divisible by 100.
pub fn is_leap_year(year: i32) -> bool {
    is_leap(i64::from(year))
}

pub(crate) fn is_leap(year: i64) -> bool {
    year % 4 == 0 && (year % 400 == 0 || year % 100 != 0)
}

/// Returns the number of days in `month` (1..=12) of `year`.
///
/// Months outside 1..=12 are folded into range first, carrying into the
/// year, so the function is total.
pub fn days_in_month(month: i32, year: i32) -> i32 {
    let month = i64::from(month) - 1;
    let year = i64::from(year) + month.div_euclid(12);
    month_length(month.rem_euclid(12) + 1, year) as i32
}

/// Length of a canonical `month` (1..=12) in a year of any size.
pub(crate) fn month_length(month: i64, year: i64) -> i64 {
    i64::from(DAYS_PER_MONTH[usize::from(is_leap(year))][month as usize])
}

/// Returns 366 for leap years, 365 otherwise.
pub fn days_in_year(year: i32) -> i32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the 1-based day of year for a canonical `(year, month, day)`.
pub fn day_of_year(year: i32, month: i32, day: i32) -> i32 {
    (1..month).map(|m| days_in_month(m, year)).sum::<i32>() + day
}

/// Inclusive canonical range of a field, or `None` for the unbounded year.
///
/// The day range is the widest one (1..=31); use [`days_in_month`] for the
/// bound of a specific month.
pub fn field_range(field: Field) -> Option<(i32, i32)> {
    match field {
        Field::Year => None,
        Field::Month => Some((1, 12)),
        Field::Day => Some((1, 31)),
        Field::Hour => Some((0, 23)),
        Field::Minute | Field::Second => Some((0, 59)),
        Field::Nanosecond => Some((0, NANOS_PER_SECOND - 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_oracle() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn leap_year_centuries() {
        assert!(is_leap_year(1600));
        assert!(!is_leap_year(1700));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2400));
    }

    #[test]
    fn days_in_month_oracle() {
        assert_eq!(days_in_month(2, 2000), 29);
        assert_eq!(days_in_month(2, 1900), 28);
        assert_eq!(days_in_month(4, 2024), 30);
        assert_eq!(days_in_month(12, 2023), 31);
    }

    #[test]
    fn days_in_month_folds_out_of_range_month() {
        // Month 14 of 1999 is February 2000.
        assert_eq!(days_in_month(14, 1999), 29);
        // Month 0 of 2001 is December 2000.
        assert_eq!(days_in_month(0, 2001), 31);
    }

    #[test]
    fn days_in_month_extreme_arguments() {
        assert_eq!(days_in_month(i32::MIN, 2012), days_in_month(4, 2012));
        assert_eq!(days_in_month(i32::MAX, i32::MAX), 31);
        assert_eq!(days_in_month(2, i32::MIN), 29);
    }

    #[test]
    fn table_integrity_days_per_year() {
        for (row, expected) in [(0usize, 365u16), (1, 366)] {
            let total: u16 = DAYS_PER_MONTH[row][1..=12]
                .iter()
                .copied()
                .map(u16::from)
                .sum();
            assert_eq!(total, expected);
        }
    }

    #[test]
    fn four_hundred_year_cycle() {
        let total: i32 = (2000..2400).map(days_in_year).sum();
        assert_eq!(total, DAYS_PER_400_YEARS);
    }

    #[test]
    fn day_of_year_examples() {
        assert_eq!(day_of_year(2012, 1, 1), 1);
        assert_eq!(day_of_year(2012, 4, 9), 100);
        assert_eq!(day_of_year(2011, 4, 10), 100);
        assert_eq!(day_of_year(2012, 12, 31), 366);
    }

    #[test]
    fn field_ranges() {
        assert_eq!(field_range(Field::Year), None);
        assert_eq!(field_range(Field::Hour), Some((0, 23)));
        assert_eq!(field_range(Field::Nanosecond), Some((0, 999_999_999)));
    }
}
