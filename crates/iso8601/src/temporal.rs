//! The seven-field time tuple shared by datums and durations.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::TimeError;

/// One slot of the seven-field tuple, ordered from most to least significant.
///
/// Also used as the precision marker of a parsed datum: the least
/// significant field that was explicitly present in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Year = 0,
    Month = 1,
    Day = 2,
    Hour = 3,
    Minute = 4,
    Second = 5,
    Nanosecond = 6,
}

impl Field {
    /// All fields, most significant first.
    pub const ALL: [Field; 7] = [
        Field::Year,
        Field::Month,
        Field::Day,
        Field::Hour,
        Field::Minute,
        Field::Second,
        Field::Nanosecond,
    ];

    /// Returns the slot index (year = 0 … nanosecond = 6).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the field at slot `index`, or `None` past nanoseconds.
    pub fn from_index(index: usize) -> Option<Field> {
        Self::ALL.get(index).copied()
    }

    /// Returns the next less significant field, or `None` for nanoseconds.
    pub fn finer(self) -> Option<Field> {
        Self::from_index(self.index() + 1)
    }

    /// Returns the next more significant field, or `None` for the year.
    pub fn coarser(self) -> Option<Field> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    fn name(self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
            Field::Nanosecond => "nanosecond",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A `[year, month, day, hour, minute, second, nanosecond]` tuple.
///
/// Normalized values are proleptic Gregorian UTC instants. Before
/// normalization any field may be negative or overflow its range; that is
/// the expected input to [`normalize`](crate::normalize). Because the slots
/// are ordered most significant first, the derived ordering is
/// chronological for normalized values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Temporal7([i32; 7]);

impl Temporal7 {
    /// Creates a tuple from its seven fields. No range checks are applied.
    pub const fn new(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
        nanosecond: i32,
    ) -> Self {
        Self([year, month, day, hour, minute, second, nanosecond])
    }

    /// Creates a tuple at midnight of the given date.
    pub const fn from_date(year: i32, month: i32, day: i32) -> Self {
        Self::new(year, month, day, 0, 0, 0, 0)
    }

    /// Creates a tuple from a raw field array.
    pub const fn from_fields(fields: [i32; 7]) -> Self {
        Self(fields)
    }

    /// Returns the raw field array.
    pub const fn fields(self) -> [i32; 7] {
        self.0
    }

    pub const fn year(self) -> i32 {
        self.0[0]
    }

    pub const fn month(self) -> i32 {
        self.0[1]
    }

    pub const fn day(self) -> i32 {
        self.0[2]
    }

    pub const fn hour(self) -> i32 {
        self.0[3]
    }

    pub const fn minute(self) -> i32 {
        self.0[4]
    }

    pub const fn second(self) -> i32 {
        self.0[5]
    }

    pub const fn nanosecond(self) -> i32 {
        self.0[6]
    }

    /// Returns `(year, month, day)`.
    pub const fn date(self) -> (i32, i32, i32) {
        (self.0[0], self.0[1], self.0[2])
    }

    /// Returns the canonical form of this tuple.
    pub fn normalized(self) -> Self {
        crate::normalize::normalize(self)
    }

    /// Returns `true` if every field except the year lies in its canonical range.
    pub fn is_normalized(self) -> bool {
        crate::normalize::is_normalized(self)
    }
}

impl Index<Field> for Temporal7 {
    type Output = i32;

    fn index(&self, field: Field) -> &i32 {
        &self.0[field.index()]
    }
}

impl IndexMut<Field> for Temporal7 {
    fn index_mut(&mut self, field: Field) -> &mut i32 {
        &mut self.0[field.index()]
    }
}

impl From<[i32; 7]> for Temporal7 {
    fn from(fields: [i32; 7]) -> Self {
        Self(fields)
    }
}

impl fmt::Display for Temporal7 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::format(*self))
    }
}

impl FromStr for Temporal7 {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::datum::parse_datum(s)
    }
}
