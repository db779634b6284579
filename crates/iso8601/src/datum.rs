//! ISO-8601 datum parsing.
//!
//! Text is tokenized on `- T : . Z +` and decomposed directly into the
//! seven-field tuple. The first numeric token fixes the direction: a 4-, 7-
//! or 8-digit token, or a longer year followed by `-`, anchors the year and
//! fields fill forward from it; any other leading token is a continuation
//! whose fields are right-aligned on the precision of the datum it continues.

use tracing::debug;

use crate::calendar::{NANOS_PER_SECOND, days_in_month, days_in_year};
use crate::error::TimeError;
use crate::normalize::normalize;
use crate::temporal::{Field, Temporal7};

const DELIMITERS: [char; 6] = ['-', 'T', ':', '.', 'Z', '+'];

/// How a datum was written: enough to render it back the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    /// Least significant field present in the text.
    pub precision: Field,
    /// Whether the date was written as year and day-of-year.
    pub ordinal: bool,
    /// Number of fractional-second digits written (0 when absent).
    pub fraction_digits: u8,
}

impl Layout {
    /// Calendar-date layout down to `precision` with full nanosecond digits.
    pub fn calendar(precision: Field) -> Self {
        Self {
            precision,
            ordinal: false,
            fraction_digits: if precision == Field::Nanosecond { 9 } else { 0 },
        }
    }
}

/// A UTC offset written as `±HH`, `±HHMM` or `±HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    /// The zero offset.
    pub const UTC: UtcOffset = UtcOffset { minutes: 0 };

    /// Creates an offset east of UTC (negative for west).
    pub fn from_minutes(minutes: i32) -> Self {
        Self { minutes }
    }

    /// Signed offset in minutes, positive east of UTC.
    pub fn minutes(self) -> i32 {
        self.minutes
    }

    /// Converts local wall-clock fields to UTC. The result is not normalized.
    pub fn to_utc(self, local: Temporal7) -> Temporal7 {
        let mut t = local;
        t[Field::Hour] -= self.minutes / 60;
        t[Field::Minute] -= self.minutes % 60;
        t
    }

    fn parse(designator: &str, text: &str) -> Result<Self, TimeError> {
        let bad = || TimeError::BadTimezone {
            text: text.to_string(),
        };
        let (sign, rest) = match designator.split_at_checked(1) {
            Some(("+", rest)) => (1, rest),
            Some(("-", rest)) => (-1, rest),
            _ => return Err(bad()),
        };
        let (hh, mm) = match rest.len() {
            2 => (rest, "00"),
            4 => rest.split_at(2),
            5 if rest.as_bytes()[2] == b':' => (&rest[..2], &rest[3..]),
            _ => return Err(bad()),
        };
        if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        let hours: i32 = hh.parse().map_err(|_| bad())?;
        let minutes: i32 = mm.parse().map_err(|_| bad())?;
        if hours > 23 || minutes > 59 {
            return Err(bad());
        }
        Ok(Self {
            minutes: sign * (hours * 60 + minutes),
        })
    }
}

/// A parsed datum together with the context needed to continue or re-render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedDatum {
    /// The normalized UTC instant.
    pub value: Temporal7,
    /// Fields as written, before offset and normalization. Absent month
    /// and day are 1, absent time fields are 0.
    pub local: Temporal7,
    /// The offset written in the text, if any.
    pub offset: Option<UtcOffset>,
    /// How the datum was written.
    pub layout: Layout,
}

impl ParsedDatum {
    /// The least significant field present in the text.
    pub fn precision(&self) -> Field {
        self.layout.precision
    }

    /// Renders the instant in the layout it was parsed from.
    ///
    /// ```
    /// use hapitime_iso8601::parse_datum_detailed;
    ///
    /// let parsed = parse_datum_detailed("2007-003T00:00Z").unwrap();
    /// assert_eq!(parsed.to_iso_string(), "2007-003T00:00Z");
    /// ```
    pub fn to_iso_string(&self) -> String {
        crate::format::format_with_layout(self.value, self.layout)
    }
}

/// Parses a standalone datum into a normalized UTC instant.
///
/// Supported shapes include `YYYY-MM-DDTHH:MM[:SS[.f]]Z`, the compact
/// `YYYYMMDDTHHMM[SS]Z`, ordinal `YYYY-DDD[THH:MM[:SS]]Z`, date-only forms
/// and explicit `±HH[:MM]` offsets. Absent month and day default to 1.
///
/// # Errors
///
/// Returns [`TimeError::UnrecognizedFormat`] for unsupported shapes
/// (including a bare time of day, which has no date to attach to),
/// [`TimeError::BadTimezone`] for a malformed offset,
/// [`TimeError::DigitOverflow`] for more than nine fractional digits and
/// [`TimeError::FieldOutOfRange`] for impossible field values.
///
/// # Examples
///
/// ```
/// use hapitime_iso8601::{Temporal7, parse_datum};
///
/// let t = parse_datum("2014-09-02T10:55:10-05:00").unwrap();
/// assert_eq!(t, Temporal7::new(2014, 9, 2, 15, 55, 10, 0));
/// ```
pub fn parse_datum(text: &str) -> Result<Temporal7, TimeError> {
    parse_datum_detailed(text).map(|parsed| parsed.value)
}

/// Parses a standalone datum, keeping its precision and layout.
///
/// # Errors
///
/// Same as [`parse_datum`].
pub fn parse_datum_detailed(text: &str) -> Result<ParsedDatum, TimeError> {
    parse(text, None)
}

/// Parses the second half of a datum/datum range.
///
/// A year-anchored datum is parsed on its own. Anything else is a
/// continuation such as `03:45` or `28T12:00`: its fields are right-aligned
/// on `start`'s precision and every more significant field, along with the
/// offset, is inherited from `start` as written.
///
/// # Errors
///
/// Same as [`parse_datum`]; a continuation that does not line up with
/// `start`'s precision is [`TimeError::UnrecognizedFormat`].
pub fn parse_datum_after(text: &str, start: &ParsedDatum) -> Result<ParsedDatum, TimeError> {
    parse(text, Some(start))
}

fn parse(text: &str, context: Option<&ParsedDatum>) -> Result<ParsedDatum, TimeError> {
    let pieces = Pieces::split(text)?;
    let anchored = year_anchored(&pieces.components);
    let (local, layout, inherited_offset) = if anchored {
        let (local, layout) = assemble_forward(&pieces.components, text)?;
        (local, layout, None)
    } else {
        let Some(context) = context else {
            return Err(TimeError::unrecognized(text));
        };
        let (local, layout) = assemble_continuation(&pieces.components, context, text)?;
        (local, layout, context.offset)
    };
    validate(local, layout, text)?;

    let offset = pieces.offset.or(inherited_offset);
    let utc = offset.map_or(local, |o| o.to_utc(local));
    debug!(
        text,
        precision = %layout.precision,
        ordinal = layout.ordinal,
        continuation = !anchored,
        "parsed datum"
    );
    Ok(ParsedDatum {
        value: normalize(utc),
        local,
        offset,
        layout,
    })
}

/// Number of leading digits that form the year, or `None` for a continuation.
///
/// A 4-, 7- or 8-digit first token starts with a four-digit year. A longer
/// token directly followed by `-` is an extended year, as written for
/// years past 9999.
fn year_digits(components: &[Component<'_>]) -> Option<usize> {
    let first = components.first()?.digits.len();
    let dash_follows = components.get(1).is_some_and(|c| c.sep == Some('-'));
    match first {
        n if n > 4 && dash_follows => Some(n),
        4 | 7 | 8 => Some(4),
        _ => None,
    }
}

fn year_anchored(components: &[Component<'_>]) -> bool {
    year_digits(components).is_some()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Digits(&'a str),
    Delim(char),
}

fn tokenize(text: &str) -> Result<Vec<(usize, Token<'_>)>, TimeError> {
    let mut tokens = Vec::new();
    let mut run_start = None;
    for (i, c) in text.char_indices() {
        if c.is_ascii_digit() {
            run_start.get_or_insert(i);
            continue;
        }
        if let Some(s) = run_start.take() {
            tokens.push((s, Token::Digits(&text[s..i])));
        }
        if !DELIMITERS.contains(&c) {
            return Err(TimeError::unrecognized(text));
        }
        tokens.push((i, Token::Delim(c)));
    }
    if let Some(s) = run_start {
        tokens.push((s, Token::Digits(&text[s..])));
    }
    Ok(tokens)
}

/// A run of digits and the delimiter that introduced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Component<'a> {
    sep: Option<char>,
    digits: &'a str,
}

/// Numeric components of a datum, with the offset split off.
#[derive(Debug)]
struct Pieces<'a> {
    components: Vec<Component<'a>>,
    offset: Option<UtcOffset>,
}

impl<'a> Pieces<'a> {
    fn split(text: &'a str) -> Result<Self, TimeError> {
        let tokens = tokenize(text)?;
        let mut components: Vec<Component<'a>> = Vec::new();
        let mut offset = None;
        let mut pending: Option<char> = None;
        let mut in_time = false;

        for (k, &(pos, token)) in tokens.iter().enumerate() {
            match token {
                Token::Digits(digits) => components.push(Component {
                    sep: pending.take(),
                    digits,
                }),
                Token::Delim(c) => {
                    // Every delimiter must follow a number.
                    if pending.is_some() || components.is_empty() {
                        return Err(TimeError::unrecognized(text));
                    }
                    match c {
                        'Z' if k + 1 == tokens.len() => {}
                        '+' | '-' if in_time => {
                            offset = Some(UtcOffset::parse(&text[pos..], text)?);
                            break;
                        }
                        'Z' | '+' => return Err(TimeError::unrecognized(text)),
                        'T' | ':' => {
                            in_time = true;
                            pending = Some(c);
                        }
                        _ => pending = Some(c),
                    }
                }
            }
        }
        if pending.is_some() || components.is_empty() {
            return Err(TimeError::unrecognized(text));
        }
        Ok(Self { components, offset })
    }
}

fn number(digits: &str, text: &str) -> Result<i32, TimeError> {
    digits.parse().map_err(|_| TimeError::unrecognized(text))
}

/// Scales fractional-second digits to nanoseconds by right-padding to nine digits.
pub(crate) fn fraction_nanos(digits: &str) -> Result<i32, TimeError> {
    if digits.len() > 9 {
        return Err(TimeError::DigitOverflow {
            digits: digits.to_string(),
        });
    }
    let value: i32 = digits.parse().map_err(|_| TimeError::unrecognized(digits))?;
    Ok(value * 10_i32.pow(9 - digits.len() as u32))
}

/// Stores consecutive two-digit pairs starting at `from`; returns the last field written.
fn put_pairs(
    local: &mut Temporal7,
    from: Field,
    digits: &str,
    text: &str,
) -> Result<Field, TimeError> {
    let mut field = from;
    for (k, pair) in digits.as_bytes().chunks(2).enumerate() {
        field = Field::from_index(from.index() + k).ok_or_else(|| TimeError::unrecognized(text))?;
        let pair = std::str::from_utf8(pair).map_err(|_| TimeError::unrecognized(text))?;
        local[field] = number(pair, text)?;
    }
    Ok(field)
}

fn assemble_forward(
    components: &[Component<'_>],
    text: &str,
) -> Result<(Temporal7, Layout), TimeError> {
    let mut local = Temporal7::from_date(0, 1, 1);
    let mut layout = Layout::calendar(Field::Year);
    let Some((first, rest)) = components.split_first() else {
        return Err(TimeError::unrecognized(text));
    };

    let d = first.digits;
    let year_len = year_digits(components).ok_or_else(|| TimeError::unrecognized(text))?;
    let (year, date) = d.split_at(year_len);
    local[Field::Year] = number(year, text)?;
    match date.len() {
        0 => {}
        3 => {
            local[Field::Day] = number(date, text)?;
            layout.ordinal = true;
            layout.precision = Field::Day;
        }
        _ => {
            layout.precision = put_pairs(&mut local, Field::Month, date, text)?;
        }
    }

    for c in rest {
        let d = c.digits;
        layout.precision = match (c.sep, layout.precision, d.len()) {
            (Some('-'), Field::Year, 2) => put_pairs(&mut local, Field::Month, d, text)?,
            (Some('-'), Field::Year, 3) => {
                local[Field::Day] = number(d, text)?;
                layout.ordinal = true;
                Field::Day
            }
            (Some('-'), Field::Month, 2) => put_pairs(&mut local, Field::Day, d, text)?,
            (Some('T'), Field::Day, 2 | 4 | 6) => put_pairs(&mut local, Field::Hour, d, text)?,
            (Some(':'), Field::Hour, 2) => put_pairs(&mut local, Field::Minute, d, text)?,
            (Some(':'), Field::Minute, 2) => put_pairs(&mut local, Field::Second, d, text)?,
            (Some('.'), Field::Second, _) => {
                local[Field::Nanosecond] = fraction_nanos(d)?;
                layout.fraction_digits = d.len() as u8;
                Field::Nanosecond
            }
            _ => return Err(TimeError::unrecognized(text)),
        };
    }
    Ok((local, layout))
}

fn assemble_continuation(
    components: &[Component<'_>],
    context: &ParsedDatum,
    text: &str,
) -> Result<(Temporal7, Layout), TimeError> {
    let lsd = context.layout.precision;
    let first_slot = (lsd.index() + 1)
        .checked_sub(components.len())
        .filter(|&slot| slot >= Field::Month.index())
        .ok_or_else(|| TimeError::unrecognized(text))?;

    let mut local = context.local;
    let mut layout = context.layout;
    for (k, c) in components.iter().enumerate() {
        let field =
            Field::from_index(first_slot + k).ok_or_else(|| TimeError::unrecognized(text))?;
        let expected_sep = match field {
            Field::Year | Field::Month | Field::Day => '-',
            Field::Hour => 'T',
            Field::Minute | Field::Second => ':',
            Field::Nanosecond => '.',
        };
        if k > 0 && c.sep != Some(expected_sep) {
            return Err(TimeError::unrecognized(text));
        }
        if field == Field::Nanosecond {
            if c.sep != Some('.') {
                return Err(TimeError::unrecognized(text));
            }
            local[field] = fraction_nanos(c.digits)?;
            layout.fraction_digits = c.digits.len() as u8;
            continue;
        }
        let max_len = if field == Field::Day && layout.ordinal { 3 } else { 2 };
        if c.digits.len() > max_len {
            return Err(TimeError::unrecognized(text));
        }
        local[field] = number(c.digits, text)?;
    }
    Ok((local, layout))
}

/// Rejects literal field values that no calendar date could hold.
fn validate(local: Temporal7, layout: Layout, text: &str) -> Result<(), TimeError> {
    let out_of_range = |field: Field| TimeError::FieldOutOfRange {
        field,
        value: local[field],
        text: text.to_string(),
    };
    let within = |field: Field, lo: i32, hi: i32| {
        if (lo..=hi).contains(&local[field]) {
            Ok(())
        } else {
            Err(out_of_range(field))
        }
    };

    let year = local.year();
    if layout.ordinal {
        within(Field::Day, 1, days_in_year(year))?;
    } else {
        within(Field::Month, 1, 12)?;
        within(Field::Day, 1, days_in_month(local.month(), year))?;
    }
    within(Field::Minute, 0, 59)?;
    within(Field::Second, 0, 59)?;
    within(Field::Nanosecond, 0, NANOS_PER_SECOND - 1)?;
    // 24:00 is the end of the day; any later time on hour 24 is not.
    let end_of_day = local.minute() == 0 && local.second() == 0 && local.nanosecond() == 0;
    within(Field::Hour, 0, if end_of_day { 24 } else { 23 })
}
