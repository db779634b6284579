//! # hapitime-iso8601
//!
//! ISO-8601 time literals for HAPI server verification: datums, durations
//! and ranges parsed into a seven-field tuple, normalized on the proleptic
//! Gregorian calendar and formatted back into the text sent as `time.min`
//! and `time.max` request parameters.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["datum text"] -->|"parse_datum()"| T["Temporal7"]
//!     B["duration text"] -->|"parse_duration()"| D["IsoDuration"]
//!     C["range text"] -->|"parse_range()"| R["TimeRange"]
//!     T -->|"add_duration() / subtract_duration()"| N["normalize()"]
//!     D --> N
//!     N --> T
//!     T -->|"format()"| S["ISO-8601 text"]
//!     R -->|"format_range()"| S
//!     I["SampleInfo"] -->|"sample_window()"| R
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use hapitime_iso8601::{Temporal7, format, format_range, parse_datum, parse_range};
//!
//! let t = parse_datum("2014-09-02T10:55:10-05:00").unwrap();
//! assert_eq!(format(t), "2014-09-02T15:55:10Z");
//!
//! let range = parse_range("2012-100T02:00/03:45").unwrap();
//! assert_eq!(range.end(), Temporal7::new(2012, 4, 9, 3, 45, 0, 0));
//! assert_eq!(format_range(range.start(), range.end()), "2012-04-09T02:00Z/03:45Z");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `calendar` | Leap years, month lengths, field ranges |
//! | `temporal` | The seven-field tuple and its field index |
//! | `normalize` | Carry/borrow normalization |
//! | `datum` | Datum parsing, including range continuations |
//! | `duration` | Duration parsing and arithmetic |
//! | `range` | Range parsing |
//! | `format` | ISO-8601 rendering |
//! | `window` | Default sampling-window policy |
//! | `error` | Error types |
//!
//! All functions are pure and hold no shared state.

pub mod calendar;
mod datum;
mod duration;
mod error;
mod format;
mod normalize;
mod range;
mod temporal;
mod window;

pub use calendar::{day_of_year, days_in_month, days_in_year, is_leap_year};
pub use datum::{
    Layout, ParsedDatum, UtcOffset, parse_datum, parse_datum_after, parse_datum_detailed,
};
pub use duration::{
    IsoDuration, add_duration, cadence_seconds, checked_add_duration, checked_subtract_duration,
    parse_duration, subtract_duration,
};
pub use error::TimeError;
pub use format::{format, format_range, format_with_layout, minimal_precision};
pub use normalize::{is_normalized, normalize};
pub use range::{TimeRange, parse_range};
pub use temporal::{Field, Temporal7};
pub use window::{SampleInfo, default_window, resolve_default_sample_window, sample_window};
