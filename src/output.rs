//! Report rendering shared by the subcommands.

use std::fmt::Display;

use anyhow::{Context, Result};
use hapitime_iso8601::{TimeRange, format, format_range};
use serde::Serialize;

use crate::config::OutputToml;

/// Prints a report as plain text or, when configured, as pretty JSON.
pub fn emit<R: Serialize + Display>(report: &R, output: &OutputToml) -> Result<()> {
    if output.json {
        let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
        println!("{json}");
    } else {
        println!("{report}");
    }
    Ok(())
}

/// Renders a range, compacting same-day ends unless disabled.
pub fn render_range(range: TimeRange, output: &OutputToml) -> String {
    if output.compact_ranges {
        format_range(range.start(), range.end())
    } else {
        format!("{}/{}", format(range.start()), format(range.end()))
    }
}

/// Joins the `time.min` / `time.max` pairs into a query string.
pub fn query_string(range: TimeRange) -> String {
    range
        .query_params()
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}
