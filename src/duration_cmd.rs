//! Duration command: parse an ISO-8601 duration.

use std::fmt;

use anyhow::{Context, Result};
use hapitime_iso8601::{cadence_seconds, parse_duration};
use serde::Serialize;
use tracing::info_span;

use crate::cli::DurationArgs;
use crate::config::HapiTimeConfig;
use crate::output;

#[derive(Debug, Serialize)]
pub struct DurationReport {
    pub input: String,
    pub iso: String,
    pub cadence_seconds: f64,
    pub fields: [i32; 7],
}

impl fmt::Display for DurationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.iso, self.cadence_seconds)
    }
}

/// Run the duration command.
pub fn run(args: DurationArgs, config: &HapiTimeConfig) -> Result<()> {
    let _cmd = info_span!("duration").entered();
    let report = report(&args)?;
    output::emit(&report, &config.output)
}

fn report(args: &DurationArgs) -> Result<DurationReport> {
    let duration = parse_duration(&args.text)
        .with_context(|| format!("failed to parse duration {:?}", args.text))?;
    Ok(DurationReport {
        input: args.text.clone(),
        iso: duration.to_string(),
        cadence_seconds: cadence_seconds(&duration),
        fields: duration.fields(),
    })
}
