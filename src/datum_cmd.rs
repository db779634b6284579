//! Datum command: parse a single ISO-8601 datum.

use std::fmt;

use anyhow::{Context, Result};
use hapitime_iso8601::{format, parse_datum_detailed};
use serde::Serialize;
use tracing::{debug, info_span};

use crate::cli::DatumArgs;
use crate::config::HapiTimeConfig;
use crate::output;

/// Result of parsing one datum.
#[derive(Debug, Serialize)]
pub struct DatumReport {
    pub input: String,
    pub iso: String,
    pub precision: String,
    pub fields: [i32; 7],
}

impl fmt::Display for DatumReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso)
    }
}

/// Run the datum command.
pub fn run(args: DatumArgs, config: &HapiTimeConfig) -> Result<()> {
    let _cmd = info_span!("datum").entered();
    let report = report(&args)?;
    output::emit(&report, &config.output)
}

fn report(args: &DatumArgs) -> Result<DatumReport> {
    let parsed = parse_datum_detailed(&args.text)
        .with_context(|| format!("failed to parse datum {:?}", args.text))?;
    debug!(local = %parsed.local, offset = ?parsed.offset, "datum fields");

    let iso = if args.precise {
        parsed.to_iso_string()
    } else {
        format(parsed.value)
    };
    Ok(DatumReport {
        input: args.text.clone(),
        iso,
        precision: parsed.precision().to_string(),
        fields: parsed.value.fields(),
    })
}
