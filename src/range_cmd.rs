//! Range command: parse an ISO-8601 time range.

use std::fmt;

use anyhow::{Context, Result};
use hapitime_iso8601::{format, parse_range};
use serde::Serialize;
use tracing::{info_span, warn};

use crate::cli::RangeArgs;
use crate::config::{HapiTimeConfig, OutputToml};
use crate::output;

#[derive(Debug, Serialize)]
pub struct RangeReport {
    pub input: String,
    pub range: String,
    pub time_min: String,
    pub time_max: String,
    pub query: String,
    pub reversed: bool,
    #[serde(skip)]
    params: bool,
}

impl fmt::Display for RangeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params {
            f.write_str(&self.query)
        } else {
            f.write_str(&self.range)
        }
    }
}

/// Run the range command.
pub fn run(args: RangeArgs, config: &HapiTimeConfig) -> Result<()> {
    let _cmd = info_span!("range").entered();
    let report = report(&args, &config.output)?;
    output::emit(&report, &config.output)
}

fn report(args: &RangeArgs, output: &OutputToml) -> Result<RangeReport> {
    let range = parse_range(&args.text)
        .with_context(|| format!("failed to parse range {:?}", args.text))?;
    if range.is_reversed() {
        warn!(range = %range, "range ends before it starts");
    }
    Ok(RangeReport {
        input: args.text.clone(),
        range: output::render_range(range, output),
        time_min: format(range.start()),
        time_max: format(range.end()),
        query: output::query_string(range),
        reversed: range.is_reversed(),
        params: args.params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(text: &str, params: bool) -> RangeArgs {
        RangeArgs {
            text: text.to_string(),
            params,
        }
    }

    #[test]
    fn range_text() {
        let report = report(&args("2012-100T02:00/03:45", false), &OutputToml::default()).unwrap();
        assert_eq!(report.to_string(), "2012-04-09T02:00Z/03:45Z");
        assert_eq!(report.time_min, "2012-04-09T02:00Z");
        assert_eq!(report.time_max, "2012-04-09T03:45Z");
        assert!(!report.reversed);
    }

    #[test]
    fn params_text() {
        let report = report(
            &args("P1Y2M10DT2H30M/2008-05-11T15:30:00Z", true),
            &OutputToml::default(),
        )
        .unwrap();
        assert_eq!(
            report.to_string(),
            "time.min=2007-03-01T13:00Z&time.max=2008-05-11T15:30Z"
        );
    }

    #[test]
    fn reversed_range_is_flagged() {
        let report = report(&args("2012-03-28/2012-03-27", false), &OutputToml::default()).unwrap();
        assert!(report.reversed);
    }

    #[test]
    fn json_omits_display_mode() {
        let report = report(&args("2007-03-01T00:00Z/P1D", true), &OutputToml::default()).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["range"], "2007-03-01T00:00Z/2007-03-02T00:00Z");
        assert!(value.get("params").is_none());
    }
}
