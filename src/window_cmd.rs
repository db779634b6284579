//! Window command: resolve the sampling window for a dataset.

use std::fmt;

use anyhow::{Context, Result, bail};
use hapitime_iso8601::{SampleInfo, default_window, format, sample_window};
use serde::Serialize;
use tracing::{info, info_span};

use crate::cli::WindowArgs;
use crate::config::HapiTimeConfig;
use crate::output;

#[derive(Debug, Serialize)]
pub struct WindowReport {
    pub range: String,
    pub time_min: String,
    pub time_max: String,
    pub query: String,
}

impl fmt::Display for WindowReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.range)
    }
}

/// Run the window command.
pub fn run(args: WindowArgs, config: &HapiTimeConfig) -> Result<()> {
    let _cmd = info_span!("window").entered();
    let report = report(&args, config)?;
    output::emit(&report, &config.output)
}

fn report(args: &WindowArgs, config: &HapiTimeConfig) -> Result<WindowReport> {
    let sample_info = load_sample_info(args)?;
    let window = if config.window.honor_sample_dates {
        sample_window(&sample_info)
    } else {
        default_window(&sample_info)
    }
    .context("failed to resolve sampling window")?;
    info!(window = %window, "resolved sampling window");

    Ok(WindowReport {
        range: output::render_range(window, &config.output),
        time_min: format(window.start()),
        time_max: format(window.end()),
        query: output::query_string(window),
    })
}

fn load_sample_info(args: &WindowArgs) -> Result<SampleInfo> {
    match (&args.info, &args.stop_date) {
        (Some(path), _) => {
            info!(path = %path.display(), "reading info response");
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read info file: {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("failed to parse info JSON: {}", path.display()))
        }
        (None, Some(stop_date)) => Ok(SampleInfo {
            stop_date: stop_date.clone(),
            cadence: args.cadence.clone(),
            ..SampleInfo::default()
        }),
        (None, None) => bail!("no dataset coverage: pass --info or --stop-date"),
    }
}
