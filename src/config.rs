use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

/// Top-level hapitime configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HapiTimeConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,

    /// Sampling-window settings.
    #[serde(default)]
    pub window: WindowToml,
}

impl HapiTimeConfig {
    /// Loads the configuration file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&toml_str).context("failed to parse TOML config")?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    /// Write same-day ranges with a bare time-of-day end.
    #[serde(default = "default_true")]
    pub compact_ranges: bool,
    /// Emit JSON instead of plain text.
    #[serde(default)]
    pub json: bool,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            compact_ranges: true,
            json: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowToml {
    /// Use `sampleStartDate`/`sampleStopDate` when the info publishes them.
    #[serde(default = "default_true")]
    pub honor_sample_dates: bool,
}

impl Default for WindowToml {
    fn default() -> Self {
        Self {
            honor_sample_dates: true,
        }
    }
}

fn default_true() -> bool {
    true
}
