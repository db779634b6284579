use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ISO-8601 time tools for HAPI server verification.
#[derive(Parser)]
#[command(
    name = "hapitime",
    version,
    about = "Parse, normalize and format ISO-8601 times for HAPI requests"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Parse a datum and print it in canonical form.
    Datum(DatumArgs),
    /// Parse a duration and print its canonical text and cadence.
    Duration(DurationArgs),
    /// Parse a time range.
    Range(RangeArgs),
    /// Resolve the sampling window for a dataset.
    Window(WindowArgs),
}

/// Arguments for the `datum` subcommand.
#[derive(clap::Args)]
pub struct DatumArgs {
    /// Datum text, e.g. 2012-100T02:00Z.
    pub text: String,

    /// Render in the layout and precision the datum was written with.
    #[arg(short, long)]
    pub precise: bool,
}

/// Arguments for the `duration` subcommand.
#[derive(clap::Args)]
pub struct DurationArgs {
    /// Duration text, e.g. P1Y2M10DT2H30M.
    pub text: String,
}

/// Arguments for the `range` subcommand.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// Range text: start/end, start/duration or duration/end.
    pub text: String,

    /// Print the time.min / time.max request parameters.
    #[arg(long)]
    pub params: bool,
}

/// Arguments for the `window` subcommand.
#[derive(clap::Args)]
pub struct WindowArgs {
    /// Path to a HAPI info response (JSON).
    #[arg(
        short,
        long,
        conflicts_with_all = ["stop_date", "cadence"],
        required_unless_present = "stop_date"
    )]
    pub info: Option<PathBuf>,

    /// Dataset stop date (conflicts with --info).
    #[arg(long)]
    pub stop_date: Option<String>,

    /// Dataset cadence as an ISO-8601 duration.
    #[arg(long, requires = "stop_date")]
    pub cadence: Option<String>,
}
