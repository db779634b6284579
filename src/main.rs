mod cli;
mod config;
mod datum_cmd;
mod duration_cmd;
mod logging;
mod output;
mod range_cmd;
mod window_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::HapiTimeConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = HapiTimeConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Datum(args) => datum_cmd::run(args, &config),
        Command::Duration(args) => duration_cmd::run(args, &config),
        Command::Range(args) => range_cmd::run(args, &config),
        Command::Window(args) => window_cmd::run(args, &config),
    }
}
