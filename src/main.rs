mod cli;
mod compute_cmd;
mod config;
mod convert;
mod logging;
mod messages;
mod prompt_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::SemanaConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config: SemanaConfig = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Compute(args) => compute_cmd::run(args, &config),
        Command::Prompt(args) => prompt_cmd::run(args, &config),
    }
}
