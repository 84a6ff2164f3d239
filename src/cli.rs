use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Semana day-of-week calculator.
#[derive(Parser)]
#[command(
    name = "semana",
    version,
    about = "Day of the week for Gregorian dates between 1800 and 2199"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./semana.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute the weekday of a date given on the command line.
    Compute(ComputeArgs),
    /// Ask for year, month and day on standard input.
    Prompt(PromptArgs),
}

/// Options shared by every subcommand.
#[derive(clap::Args)]
pub struct OutputArgs {
    /// Reject days past the end of the month (e.g. April 31).
    #[arg(long)]
    pub strict: bool,

    /// Message language: "pt-br" or "en". Overrides [output].lang.
    #[arg(long)]
    pub lang: Option<String>,
}

/// Arguments for the `compute` subcommand.
#[derive(clap::Args)]
pub struct ComputeArgs {
    /// Year (1800..=2199).
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Month number (1..=12).
    #[arg(allow_negative_numbers = true)]
    pub month: i32,

    /// Day of the month (1..=31).
    #[arg(allow_negative_numbers = true)]
    pub day: i32,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `prompt` subcommand.
#[derive(clap::Args)]
pub struct PromptArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}
