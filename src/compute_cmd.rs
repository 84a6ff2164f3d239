//! Compute command: weekday of a date given as arguments.

use anyhow::{Result, anyhow};
use tracing::{info, info_span, warn};

use crate::cli::ComputeArgs;
use crate::config::SemanaConfig;
use crate::convert;

/// Validate the date, compute its weekday and print the sentence.
pub fn run(args: ComputeArgs, config: &SemanaConfig) -> Result<()> {
    let _cmd = info_span!("compute").entered();
    let messages = convert::build_messages(config, &args.output)?;
    let calculator = convert::build_calculator(&config.calculator, args.output.strict);
    info!(
        year = args.year,
        month = args.month,
        day = args.day,
        policy = ?calculator.day_policy(),
        lang = ?messages.lang(),
        "computing weekday"
    );

    let weekday = calculator
        .compute(args.year, args.month, args.day)
        .map_err(|e| {
            warn!(error = %e, "input rejected");
            anyhow!(messages.validation_error(&e))
        })?;

    println!(
        "{}",
        messages.result(args.year, args.month, args.day, weekday)
    );
    Ok(())
}
