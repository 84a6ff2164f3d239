//! Prompt command: read year, month and day from standard input.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, info_span, warn};

use semana_weekday::{ValidationError, WeekdayCalculator, validate_month, validate_year};

use crate::cli::PromptArgs;
use crate::config::SemanaConfig;
use crate::convert;
use crate::messages::{MessageId, Messages};

/// Run an interactive session on stdin/stdout.
pub fn run(args: PromptArgs, config: &SemanaConfig) -> Result<()> {
    let _cmd = info_span!("prompt").entered();
    let messages = convert::build_messages(config, &args.output)?;
    let calculator = convert::build_calculator(&config.calculator, args.output.strict);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let sentence = session(&mut stdin.lock(), &mut stdout.lock(), &calculator, &messages)?;
    println!("{sentence}");
    Ok(())
}

/// Asks for each value in turn, validating it before asking for the next.
///
/// Returns the result sentence. The first rejected answer ends the session
/// with an error carrying the localised explanation.
pub fn session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    calculator: &WeekdayCalculator,
    messages: &Messages,
) -> Result<String> {
    writeln!(output, "{}", messages.template(MessageId::Greeting))?;

    let year = ask(input, output, messages, MessageId::AskYear)?;
    validate_year(year).map_err(|e| reject(messages, &e))?;

    let month = ask(input, output, messages, MessageId::AskMonth)?;
    validate_month(month).map_err(|e| reject(messages, &e))?;

    let day = ask(input, output, messages, MessageId::AskDay)?;
    let weekday = calculator
        .compute(year, month, day)
        .map_err(|e| reject(messages, &e))?;

    Ok(messages.result(year, month, day, weekday))
}

/// Writes the prompt for `id` and reads one integer answer.
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    messages: &Messages,
    id: MessageId,
) -> Result<i32> {
    write!(output, "{}", messages.template(id))?;
    output.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .context("failed to read answer")?;
    if n == 0 {
        bail!(messages.template(MessageId::EndOfInput));
    }
    let answer = line.trim();
    debug!(prompt = ?id, answer, "answer read");
    answer.parse::<i32>().map_err(|_| {
        warn!(answer, "answer is not an integer");
        anyhow!(messages.render(MessageId::NotANumber, &[("input", &answer)]))
    })
}

fn reject(messages: &Messages, err: &ValidationError) -> anyhow::Error {
    warn!(error = %err, "input rejected");
    anyhow!(messages.validation_error(err))
}
