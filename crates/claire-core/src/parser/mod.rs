//! Output parsers: turn the `artemis` client's captured text into
//! [`CommandOutput`] values.
//!
//! Dispatch is by [`ArtemisCommand`] only; the text is never sniffed. Each
//! command maps to one pure [`ParseFn`] through [`strategy`]. Commands without
//! a strategy produce no output at all, which callers treat as "nothing to
//! parse" rather than an error.
//!
//! Malformed lines are skipped by [`parse_output`] and logged; use
//! [`parse_output_strict`] to turn them into a single [`ParseError`].

mod perf;
mod queue;

pub use perf::parse_perf_summary;
pub use queue::parse_queue_stat;

use crate::error::{MalformedLine, ParseError};
use crate::types::{ArtemisCommand, CommandOutput};

/// A parsing strategy. Lines that do not fit the grammar are pushed onto the
/// sink instead of aborting the parse.
pub type ParseFn = fn(&str, &mut Vec<MalformedLine>) -> CommandOutput;

/// Look up the parsing strategy for `command`.
pub fn strategy(command: ArtemisCommand) -> Option<ParseFn> {
    match command {
        ArtemisCommand::AddressShow => Some(lines_output),
        ArtemisCommand::QueueCreate => Some(raw_output),
        ArtemisCommand::QueueStat => Some(queue_stat_output),
        ArtemisCommand::PerfClient | ArtemisCommand::PerfProducer | ArtemisCommand::PerfConsumer => {
            Some(perf_summary_output)
        }
        ArtemisCommand::AddressCreate | ArtemisCommand::AddressDelete | ArtemisCommand::QueueDelete => {
            None
        }
    }
}

/// Parse leniently: malformed lines are logged at `warn` and skipped.
pub fn parse_output(command: ArtemisCommand, text: &str) -> Option<CommandOutput> {
    let parse = strategy(command)?;
    let mut malformed = Vec::new();
    let output = parse(text, &mut malformed);
    for line in &malformed {
        tracing::warn!(command = %command, %line, "skipping malformed output line");
    }
    Some(output)
}

/// Parse strictly: any malformed line fails the whole parse with one
/// aggregated [`ParseError::Malformed`].
pub fn parse_output_strict(
    command: ArtemisCommand,
    text: &str,
) -> Result<Option<CommandOutput>, ParseError> {
    let Some(parse) = strategy(command) else {
        return Ok(None);
    };
    let mut malformed = Vec::new();
    let output = parse(text, &mut malformed);
    if malformed.is_empty() {
        Ok(Some(output))
    } else {
        Err(ParseError::Malformed {
            command,
            lines: malformed,
        })
    }
}

/// Split on `\n` exactly; empty lines are kept and nothing is trimmed.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

fn lines_output(text: &str, _: &mut Vec<MalformedLine>) -> CommandOutput {
    CommandOutput::Lines(parse_lines(text))
}

fn raw_output(text: &str, _: &mut Vec<MalformedLine>) -> CommandOutput {
    CommandOutput::Raw(text.to_string())
}

fn queue_stat_output(text: &str, malformed: &mut Vec<MalformedLine>) -> CommandOutput {
    CommandOutput::QueueStats(queue::parse_with(text, malformed))
}

fn perf_summary_output(text: &str, malformed: &mut Vec<MalformedLine>) -> CommandOutput {
    CommandOutput::PerfSummary(perf::parse_with(text, malformed))
}
