//! Error types for claire-core.

use crate::types::ArtemisCommand;

/// Textual lookup of an [`ArtemisCommand`] found no match.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown artemis command: {0}")]
pub struct UnknownCommand(pub String);

/// One line of captured output that did not fit its command's grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based line number within the captured text.
    pub line_no: usize,
    pub line: String,
    pub reason: &'static str,
}

impl std::fmt::Display for MalformedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {} ({:?})", self.line_no, self.reason, self.line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Every offending line of one parse, aggregated into a single failure.
    #[error("malformed `{command}` output, {} bad line(s): {}", .lines.len(), join_lines(.lines))]
    Malformed {
        command: ArtemisCommand,
        lines: Vec<MalformedLine>,
    },
}

fn join_lines(lines: &[MalformedLine]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
