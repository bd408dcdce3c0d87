//! `queue stat` table parser.
//!
//! Only lines starting with `|` are considered. The first one mentioning both
//! `NAME` and `ADDRESS` is the header; every later `|` line is a data row
//! keyed by its second non-empty cell.

use indexmap::IndexMap;

use crate::error::MalformedLine;
use crate::types::QueueStats;

/// Parse a `queue stat` table, skipping rows that cannot be keyed.
pub fn parse_queue_stat(text: &str) -> QueueStats {
    parse_with(text, &mut Vec::new())
}

pub(super) fn parse_with(text: &str, malformed: &mut Vec<MalformedLine>) -> QueueStats {
    let mut headers: Option<Vec<String>> = None;
    let mut queues = QueueStats::new();

    for (idx, line) in text.lines().enumerate() {
        if !line.starts_with('|') {
            continue;
        }
        let cells = cells(line);

        let Some(columns) = headers.as_ref() else {
            if line.contains("NAME") && line.contains("ADDRESS") {
                headers = Some(cells.iter().map(|c| c.to_lowercase()).collect());
            } else if !is_rule(&cells) {
                malformed.push(bad(idx, line, "table row before header"));
            }
            continue;
        };

        if is_rule(&cells) {
            continue;
        }
        // Positional: the key is the second cell, not the first.
        let Some(key) = cells.get(1) else {
            malformed.push(bad(idx, line, "table row has no second cell"));
            continue;
        };

        // Cells beyond the header count are dropped; short rows give short maps.
        let row: IndexMap<String, String> = columns
            .iter()
            .cloned()
            .zip(cells.iter().map(|c| c.to_string()))
            .collect();
        queues.insert(key.to_string(), row);
    }
    queues
}

/// Split on `|`, drop empty segments, then trim what is left.
fn cells(line: &str) -> Vec<&str> {
    line.split('|')
        .filter(|s| !s.is_empty())
        .map(str::trim)
        .collect()
}

/// Border rows such as `|-----|-----|`.
fn is_rule(cells: &[&str]) -> bool {
    !cells.is_empty() && cells.iter().all(|c| !c.is_empty() && c.chars().all(|ch| ch == '-'))
}

fn bad(idx: usize, line: &str, reason: &'static str) -> MalformedLine {
    MalformedLine {
        line_no: idx + 1,
        line: line.to_string(),
        reason,
    }
}
