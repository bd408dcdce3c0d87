//! Perf `SUMMARY` block parser.
//!
//! Everything up to and including the first line containing `SUMMARY` is
//! ignored. After it, each line is whitespace-collapsed and stripped of the
//! `--- ` decoration, then read as `key: value`. Lines mentioning
//! `aggregated` carry ` - `-separated percentile pairs which are exploded into
//! `<group>_us_<label>` keys.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::MalformedLine;
use crate::types::PerfSummary;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Parse the `SUMMARY` block of a perf run, skipping lines without `: `.
pub fn parse_perf_summary(text: &str) -> PerfSummary {
    parse_with(text, &mut Vec::new())
}

pub(super) fn parse_with(text: &str, malformed: &mut Vec<MalformedLine>) -> PerfSummary {
    let mut summary = PerfSummary::new();
    let mut in_summary = false;

    for (idx, raw) in text.lines().enumerate() {
        if !in_summary {
            in_summary = raw.contains("SUMMARY");
            continue;
        }
        let line = normalize(raw);
        if line.trim().is_empty() || line.contains("SUMMARY") {
            continue;
        }

        let parsed = if line.contains("aggregated") {
            parse_aggregated(&line, &mut summary)
        } else {
            parse_scalar(&line, &mut summary)
        };
        if let Err(reason) = parsed {
            malformed.push(MalformedLine {
                line_no: idx + 1,
                line: raw.to_string(),
                reason,
            });
        }
    }
    summary
}

fn normalize(line: &str) -> String {
    WHITESPACE.replace_all(line, " ").replace("--- ", "")
}

fn metric_key(label: &str) -> String {
    label.trim().replace(' ', "_")
}

fn parse_scalar(line: &str, summary: &mut PerfSummary) -> Result<(), &'static str> {
    let (key, value) = line
        .split_once(": ")
        .ok_or("summary line has no `: ` separator")?;
    summary.insert(metric_key(key), value.trim().to_string());
    Ok(())
}

/// `aggregated send time: mean: 10 us - 50.00%: 9 us - 99%: 30 us`
fn parse_aggregated(line: &str, summary: &mut PerfSummary) -> Result<(), &'static str> {
    let (group, _) = line
        .split_once(':')
        .ok_or("aggregated line has no `:` separator")?;
    let (_, pairs) = line
        .split_once(": ")
        .ok_or("aggregated line has no `: ` separator")?;
    let group = metric_key(group);

    let mut complete = true;
    for pair in pairs.split(" - ") {
        let Some((label, value)) = pair.split_once(": ") else {
            complete = false;
            continue;
        };
        let label = label.trim().replace('%', "");
        let value = value.trim();
        let value = value.strip_suffix(" us").unwrap_or(value);
        summary.insert(format!("{group}_us_{label}"), value.to_string());
    }
    if complete {
        Ok(())
    } else {
        Err("aggregated pair has no `: ` separator")
    }
}
