//! Core types for claire-core.
//!
//! This module defines the closed [`ArtemisCommand`] catalogue of admin
//! operations and the [`CommandOutput`] values the parsers produce from the
//! client's captured text.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::UnknownCommand;

/// An administration operation supported by the bundled `artemis` client.
///
/// Each variant carries a canonical sub-command (`"queue stat"`) distinct from
/// its identifier (`QUEUE_STAT`). The set is closed; new operations are added
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtemisCommand {
    AddressShow,
    AddressCreate,
    AddressDelete,
    QueueCreate,
    QueueDelete,
    QueueStat,
    PerfClient,
    PerfProducer,
    PerfConsumer,
}

static BY_SUB_COMMAND: phf::Map<&'static str, ArtemisCommand> = phf::phf_map! {
    "address show" => ArtemisCommand::AddressShow,
    "address create" => ArtemisCommand::AddressCreate,
    "address delete" => ArtemisCommand::AddressDelete,
    "queue create" => ArtemisCommand::QueueCreate,
    "queue delete" => ArtemisCommand::QueueDelete,
    "queue stat" => ArtemisCommand::QueueStat,
    "perf client" => ArtemisCommand::PerfClient,
    "perf producer" => ArtemisCommand::PerfProducer,
    "perf consumer" => ArtemisCommand::PerfConsumer,
};

static BY_IDENTIFIER: phf::Map<&'static str, ArtemisCommand> = phf::phf_map! {
    "ADDRESS_SHOW" => ArtemisCommand::AddressShow,
    "ADDRESS_CREATE" => ArtemisCommand::AddressCreate,
    "ADDRESS_DELETE" => ArtemisCommand::AddressDelete,
    "QUEUE_CREATE" => ArtemisCommand::QueueCreate,
    "QUEUE_DELETE" => ArtemisCommand::QueueDelete,
    "QUEUE_STAT" => ArtemisCommand::QueueStat,
    "PERF_CLIENT" => ArtemisCommand::PerfClient,
    "PERF_PRODUCER" => ArtemisCommand::PerfProducer,
    "PERF_CONSUMER" => ArtemisCommand::PerfConsumer,
};

impl ArtemisCommand {
    /// Every command in catalogue order.
    pub const ALL: [ArtemisCommand; 9] = [
        ArtemisCommand::AddressShow,
        ArtemisCommand::AddressCreate,
        ArtemisCommand::AddressDelete,
        ArtemisCommand::QueueCreate,
        ArtemisCommand::QueueDelete,
        ArtemisCommand::QueueStat,
        ArtemisCommand::PerfClient,
        ArtemisCommand::PerfProducer,
        ArtemisCommand::PerfConsumer,
    ];

    /// Canonical sub-command text as typed after `artemis`.
    pub const fn sub_command(self) -> &'static str {
        match self {
            ArtemisCommand::AddressShow => "address show",
            ArtemisCommand::AddressCreate => "address create",
            ArtemisCommand::AddressDelete => "address delete",
            ArtemisCommand::QueueCreate => "queue create",
            ArtemisCommand::QueueDelete => "queue delete",
            ArtemisCommand::QueueStat => "queue stat",
            ArtemisCommand::PerfClient => "perf client",
            ArtemisCommand::PerfProducer => "perf producer",
            ArtemisCommand::PerfConsumer => "perf consumer",
        }
    }

    /// Symbolic identifier, e.g. `QUEUE_STAT`.
    pub const fn identifier(self) -> &'static str {
        match self {
            ArtemisCommand::AddressShow => "ADDRESS_SHOW",
            ArtemisCommand::AddressCreate => "ADDRESS_CREATE",
            ArtemisCommand::AddressDelete => "ADDRESS_DELETE",
            ArtemisCommand::QueueCreate => "QUEUE_CREATE",
            ArtemisCommand::QueueDelete => "QUEUE_DELETE",
            ArtemisCommand::QueueStat => "QUEUE_STAT",
            ArtemisCommand::PerfClient => "PERF_CLIENT",
            ArtemisCommand::PerfProducer => "PERF_PRODUCER",
            ArtemisCommand::PerfConsumer => "PERF_CONSUMER",
        }
    }

    /// The sub-command split into argv tokens.
    pub fn words(self) -> impl Iterator<Item = &'static str> {
        self.sub_command().split(' ')
    }

    /// Load-generation commands, whose output is too noisy for debug logs.
    pub const fn is_perf(self) -> bool {
        matches!(
            self,
            ArtemisCommand::PerfClient | ArtemisCommand::PerfProducer | ArtemisCommand::PerfConsumer
        )
    }
}

impl std::fmt::Display for ArtemisCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.sub_command())
    }
}

impl std::str::FromStr for ArtemisCommand {
    type Err = UnknownCommand;

    /// Accepts either the identifier (`QUEUE_STAT`) or the canonical
    /// sub-command (`queue stat`). Runs of whitespace in the latter are
    /// tolerated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(cmd) = BY_IDENTIFIER.get(trimmed) {
            return Ok(*cmd);
        }
        let words = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");
        BY_SUB_COMMAND
            .get(words.as_str())
            .copied()
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// `queue stat` output: queue name → (lower-cased column header → cell).
pub type QueueStats = IndexMap<String, IndexMap<String, String>>;

/// Perf `SUMMARY` block: metric key → value.
pub type PerfSummary = IndexMap<String, String>;

/// Structured result of parsing one command's captured text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    /// One element per output line, empty lines included.
    Lines(Vec<String>),
    /// Captured text, unmodified.
    Raw(String),
    QueueStats(QueueStats),
    PerfSummary(PerfSummary),
}

impl CommandOutput {
    pub fn as_lines(&self) -> Option<&[String]> {
        match self {
            CommandOutput::Lines(lines) => Some(lines),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&str> {
        match self {
            CommandOutput::Raw(raw) => Some(raw),
            _ => None,
        }
    }

    pub fn as_queue_stats(&self) -> Option<&QueueStats> {
        match self {
            CommandOutput::QueueStats(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn as_perf_summary(&self) -> Option<&PerfSummary> {
        match self {
            CommandOutput::PerfSummary(summary) => Some(summary),
            _ => None,
        }
    }
}
