//! claire-core: command catalogue, output parsers and configuration.
//!
//! # Architecture
//!
//! ```text
//! ArtemisCommand ──► (claire-clients) CommandRequest ──► argv
//!                                                         │
//!        CommandOutput ◄── parser::parse_output ◄── captured text
//! ```
//!
//! Nothing in this crate performs I/O besides [`config::Config::load`].

pub mod config;
pub mod error;
pub mod parser;
pub mod types;

pub use error::{MalformedLine, ParseError, UnknownCommand};
pub use parser::{parse_output, parse_output_strict};
pub use types::{ArtemisCommand, CommandOutput, PerfSummary, QueueStats};
