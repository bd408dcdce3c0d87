//! claire: broker QE harness around the bundled `artemis` admin client.
//!
//! This crate re-exports the public surface of the three layer crates so that integration tests and the
//! `claire` binary can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! ArtemisCommand + CommandOptions ──► CommandRequest::render ──► argv
//!                                                                 │
//!                                        DeployableClient::executor()
//!                                                                 │
//!           CommandOutput ◄── parser::parse_output ◄── captured text
//! ```
//!
//! Synchronous runs block the caller until the executor returns or times out;
//! background runs return immediately and report nothing back.

pub use claire_clients::perf;
pub use claire_core::{config, parser};

pub use claire_clients::{
    acceptor_url, BundledArtemisClient, ClientError, CommandOptions, CommandRequest,
    MessagingClient, Operation, PerfScenario,
};
pub use claire_core::{
    config::Config, parse_output, parse_output_strict, ArtemisCommand, CommandOutput,
    MalformedLine, ParseError, PerfSummary, QueueStats, UnknownCommand,
};
pub use claire_exec::{
    BundledClientDeployment, DeployableClient, ExecError, Executor, LocalDeployment,
    ProcessExecutor,
};
