//! claire-exec: the execution seam between claire and a broker.
//!
//! An [`Executor`] runs an argv either synchronously, returning the captured
//! standard output, or in the background with no result at all. A
//! [`DeployableClient`] ties an executor to the place the `artemis` launcher
//! lives (a broker pod, a local distribution) and names it for diagnostics.

pub mod deployment;
pub mod process;

use std::future::Future;
use std::path::Path;
use std::time::Duration;

pub use deployment::{BundledClientDeployment, LocalDeployment};
pub use process::ProcessExecutor;

/// Runs rendered command lines somewhere.
pub trait Executor: Send + Sync {
    /// Run `argv` to completion and return its standard output.
    ///
    /// Exceeding `timeout` yields [`ExecError::Timeout`], never partial text.
    fn execute_command(
        &self,
        timeout: Duration,
        argv: &[String],
    ) -> impl Future<Output = Result<String, ExecError>> + Send;

    /// Start `argv` and return immediately. Failures are only visible through
    /// the process's side effects (and the log).
    fn exec_background_command(&self, argv: &[String]);
}

/// A deployed copy of the admin client plus the means to run it.
pub trait DeployableClient: Send + Sync {
    type Executor: Executor;

    /// Directory holding the `artemis` launcher.
    fn executable_home(&self) -> &Path;

    fn executor(&self) -> &Self::Executor;

    /// Identity of the target, used in diagnostics.
    fn container_name(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("`{command}` timed out after {timeout:?}")]
    Timeout { command: String, timeout: Duration },

    #[error("refusing to execute an empty command line")]
    EmptyCommand,

    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {}: {stderr}", exit_label(.code))]
    NonZeroExit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("I/O error while waiting for command: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}
