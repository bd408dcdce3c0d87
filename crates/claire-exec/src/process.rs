//! Local child-process executor built on `tokio::process`.
//!
//! A prefix turns it into a remote executor: `kubectl exec -n ns pod --`
//! followed by the artemis argv runs the client inside the broker pod.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::{ExecError, Executor};

#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor {
    prefix: Vec<String>,
}

impl ProcessExecutor {
    /// Run argv as-is on this host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `prefix` to every command line.
    pub fn with_prefix<I, S>(prefix: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefix: prefix.into_iter().map(Into::into).collect(),
        }
    }

    /// Run commands inside `pod` through `kubectl exec`.
    pub fn kubectl_exec(kubectl: &str, namespace: &str, pod: &str, container: Option<&str>) -> Self {
        let mut prefix = vec![
            kubectl.to_string(),
            "exec".to_string(),
            "-n".to_string(),
            namespace.to_string(),
            pod.to_string(),
        ];
        if let Some(container) = container {
            prefix.push("-c".to_string());
            prefix.push(container.to_string());
        }
        prefix.push("--".to_string());
        Self { prefix }
    }

    /// The full command line that will be spawned for `argv`.
    pub fn command_line(&self, argv: &[String]) -> Vec<String> {
        self.prefix.iter().chain(argv).cloned().collect()
    }

    fn command(&self, argv: &[String]) -> Result<(Command, String), ExecError> {
        let line = self.command_line(argv);
        let (program, args) = line.split_first().ok_or(ExecError::EmptyCommand)?;
        let mut command = Command::new(program);
        command.args(args).stdin(Stdio::null());
        Ok((command, line.join(" ")))
    }
}

impl Executor for ProcessExecutor {
    async fn execute_command(&self, timeout: Duration, argv: &[String]) -> Result<String, ExecError> {
        let (mut command, line) = self.command(argv)?;
        command
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        tracing::debug!(command = %line, ?timeout, "executing");
        let child = command.spawn().map_err(|source| ExecError::Spawn {
            program: program_of(&line),
            source,
        })?;

        // Dropping the wait future on timeout kills the child.
        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(output) => output?,
            Err(_) => {
                return Err(ExecError::Timeout {
                    command: line,
                    timeout,
                })
            }
        };

        if !output.status.success() {
            return Err(ExecError::NonZeroExit {
                command: line,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Inside a Tokio runtime the child is reaped by a spawned task. Outside
    /// one it is spawned with `std::process` and reaped on a plain thread.
    fn exec_background_command(&self, argv: &[String]) {
        let line = self.command_line(argv);
        let Some((program, args)) = line.split_first() else {
            tracing::error!(err = %ExecError::EmptyCommand, "background command not started");
            return;
        };
        let joined = line.join(" ");

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => spawn_reaped(program, args, joined, &handle),
            Err(_) => spawn_detached(program, args, joined),
        }
    }
}

fn spawn_reaped(program: &str, args: &[String], line: String, handle: &tokio::runtime::Handle) {
    let spawned = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    let mut child = match spawned {
        Ok(child) => child,
        Err(err) => {
            tracing::error!(command = %line, %err, "background command failed to spawn");
            return;
        }
    };
    tracing::debug!(command = %line, pid = ?child.id(), "started in background");

    handle.spawn(async move {
        report_exit(&line, child.wait().await);
    });
}

fn spawn_detached(program: &str, args: &[String], line: String) {
    let spawned = std::process::Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    let mut child = match spawned {
        Ok(child) => child,
        Err(err) => {
            tracing::error!(command = %line, %err, "background command failed to spawn");
            return;
        }
    };
    tracing::debug!(command = %line, pid = child.id(), "started in background without a runtime");

    let reaper = std::thread::Builder::new()
        .name("claire-reaper".to_string())
        .spawn(move || report_exit(&line, child.wait()));
    if let Err(err) = reaper {
        tracing::warn!(%err, "no reaper thread for background command");
    }
}

fn report_exit(line: &str, status: std::io::Result<std::process::ExitStatus>) {
    match status {
        Ok(status) if status.success() => tracing::debug!(command = %line, "background command finished"),
        Ok(status) => tracing::warn!(command = %line, %status, "background command failed"),
        Err(err) => tracing::warn!(command = %line, %err, "lost track of background command"),
    }
}

fn program_of(line: &str) -> String {
    line.split(' ').next().unwrap_or_default().to_string()
}
