//! FakeExecutor: an in-memory [`Executor`] with scripted responses.
//!
//! Every invocation is recorded in order, so harnesses can assert both the
//! exact argv and the sequencing of background and foreground runs. Delayed
//! responses go through `tokio::time`, so pair them with
//! `#[tokio::test(start_paused = true)]` for deterministic timeout tests.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use claire::{DeployableClient, ExecError, Executor};

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Sync { timeout: Duration, argv: Vec<String> },
    Background(Vec<String>),
}

impl Call {
    pub fn argv(&self) -> &[String] {
        match self {
            Call::Sync { argv, .. } | Call::Background(argv) => argv,
        }
    }

    pub fn is_background(&self) -> bool {
        matches!(self, Call::Background(_))
    }
}

/// What the next synchronous call returns.
#[derive(Debug, Clone)]
pub enum Response {
    /// Captured text, returned immediately.
    Output(String),
    /// Captured text, returned after `delay` unless the timeout fires first.
    Delayed(Duration, String),
    /// Process exited with the given status and stderr.
    Exit(i32, String),
}

#[derive(Debug, Default)]
pub struct FakeExecutor {
    calls: Mutex<Vec<Call>>,
    responses: Mutex<VecDeque<Response>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next synchronous call. Unscripted calls
    /// return empty output.
    pub fn respond(&self, response: Response) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn respond_with(&self, text: impl Into<String>) {
        self.respond(Response::Output(text.into()));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Option<Call> {
        self.calls.lock().unwrap().last().cloned()
    }
}

impl Executor for FakeExecutor {
    async fn execute_command(&self, timeout: Duration, argv: &[String]) -> Result<String, ExecError> {
        self.calls.lock().unwrap().push(Call::Sync {
            timeout,
            argv: argv.to_vec(),
        });
        let next = self.responses.lock().unwrap().pop_front();

        match next.unwrap_or(Response::Output(String::new())) {
            Response::Output(text) => Ok(text),
            Response::Delayed(delay, text) => {
                match tokio::time::timeout(timeout, tokio::time::sleep(delay)).await {
                    Ok(()) => Ok(text),
                    Err(_) => Err(ExecError::Timeout {
                        command: argv.join(" "),
                        timeout,
                    }),
                }
            }
            Response::Exit(code, stderr) => Err(ExecError::NonZeroExit {
                command: argv.join(" "),
                code: Some(code),
                stderr,
            }),
        }
    }

    fn exec_background_command(&self, argv: &[String]) {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Background(argv.to_vec()));
    }
}

/// A [`DeployableClient`] backed by a [`FakeExecutor`].
#[derive(Debug)]
pub struct FakeDeployment {
    pub name: String,
    pub home: PathBuf,
    pub executor: FakeExecutor,
}

impl FakeDeployment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            home: PathBuf::from(FAKE_HOME),
            executor: FakeExecutor::new(),
        }
    }
}

impl DeployableClient for FakeDeployment {
    type Executor = FakeExecutor;

    fn executable_home(&self) -> &Path {
        &self.home
    }

    fn executor(&self) -> &FakeExecutor {
        &self.executor
    }

    fn container_name(&self) -> &str {
        &self.name
    }
}

/// Executable home every [`FakeDeployment`] reports.
pub const FAKE_HOME: &str = "/home/jboss/amq-broker/bin";
