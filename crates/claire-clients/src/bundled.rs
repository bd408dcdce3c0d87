//! The `artemis` launcher bundled with the broker, as a client.

use std::time::Duration;

use claire_core::config::{Config, DEFAULT_ADMIN_NAME, DEFAULT_ADMIN_PASSWORD, DEFAULT_COMMAND_TIMEOUT};
use claire_core::{parse_output, parse_output_strict, ArtemisCommand, CommandOutput};
use claire_exec::{DeployableClient, Executor};

use crate::command::{CommandOptions, CommandRequest};
use crate::{ClientError, Message, MessagingClient, Operation};

/// Runs one admin [`ArtemisCommand`] through a [`DeployableClient`].
///
/// ```rust,ignore
/// let stats = BundledArtemisClient::new(&deployment, ArtemisCommand::QueueStat, CommandOptions::new())
///     .execute_command()
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct BundledArtemisClient<'a, D: DeployableClient> {
    client: &'a D,
    request: CommandRequest,
    timeout: Duration,
    strict: bool,
}

impl<'a, D: DeployableClient> BundledArtemisClient<'a, D> {
    /// Authenticates as the default admin account.
    pub fn new(client: &'a D, command: ArtemisCommand, options: CommandOptions) -> Self {
        Self {
            client,
            request: CommandRequest::new(command, options)
                .with_credentials(DEFAULT_ADMIN_NAME, DEFAULT_ADMIN_PASSWORD),
            timeout: DEFAULT_COMMAND_TIMEOUT,
            strict: false,
        }
    }

    /// Credentials, timeout and parsing mode taken from `config`.
    pub fn from_config(
        client: &'a D,
        command: ArtemisCommand,
        options: CommandOptions,
        config: &Config,
    ) -> Self {
        Self::new(client, command, options)
            .with_credentials(&config.artemis.admin_name, &config.artemis.admin_password)
            .with_timeout(config.execution.command_timeout())
            .strict(config.parsing.strict)
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.request = self.request.with_credentials(username, password);
        self
    }

    pub fn without_credentials(mut self) -> Self {
        self.request = self.request.without_credentials();
        self
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.request = self.request.with_destination(destination);
        self
    }

    /// Bound used by [`execute_command`](Self::execute_command).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fail on malformed output lines instead of skipping them.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn command(&self) -> ArtemisCommand {
        self.request.command
    }

    pub fn request(&self) -> &CommandRequest {
        &self.request
    }

    pub fn command_line(&self) -> Vec<String> {
        self.request.render(self.client.executable_home())
    }

    /// Fire and forget; nothing is parsed.
    pub fn execute_command_in_background(&self) {
        let argv = self.command_line();
        tracing::debug!(command = %self.command(), "starting in background");
        self.client.executor().exec_background_command(&argv);
    }

    pub async fn execute_command(&self) -> Result<Option<CommandOutput>, ClientError> {
        self.execute_command_with_timeout(self.timeout).await
    }

    /// Run synchronously and parse the captured text. `Ok(None)` means the
    /// command has nothing to parse.
    pub async fn execute_command_with_timeout(
        &self,
        timeout: Duration,
    ) -> Result<Option<CommandOutput>, ClientError> {
        let argv = self.command_line();
        let command = self.command();
        let output = self
            .client
            .executor()
            .execute_command(timeout, &argv)
            .await?;

        if command.is_perf() {
            tracing::debug!(%command, "[PERF] client detected, to see its output use trace logging");
            tracing::trace!(%command, "{output}");
        } else {
            tracing::debug!(%command, "{output}");
        }

        if self.strict {
            Ok(parse_output_strict(command, &output)?)
        } else {
            Ok(parse_output(command, &output))
        }
    }

    fn unsupported(&self, operation: Operation) -> ClientError {
        ClientError::Unsupported {
            container: self.client.container_name().to_string(),
            operation,
        }
    }
}

impl<D: DeployableClient> MessagingClient for BundledArtemisClient<'_, D> {
    fn send_messages(&mut self) -> Result<usize, ClientError> {
        Err(self.unsupported(Operation::SendMessages))
    }

    fn receive_messages(&mut self) -> Result<usize, ClientError> {
        Err(self.unsupported(Operation::ReceiveMessages))
    }

    fn subscribe(&mut self) -> Result<(), ClientError> {
        Err(self.unsupported(Operation::Subscribe))
    }

    fn unsubscribe(&mut self) -> Result<(), ClientError> {
        Err(self.unsupported(Operation::Unsubscribe))
    }

    fn sent_messages(&self) -> Result<Vec<Message>, ClientError> {
        Err(self.unsupported(Operation::SentMessages))
    }

    fn received_messages(&self) -> Result<Vec<Message>, ClientError> {
        Err(self.unsupported(Operation::ReceivedMessages))
    }

    fn compare_messages(&self) -> Result<bool, ClientError> {
        Err(self.unsupported(Operation::CompareMessages))
    }

    fn compare_messages_with(&self, _sent: &[Message], _received: &[Message]) -> Result<bool, ClientError> {
        Err(self.unsupported(Operation::CompareMessagesWith))
    }
}
