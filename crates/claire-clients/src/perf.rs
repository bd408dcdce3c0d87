//! Perf-test orchestration with the bundled client.
//!
//! Consumers are started in the background first, then the producer runs in
//! the foreground and its `SUMMARY` block is parsed. The consumers and the
//! producer each write latency histograms (`.hdr`) and JSON reports next to
//! the launcher in the pod; fetching them is up to the caller.

use std::time::Duration;

use claire_core::config::{Config, PerfConfig, DEFAULT_ADMIN_NAME, DEFAULT_ADMIN_PASSWORD, DEFAULT_COMMAND_TIMEOUT};
use claire_core::{ArtemisCommand, CommandOutput, PerfSummary};
use claire_exec::DeployableClient;

use crate::bundled::BundledArtemisClient;
use crate::command::CommandOptions;
use crate::ClientError;

pub const CONSUMER_HDR: &str = "consumer.hdr";
pub const CONSUMER_JSON: &str = "consumer.json";
pub const PRODUCER_HDR: &str = "producer.hdr";
pub const PRODUCER_JSON: &str = "producer.json";

/// Report files a full run leaves behind on the target.
pub fn result_files() -> [&'static str; 4] {
    [PRODUCER_HDR, PRODUCER_JSON, CONSUMER_HDR, CONSUMER_JSON]
}

/// Broker URL for an acceptor reachable at `host:port`.
pub fn acceptor_url(host: &str, port: u16) -> String {
    format!("tcp://{host}:{port}")
}

/// One producer/consumer load run against a single acceptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerfScenario {
    pub protocol: String,
    pub url: String,
    pub message_count: u64,
    pub message_size: u64,
    pub duration_secs: u64,
    pub consumers: u32,
    pub connections: u32,
    pub username: String,
    pub password: String,
    /// Bound on the foreground producer run.
    pub timeout: Duration,
}

impl PerfScenario {
    pub fn new(protocol: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_profile(protocol, url, &PerfConfig::default())
    }

    pub fn with_profile(protocol: impl Into<String>, url: impl Into<String>, profile: &PerfConfig) -> Self {
        Self {
            protocol: protocol.into(),
            url: url.into(),
            message_count: profile.message_count,
            message_size: profile.message_size,
            duration_secs: profile.duration_secs,
            consumers: profile.consumers,
            connections: profile.connections,
            username: DEFAULT_ADMIN_NAME.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
            timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    pub fn from_config(protocol: impl Into<String>, url: impl Into<String>, config: &Config) -> Self {
        Self {
            username: config.artemis.admin_name.clone(),
            password: config.artemis.admin_password.clone(),
            timeout: config.execution.command_timeout(),
            ..Self::with_profile(protocol, url, &config.perf)
        }
    }

    pub fn consumer_options(&self) -> CommandOptions {
        CommandOptions::new()
            .option("message-count", self.message_count)
            .option("protocol", &self.protocol)
            .flag("show-latency")
            .option("consumers", self.consumers)
            .option("num-connections", self.connections)
            .option("url", &self.url)
            .option("hdr", CONSUMER_HDR)
            .option("json", CONSUMER_JSON)
    }

    pub fn producer_options(&self) -> CommandOptions {
        CommandOptions::new()
            .option("message-count", self.message_count)
            .option("message-size", self.message_size)
            .option("duration", self.duration_secs)
            .option("protocol", &self.protocol)
            .flag("show-latency")
            .option("url", &self.url)
            .option("hdr", PRODUCER_HDR)
            .option("json", PRODUCER_JSON)
    }

    /// Launch `perf consumer` in the background.
    pub fn start_consumers<D: DeployableClient>(&self, client: &D) {
        tracing::info!(url = %self.url, protocol = %self.protocol, consumers = self.consumers, "starting perf consumers");
        self.client(client, ArtemisCommand::PerfConsumer, self.consumer_options())
            .execute_command_in_background();
    }

    /// Run `perf producer` to completion and return its summary.
    pub async fn run_producer<D: DeployableClient>(&self, client: &D) -> Result<PerfSummary, ClientError> {
        tracing::info!(url = %self.url, protocol = %self.protocol, "running perf producer");
        let output = self
            .client(client, ArtemisCommand::PerfProducer, self.producer_options())
            .with_timeout(self.timeout)
            .execute_command()
            .await?;
        Ok(match output {
            Some(CommandOutput::PerfSummary(summary)) => summary,
            _ => PerfSummary::new(),
        })
    }

    /// Consumers first, so they are subscribed before the producer starts.
    pub async fn run<D: DeployableClient>(&self, client: &D) -> Result<PerfSummary, ClientError> {
        self.start_consumers(client);
        let summary = self.run_producer(client).await?;
        tracing::info!(metrics = summary.len(), files = ?result_files(), "perf run finished");
        Ok(summary)
    }

    fn client<'a, D: DeployableClient>(
        &self,
        client: &'a D,
        command: ArtemisCommand,
        options: CommandOptions,
    ) -> BundledArtemisClient<'a, D> {
        BundledArtemisClient::new(client, command, options).with_credentials(&self.username, &self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn consumer_options_match_the_load_profile() {
        let scenario = PerfScenario::new("amqp", "tcp://10.129.2.15:5672");
        assert_eq!(
            scenario.consumer_options().iter().collect::<Vec<_>>(),
            [
                ("message-count", "5000"),
                ("protocol", "amqp"),
                ("show-latency", ""),
                ("consumers", "50"),
                ("num-connections", "50"),
                ("url", "tcp://10.129.2.15:5672"),
                ("hdr", "consumer.hdr"),
                ("json", "consumer.json"),
            ]
        );
    }

    #[test]
    fn producer_options_match_the_load_profile() {
        let scenario = PerfScenario::new("CORE", "tcp://10.129.2.15:61616");
        assert_eq!(
            scenario.producer_options().iter().collect::<Vec<_>>(),
            [
                ("message-count", "5000"),
                ("message-size", "1024000"),
                ("duration", "60"),
                ("protocol", "CORE"),
                ("show-latency", ""),
                ("url", "tcp://10.129.2.15:61616"),
                ("hdr", "producer.hdr"),
                ("json", "producer.json"),
            ]
        );
    }

    #[test]
    fn from_config_takes_profile_and_credentials() {
        let mut config = Config::defaults();
        config.perf.consumers = 4;
        config.artemis.admin_name = "perf".into();
        config.execution.command_timeout_secs = 600;

        let scenario = PerfScenario::from_config("amqp", "tcp://h:5672", &config);
        assert_eq!(scenario.consumers, 4);
        assert_eq!(scenario.username, "perf");
        assert_eq!(scenario.timeout, Duration::from_secs(600));
    }

    #[test]
    fn acceptor_url_format() {
        assert_eq!(acceptor_url("10.129.2.15", 61616), "tcp://10.129.2.15:61616");
    }
}
