use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use claire::{
    acceptor_url, ArtemisCommand, BundledArtemisClient, BundledClientDeployment, CommandOptions,
    Config, DeployableClient, LocalDeployment, PerfScenario,
};

#[derive(Parser)]
#[command(name = "claire", about = "Drive the bundled artemis admin client and parse its output")]
struct Cli {
    /// Write debug logs to /tmp/claire-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Config file layered over the built-in defaults.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(flatten)]
    target: Target,

    #[command(subcommand)]
    action: Action,
}

/// Where the client runs: a broker pod (default) or a local install.
#[derive(Args)]
struct Target {
    /// Namespace of the broker pod.
    #[arg(long, short = 'n', default_value = "default")]
    namespace: String,

    /// Broker pod to exec into.
    #[arg(long)]
    pod: Option<String>,

    /// Container within the pod.
    #[arg(long)]
    container: Option<String>,

    /// Run the local launcher instead of exec-ing into a pod.
    #[arg(long)]
    local: bool,

    /// Override the directory holding the `artemis` launcher.
    #[arg(long)]
    executable_home: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Action {
    /// Run one admin command and print its parsed output as JSON.
    Exec(ExecArgs),
    /// Start perf consumers in the background, then run a producer.
    Perf(PerfArgs),
}

#[derive(Args)]
struct ExecArgs {
    /// Command identifier or sub-command text, e.g. QUEUE_STAT or "queue stat".
    #[arg(value_parser = parse_command)]
    command: ArtemisCommand,

    /// `key=value` option, repeatable.
    #[arg(long = "option", short = 'o', value_parser = parse_option)]
    options: Vec<(String, String)>,

    /// Value-less `--key` flag, repeatable.
    #[arg(long = "flag", short = 'f')]
    flags: Vec<String>,

    /// Trailing destination, e.g. queue://orders.
    #[arg(long)]
    destination: Option<String>,

    /// Overrides the configured admin account; needs --password.
    #[arg(long, requires = "password")]
    user: Option<String>,

    #[arg(long, requires = "user")]
    password: Option<String>,

    /// Synchronous timeout in seconds.
    #[arg(long)]
    timeout: Option<u64>,

    /// Start the command and return without waiting.
    #[arg(long)]
    background: bool,
}

#[derive(Args)]
struct PerfArgs {
    /// Acceptor URL; built from --host/--port when absent.
    #[arg(long, required_unless_present = "host")]
    url: Option<String>,

    #[arg(long, requires = "port")]
    host: Option<String>,

    #[arg(long)]
    port: Option<u16>,

    #[arg(long, default_value = "amqp")]
    protocol: String,
}

fn parse_command(s: &str) -> Result<ArtemisCommand, String> {
    s.parse().map_err(|e: claire::UnknownCommand| e.to_string())
}

fn parse_option(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got {s:?}"))
}

fn init_tracing(debug: bool) -> anyhow::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/claire-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("claire debug log started: tail -f /tmp/claire-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|_| Config::defaults()),
    };
    let home = cli
        .target
        .executable_home
        .clone()
        .unwrap_or_else(|| config.artemis.executable_home.clone());

    if cli.target.local {
        run(&LocalDeployment::new(home), &cli.action, &config).await
    } else {
        let pod = cli.target.pod.as_deref().context("--pod is required without --local")?;
        let mut deployment = BundledClientDeployment::new(
            &config.execution.kubectl,
            &cli.target.namespace,
            pod,
            home,
        );
        if let Some(container) = &cli.target.container {
            deployment = deployment.with_container(container);
        }
        run(&deployment, &cli.action, &config).await
    }
}

async fn run<D: DeployableClient>(target: &D, action: &Action, config: &Config) -> anyhow::Result<()> {
    match action {
        Action::Exec(args) => exec(target, args, config).await,
        Action::Perf(args) => perf(target, args, config).await,
    }
}

async fn exec<D: DeployableClient>(target: &D, args: &ExecArgs, config: &Config) -> anyhow::Result<()> {
    let mut options: CommandOptions = args.options.iter().cloned().collect();
    for flag in &args.flags {
        options.insert(flag.as_str(), "");
    }

    let mut client = BundledArtemisClient::from_config(target, args.command, options, config);
    if let (Some(user), Some(password)) = (&args.user, &args.password) {
        client = client.with_credentials(user, password);
    }
    if let Some(destination) = &args.destination {
        client = client.with_destination(destination);
    }
    if let Some(secs) = args.timeout {
        client = client.with_timeout(Duration::from_secs(secs));
    }

    if args.background {
        client.execute_command_in_background();
        // Give the launcher a moment before the runtime shuts down.
        tokio::time::sleep(Duration::from_millis(500)).await;
        return Ok(());
    }

    let output = client
        .execute_command()
        .await
        .with_context(|| format!("`{}` failed on {}", args.command, target.container_name()))?;
    match output {
        Some(output) => println!("{}", serde_json::to_string_pretty(&output)?),
        None => eprintln!("`{}` has no structured output", args.command),
    }
    Ok(())
}

async fn perf<D: DeployableClient>(target: &D, args: &PerfArgs, config: &Config) -> anyhow::Result<()> {
    let url = match (&args.url, &args.host, args.port) {
        (Some(url), _, _) => url.clone(),
        (None, Some(host), Some(port)) => acceptor_url(host, port),
        _ => anyhow::bail!("either --url or --host/--port is required"),
    };

    let scenario = PerfScenario::from_config(&args.protocol, url, config);
    let summary = scenario
        .run(target)
        .await
        .with_context(|| format!("perf run against {} failed", scenario.url))?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
