//! Configuration types for claire.
//!
//! [`Config::load`] reads `~/.config/claire/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Admin account the operator provisions on every broker.
pub const DEFAULT_ADMIN_NAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Where the broker image keeps the bundled `artemis` launcher.
pub const DEFAULT_EXECUTABLE_HOME: &str = "/home/jboss/amq-broker/bin";

/// Perf runs take minutes, so the synchronous bound does too.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(180);

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[artemis]
admin_name      = "admin"
admin_password  = "admin"
executable_home = "/home/jboss/amq-broker/bin"

[execution]
command_timeout_secs = 180
kubectl              = "kubectl"

[parsing]
strict = false

[perf]
message_count = 5000
message_size  = 1024000
duration_secs = 60
consumers     = 50
connections   = 50
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level harness configuration, loaded from `~/.config/claire/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub artemis: ArtemisConfig,
    #[serde(default)]
    pub execution: ExecutionConfig,
    #[serde(default)]
    pub parsing: ParsingConfig,
    #[serde(default)]
    pub perf: PerfConfig,
}

/// `[artemis]` section: credentials and launcher location.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtemisConfig {
    #[serde(default = "default_admin_name")]
    pub admin_name: String,
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    #[serde(default = "default_executable_home")]
    pub executable_home: PathBuf,
}

fn default_admin_name() -> String { DEFAULT_ADMIN_NAME.to_string() }
fn default_admin_password() -> String { DEFAULT_ADMIN_PASSWORD.to_string() }
fn default_executable_home() -> PathBuf { PathBuf::from(DEFAULT_EXECUTABLE_HOME) }

impl Default for ArtemisConfig {
    fn default() -> Self {
        Self {
            admin_name: default_admin_name(),
            admin_password: default_admin_password(),
            executable_home: default_executable_home(),
        }
    }
}

/// `[execution]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecutionConfig {
    #[serde(default = "default_command_timeout_secs")]
    pub command_timeout_secs: u64,
    /// `kubectl` binary used for exec-in-pod.
    #[serde(default = "default_kubectl")]
    pub kubectl: String,
}

fn default_command_timeout_secs() -> u64 { DEFAULT_COMMAND_TIMEOUT.as_secs() }
fn default_kubectl() -> String { "kubectl".to_string() }

impl ExecutionConfig {
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            command_timeout_secs: default_command_timeout_secs(),
            kubectl: default_kubectl(),
        }
    }
}

/// `[parsing]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParsingConfig {
    /// Fail the whole parse on any malformed line instead of skipping it.
    #[serde(default)]
    pub strict: bool,
}

/// `[perf]` section: load profile for producer/consumer runs.
#[derive(Debug, Clone, Deserialize)]
pub struct PerfConfig {
    #[serde(default = "default_message_count")]
    pub message_count: u64,
    #[serde(default = "default_message_size")]
    pub message_size: u64,
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u64,
    #[serde(default = "default_consumers")]
    pub consumers: u32,
    #[serde(default = "default_connections")]
    pub connections: u32,
}

fn default_message_count() -> u64 { 5000 }
fn default_message_size() -> u64 { 1_024_000 }
fn default_duration_secs() -> u64 { 60 }
fn default_consumers() -> u32 { 50 }
fn default_connections() -> u32 { 50 }

impl Default for PerfConfig {
    fn default() -> Self {
        Self {
            message_count: default_message_count(),
            message_size: default_message_size(),
            duration_secs: default_duration_secs(),
            consumers: default_consumers(),
            connections: default_connections(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/claire/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Layer an explicit file over the built-in defaults. A missing file is
    /// not an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("claire")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.artemis.admin_name, DEFAULT_ADMIN_NAME);
        assert_eq!(cfg.artemis.executable_home, PathBuf::from(DEFAULT_EXECUTABLE_HOME));
        assert_eq!(cfg.execution.command_timeout(), DEFAULT_COMMAND_TIMEOUT);
        assert!(!cfg.parsing.strict);
        assert_eq!(cfg.perf.message_count, 5000);
        assert_eq!(cfg.perf.connections, 50);
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[execution]\ncommand_timeout_secs = 5\n[parsing]\nstrict = true\n",
        )
        .unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.execution.command_timeout(), Duration::from_secs(5));
        assert!(cfg.parsing.strict);
        assert_eq!(cfg.execution.kubectl, "kubectl");
        assert_eq!(cfg.artemis.admin_password, DEFAULT_ADMIN_PASSWORD);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.perf.duration_secs, 60);
    }
}
