//! Command requests and their rendering into argv tokens.
//!
//! Tokens are appended one by one. Option values and destinations containing
//! spaces therefore stay a single token, which the shell-style
//! join-then-split of a command string would not give you.

use std::path::Path;

use claire_core::ArtemisCommand;
use indexmap::IndexMap;

/// `--key[=value]` options in insertion order.
///
/// Inserting an existing key replaces its value but keeps its position. An
/// empty value renders as a bare `--key` flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOptions(IndexMap<String, String>);

impl CommandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn option(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a value-less `--key` flag.
    pub fn flag(self, key: impl Into<String>) -> Self {
        self.option(key, "")
    }

    /// Returns the replaced value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> Option<String> {
        self.0.insert(key.into(), value.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for CommandOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = CommandOptions::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}

/// Everything needed to render one `artemis` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub command: ArtemisCommand,
    pub username: Option<String>,
    pub password: Option<String>,
    pub options: CommandOptions,
    /// Trailing positional argument, e.g. `queue://orders`.
    pub destination: Option<String>,
}

impl CommandRequest {
    pub fn new(command: ArtemisCommand, options: CommandOptions) -> Self {
        Self {
            command,
            username: None,
            password: None,
            options,
            destination: None,
        }
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn without_credentials(mut self) -> Self {
        self.username = None;
        self.password = None;
        self
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// `[<home>/artemis, words.., --user=U, --password=P, --k[=v].., destination]`
    pub fn render(&self, executable_home: &Path) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.options.len() + 6);
        argv.push(executable_home.join("artemis").to_string_lossy().into_owned());
        argv.extend(self.command.words().map(str::to_string));

        if let Some(username) = &self.username {
            argv.push(format!("--user={username}"));
        }
        if let Some(password) = &self.password {
            argv.push(format!("--password={password}"));
        }
        for (key, value) in self.options.iter() {
            if value.is_empty() {
                argv.push(format!("--{key}"));
            } else {
                argv.push(format!("--{key}={value}"));
            }
        }
        if let Some(destination) = &self.destination {
            argv.push(destination.clone());
        }
        argv
    }
}
