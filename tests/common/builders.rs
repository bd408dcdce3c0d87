//! Test builders: ergonomic constructors for argv vectors and option sets.
//!
//! These are designed for readability in test assertions, not for production
//! use. They panic on invalid input rather than returning `Result`.

use claire::CommandOptions;

/// `["a", "b"]` → `vec!["a".to_string(), "b".to_string()]`.
pub fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}

/// Options from `key=value` / bare `key` strings, e.g. `["url=tcp://h:1", "verbose"]`.
pub fn options(specs: &[&str]) -> CommandOptions {
    specs
        .iter()
        .map(|spec| spec.split_once('=').unwrap_or((*spec, "")))
        .collect()
}

/// The launcher path every fake deployment renders.
pub fn launcher() -> String {
    format!("{}/artemis", super::FAKE_HOME)
}
