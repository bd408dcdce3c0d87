//! Shared test utilities for claire integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. The fake executor never spawns processes and is
//! deterministic under `tokio::time::pause()`.

pub mod assertions;
pub mod builders;
pub mod fake_executor;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fake_executor::*;
pub use fixtures::*;
