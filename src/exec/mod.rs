// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running the external build tool,
//! using `tokio::process::Command`, and reporting success or failure back to
//! the orchestrator.
//!
//! - [`command`] owns the [`BuildCommand`] value and its shell execution.

pub mod command;

pub use command::BuildCommand;
