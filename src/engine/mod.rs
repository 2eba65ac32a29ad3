// src/engine/mod.rs

//! Rebuild orchestration.
//!
//! This module owns the poll loop that ties the watch layer to the build
//! action and the reload hub:
//! - an unconditional initial build before the loop starts
//! - per-cycle change detection across all bound patterns
//! - at most one run per distinct action per cycle
//! - reload notification only after a build completes successfully

pub mod orchestrator;

pub use orchestrator::{ActionId, Orchestrator, RebuildAction};
