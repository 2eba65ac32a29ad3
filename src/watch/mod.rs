// src/watch/mod.rs

//! File watching and change detection.
//!
//! This module is responsible for:
//! - Compiling watch glob patterns and expanding them against the filesystem.
//! - Tracking a per-file fingerprint (size + mtime) between polls.
//! - Answering "has anything matching this pattern changed since last asked?".
//!
//! It does **not** know about builds or serving; it only turns filesystem
//! state into per-pattern change answers for the orchestrator's poll loop.

pub mod fingerprint;
pub mod glob;
pub mod recursive;

pub use fingerprint::{ChangeTracker, FileFingerprint};
pub use glob::WatchPattern;
pub use recursive::RecursiveWatcher;
