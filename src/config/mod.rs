// src/config/mod.rs

//! Configuration loading for docreload.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load an optional config file from disk (`loader.rs`).
//! - Merge CLI flags, config file and built-in defaults into the effective
//!   [`Settings`] (`settings.rs`).

pub mod loader;
pub mod model;
pub mod settings;

pub use loader::{DEFAULT_CONFIG_PATH, load_from_path, load_optional};
pub use model::{BuildSection, ConfigFile, ServerSection, WatchSection};
pub use settings::{DEFAULT_HOST, DEFAULT_POLL_INTERVAL_MS, DEFAULT_PORT, Settings};
