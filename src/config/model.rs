// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// Every section and every field is optional:
///
/// ```toml
/// [server]
/// host = "0.0.0.0"
/// port = 8000
///
/// [build]
/// dir = "out"
/// command = "sphinx-build -M html source out"
///
/// [watch]
/// patterns = ["demo/**/*.py"]
/// poll_interval_ms = 250
/// ```
///
/// CLI flags take precedence over anything set here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Serving options from `[server]`.
    #[serde(default)]
    pub server: ServerSection,

    /// Build options from `[build]`.
    #[serde(default)]
    pub build: BuildSection,

    /// Watch options from `[watch]`.
    #[serde(default)]
    pub watch: WatchSection,
}

/// `[server]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerSection {
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,
}

/// `[build]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildSection {
    /// Build output directory, as given (relative paths resolve against the
    /// invocation directory, same as `--build-dir`).
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Full replacement for the default `make html` invocation. Still runs
    /// from the documentation root.
    #[serde(default)]
    pub command: Option<String>,
}

/// `[watch]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WatchSection {
    /// Extra glob patterns watched in addition to the built-in set.
    #[serde(default)]
    pub patterns: Vec<String>,

    /// How often to re-check the watched patterns.
    #[serde(default)]
    pub poll_interval_ms: Option<u64>,
}
