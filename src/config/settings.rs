// src/config/settings.rs

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};

use crate::cli::CliArgs;
use crate::config::model::ConfigFile;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5500;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Effective settings after merging CLI flags over the config file over
/// built-in defaults.
///
/// Watch patterns are the one exception to the override rule: config and CLI
/// patterns are both additive, since the built-in watch set is unconditional
/// anyway.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub build_dir: Option<PathBuf>,
    pub build_command: Option<String>,
    pub watch_patterns: Vec<String>,
    pub poll_interval: Duration,
}

impl Settings {
    pub fn resolve(args: &CliArgs, config: ConfigFile) -> Result<Self> {
        let host = args
            .host
            .clone()
            .or(config.server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = args.port.or(config.server.port).unwrap_or(DEFAULT_PORT);

        let build_dir = args.build_dir.clone().or(config.build.dir);
        let build_command = config.build.command;

        let mut watch_patterns = config.watch.patterns;
        watch_patterns.extend(args.watch.iter().cloned());

        let poll_interval_ms = args
            .poll_interval_ms
            .or(config.watch.poll_interval_ms)
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS);
        if poll_interval_ms == 0 {
            bail!("poll interval must be at least 1 millisecond");
        }

        Ok(Self {
            host,
            port,
            build_dir,
            build_command,
            watch_patterns,
            poll_interval: Duration::from_millis(poll_interval_ms),
        })
    }
}
