// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `docreload`.
///
/// Most flags are optional so the config file can fill them in; see
/// [`crate::config::Settings`] for the precedence rules.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "docreload",
    version,
    about = "Rebuild and live-reload Sphinx documentation on file changes.",
    long_about = None
)]
pub struct CliArgs {
    /// Your documentation's root directory (i.e. where `sphinx-quickstart`
    /// put the Makefile).
    #[arg(value_name = "DOCUMENTATION_ROOT")]
    pub documentation_root: PathBuf,

    /// The desired build directory.
    ///
    /// Default: `_build` under the documentation root.
    #[arg(long, value_name = "DIR")]
    pub build_dir: Option<PathBuf>,

    /// The host to serve files on.
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// The port number from which to serve your documentation.
    #[arg(short = 'p', long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Extra file patterns to watch for changes that should rebuild the docs.
    #[arg(long = "watch", value_name = "PATTERN", num_args = 1..)]
    pub watch: Vec<String>,

    /// How often to re-check watched patterns, in milliseconds.
    #[arg(long, value_name = "MILLIS")]
    pub poll_interval_ms: Option<u64>,

    /// Path to a config file (TOML).
    ///
    /// Default: `Docreload.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DOCRELOAD_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
