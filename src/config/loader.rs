// src/config/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::model::ConfigFile;

/// Config file looked for in the current working directory when `--config`
/// is not given.
pub const DEFAULT_CONFIG_PATH: &str = "Docreload.toml";

/// Load a configuration file from a given path.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config file at {:?}", path))?;

    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML config from {:?}", path))?;

    Ok(config)
}

/// Load the configuration for this invocation.
///
/// An explicitly passed path must exist and parse; the default
/// `Docreload.toml` is optional and silently skipped when absent.
pub fn load_optional(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_from_path(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.is_file() {
                load_from_path(default)
            } else {
                Ok(ConfigFile::default())
            }
        }
    }
}
