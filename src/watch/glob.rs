// src/watch/glob.rs

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobMatcher};
use walkdir::WalkDir;

/// A compiled watch glob.
///
/// Supports `*` (single path segment) and `**` (any number of directory
/// levels). The pattern is compiled once at bind time; expansion re-reads the
/// filesystem on every call, which is how new files get discovered between
/// polls.
#[derive(Debug, Clone)]
pub struct WatchPattern {
    raw: String,
    base: PathBuf,
    matcher: GlobMatcher,
}

impl WatchPattern {
    /// Compile `pattern`. Fails on invalid glob syntax, which callers treat
    /// as a startup configuration error.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let raw = pattern.into();
        // Glob syntax is forward-slash only; on Windows, `\` in a pattern is
        // a path separator rather than an escape.
        #[cfg(windows)]
        let raw = raw.replace('\\', "/");
        let glob = GlobBuilder::new(&raw)
            .literal_separator(true)
            .build()
            .with_context(|| format!("invalid glob pattern: {raw}"))?;
        let base = literal_prefix(&raw);
        Ok(Self {
            raw,
            base,
            matcher: glob.compile_matcher(),
        })
    }

    /// The pattern as originally written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Expand the pattern against the current filesystem state.
    ///
    /// Returns matching files in sorted order. A pattern rooted in a
    /// directory that does not exist expands to nothing; that is not an
    /// error, the directory may appear later.
    pub fn expand(&self) -> Vec<PathBuf> {
        if !self.base.exists() {
            return Vec::new();
        }

        let mut matches: Vec<PathBuf> = WalkDir::new(&self.base)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| self.matcher.is_match(path))
            .collect();

        matches.sort();
        matches
    }
}

/// Longest leading run of pattern components free of glob metacharacters.
/// This is the directory the expansion walk starts from.
fn literal_prefix(pattern: &str) -> PathBuf {
    let mut base = PathBuf::new();

    for component in Path::new(pattern).components() {
        let text = component.as_os_str().to_string_lossy();
        if text.contains(['*', '?', '[', '{']) {
            break;
        }
        base.push(component.as_os_str());
    }

    if base.as_os_str().is_empty() {
        base.push(".");
    }
    base
}
