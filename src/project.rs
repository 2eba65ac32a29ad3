// src/project.rs

//! Sphinx project layout discovery.
//!
//! Follows the conventions `sphinx-quickstart` produces: `conf.py` either in
//! a `source/` directory next to the Makefile or at the documentation root
//! itself, build output under `_build`, rendered HTML under `_build/html`.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::exec::BuildCommand;

/// Fatal layout problems, reported before the watch loop ever starts.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("no Sphinx conf.py found at {root:?} or {root:?}/source")]
    SourceDirNotFound { root: PathBuf },
}

/// Resolved directory layout for one documentation project.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    /// Where the Makefile lives and where the build command runs.
    pub doc_root: PathBuf,
    /// Directory holding `conf.py` and the reST sources.
    pub source_dir: PathBuf,
    /// Build output root.
    pub build_dir: PathBuf,
    /// The directory served to browsers.
    pub html_dir: PathBuf,
}

impl ProjectLayout {
    /// Locate the project around `doc_root`, which may be the documentation
    /// directory itself or the path of the Makefile inside it.
    ///
    /// `build_dir` overrides the default `<root>/_build` when given.
    pub fn discover(
        doc_root: impl AsRef<Path>,
        build_dir: Option<PathBuf>,
    ) -> Result<Self, ProjectError> {
        let mut doc_root = doc_root.as_ref().to_path_buf();
        if doc_root.is_file() {
            doc_root = doc_root
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
        }
        let doc_root = absolutize(doc_root);

        let source_dir = estimate_source_dir(&doc_root)?;
        let build_dir = build_dir.unwrap_or_else(|| doc_root.join("_build"));
        let html_dir = build_dir.join("html");

        debug!(?doc_root, ?source_dir, ?build_dir, "project layout discovered");

        Ok(Self {
            doc_root,
            source_dir,
            build_dir,
            html_dir,
        })
    }

    /// The default build invocation for this layout: `make html` with the
    /// build directory pinned, run from the documentation root.
    pub fn build_command(&self) -> BuildCommand {
        let command = format!("make html BUILDDIR={}", self.build_dir.display());
        BuildCommand::new(command, &self.doc_root)
    }

    /// Patterns every project watches regardless of user-supplied ones: the
    /// Sphinx config, static assets, templates, and every reST source at any
    /// depth under the source directory.
    pub fn default_watch_patterns(&self) -> Vec<String> {
        let src = self.source_dir.display();
        vec![
            format!("{src}/conf.py"),
            format!("{src}/_static/*.css"),
            format!("{src}/_templates/*.html"),
            format!("{src}/*.rst"),
            format!("{src}/**/*.rst"),
        ]
    }
}

/// `source/conf.py` one level below the root wins over `conf.py` at the root
/// itself; anything else means this is not a Sphinx project we understand.
fn estimate_source_dir(doc_root: &Path) -> Result<PathBuf, ProjectError> {
    let nested = doc_root.join("source");
    if nested.join("conf.py").is_file() {
        return Ok(nested);
    }
    if doc_root.join("conf.py").is_file() {
        return Ok(doc_root.to_path_buf());
    }
    Err(ProjectError::SourceDirNotFound {
        root: doc_root.to_path_buf(),
    })
}

fn absolutize(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&path))
            .unwrap_or(path)
    }
}
