// src/watch/fingerprint.rs

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

/// Cheap proxy for file content: size plus modification time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFingerprint {
    len: u64,
    modified: SystemTime,
}

impl FileFingerprint {
    fn from_metadata(meta: &fs::Metadata) -> Self {
        Self {
            len: meta.len(),
            // Platforms without mtime support all collapse to the epoch, so
            // change detection degrades to size-only there.
            modified: meta.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        }
    }
}

/// Last-seen fingerprint for every path ever handed to [`has_changed`].
///
/// Owned exclusively by the orchestrator's poll loop, so no locking. Entries
/// for files that stop matching any pattern are harmless leftovers; an entry
/// is only removed when its path fails to stat, so that a recreated file
/// counts as a fresh first sighting.
///
/// [`has_changed`]: ChangeTracker::has_changed
#[derive(Debug, Default)]
pub struct ChangeTracker {
    fingerprints: HashMap<PathBuf, FileFingerprint>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `path` changed since it was last checked, updating the stored
    /// fingerprint as a side effect.
    ///
    /// A never-seen path always counts as changed. A path that cannot be
    /// stat'd (deleted between glob expansion and this check, say) counts as
    /// changed once and drops its stored fingerprint.
    pub fn has_changed(&mut self, path: &Path) -> bool {
        match fs::metadata(path) {
            Ok(meta) => {
                let current = FileFingerprint::from_metadata(&meta);
                match self.fingerprints.insert(path.to_path_buf(), current) {
                    Some(previous) => previous != current,
                    None => true,
                }
            }
            Err(err) => {
                debug!(path = ?path, error = %err, "stat failed, treating as changed");
                self.fingerprints.remove(path);
                true
            }
        }
    }

    /// Number of paths currently fingerprinted.
    pub fn tracked_paths(&self) -> usize {
        self.fingerprints.len()
    }
}
