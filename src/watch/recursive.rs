// src/watch/recursive.rs

use tracing::debug;

use crate::watch::fingerprint::ChangeTracker;
use crate::watch::glob::WatchPattern;

/// Pattern-level change detection: glob expansion composed with the shared
/// [`ChangeTracker`].
#[derive(Debug, Default)]
pub struct RecursiveWatcher {
    tracker: ChangeTracker,
}

impl RecursiveWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything matching `pattern` changed since the last check.
    ///
    /// Every matched path is run through the tracker even after the first
    /// hit. `has_changed` updates fingerprints as it goes, so bailing out
    /// early would leave the remaining files stale and misreport them as
    /// changed on the next cycle.
    pub fn has_pattern_changed(&mut self, pattern: &WatchPattern) -> bool {
        let mut changed = false;

        for path in pattern.expand() {
            if self.tracker.has_changed(&path) {
                debug!(pattern = %pattern.as_str(), path = ?path, "change detected");
                changed = true;
            }
        }

        changed
    }

    /// Number of paths the underlying tracker has fingerprinted.
    pub fn tracked_paths(&self) -> usize {
        self.tracker.tracked_paths()
    }
}
