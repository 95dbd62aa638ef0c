//! `RunStats` counts what happened to every path in a run. The counters only
//! ever go up, and the traversal threads a single instance through the walk.

use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Paths that were attempted as files (plus stat and listing failures).
    pub total: u64,
    pub completed: u64,
    pub failed: u64,
    /// Directories passed over because recursion was off. Each one is also
    /// counted in `failed` but never in `total`.
    #[serde(skip)]
    pub skipped_dirs: u64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// A path reached the point where it counts as attempted.
    pub fn tick_total(&mut self) {
        self.total += 1;
    }

    pub fn tick_completed(&mut self) {
        self.completed += 1;
    }

    pub fn tick_failed(&mut self) {
        self.failed += 1;
    }

    /// A directory was skipped because recursion is disabled.
    pub fn tick_skipped_dir(&mut self) {
        self.failed += 1;
        self.skipped_dirs += 1;
    }

    /// Every attempted path ended as either completed or failed.
    pub fn is_balanced(&self) -> bool {
        self.total + self.skipped_dirs == self.completed + self.failed
    }
}
