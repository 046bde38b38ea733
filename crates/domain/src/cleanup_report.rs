use crate::file_age::FileAge;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupOutcome {
    /// The directory held no files.
    Empty,
    /// File count was already at or below the limit.
    WithinLimit,
    /// Oldest files were removed to bring the count down.
    Trimmed,
}

/// Summary of a single cleanup pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupReport {
    pub outcome: CleanupOutcome,
    pub initial_count: usize,
    pub deleted: usize,
    pub failed: usize,
    pub oldest_age: Option<FileAge>,
    pub newest_age: Option<FileAge>,
}

impl CleanupReport {
    pub fn empty() -> Self {
        Self {
            outcome: CleanupOutcome::Empty,
            initial_count: 0,
            deleted: 0,
            failed: 0,
            oldest_age: None,
            newest_age: None,
        }
    }

    pub fn remaining(&self) -> usize {
        self.initial_count - self.deleted
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
