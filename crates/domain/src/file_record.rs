use crate::file_age::FileAge;
use std::path::PathBuf;
use std::time::SystemTime;

/// One regular file found at the top level of the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub name: String,
    pub path: PathBuf,
    pub modified: SystemTime,
}

impl FileRecord {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, modified: SystemTime) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            modified,
        }
    }

    /// Elapsed time since the last write, as seen from `now`.
    pub fn age_at(&self, now: SystemTime) -> FileAge {
        FileAge::between(self.modified, now)
    }
}
