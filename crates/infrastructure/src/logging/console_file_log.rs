use async_trait::async_trait;
use file_limit_application::ports::ActivityLog;
use file_limit_domain::DomainError;
use std::path::{Path, PathBuf};

use super::file_log::FileActivityLog;

/// File sink that also echoes every line to standard output.
pub struct ConsoleFileActivityLog {
    file: FileActivityLog,
}

impl ConsoleFileActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        Ok(Self {
            file: FileActivityLog::new(path)?,
        })
    }

    pub fn in_directory(dir: &Path) -> Result<Self, DomainError> {
        Ok(Self {
            file: FileActivityLog::in_directory(dir)?,
        })
    }

    pub fn with_default_location() -> Result<Self, DomainError> {
        Ok(Self {
            file: FileActivityLog::with_default_location()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[async_trait]
impl ActivityLog for ConsoleFileActivityLog {
    async fn log(&self, message: &str) -> Result<(), DomainError> {
        self.file.append(message, true).await
    }
}
