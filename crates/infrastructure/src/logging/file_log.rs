use async_trait::async_trait;
use chrono::Local;
use file_limit_application::ports::ActivityLog;
use file_limit_domain::DomainError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::system::{default_log_directory, APP_DIR_NAME};

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// `YYYY-MM-DD HH:mm:ss - <message>` in local time.
pub fn format_line(message: &str) -> String {
    format!("{} - {}", Local::now().format("%Y-%m-%d %H:%M:%S"), message)
}

/// Appends audit lines to a file.
///
/// The parent directory is created at construction. The file itself is
/// opened in append mode for every line under the write lock, so a failed
/// write never touches lines already on disk.
pub struct FileActivityLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir(parent)?;
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Log file named after the construction time inside `dir`.
    pub fn in_directory(dir: &Path) -> Result<Self, DomainError> {
        create_dir(dir)?;
        let file_name = format!(
            "{}_{}.log",
            APP_DIR_NAME,
            Local::now().format("%Y%m%d_%H%M%S")
        );
        Ok(Self {
            path: dir.join(file_name),
            write_lock: Mutex::new(()),
        })
    }

    pub fn with_default_location() -> Result<Self, DomainError> {
        Self::in_directory(&default_log_directory()?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) async fn append(&self, message: &str, mirror: bool) -> Result<(), DomainError> {
        let line = format_line(message);

        let _guard = self.write_lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| self.write_error(e))?;
        file.write_all(format!("{}{}", line, LINE_ENDING).as_bytes())
            .await
            .map_err(|e| self.write_error(e))?;
        file.flush().await.map_err(|e| self.write_error(e))?;

        if mirror {
            writeln!(std::io::stdout().lock(), "{}", line).map_err(|e| {
                DomainError::LogWrite("stdout".to_string(), e.to_string())
            })?;
        }
        Ok(())
    }

    fn write_error(&self, e: std::io::Error) -> DomainError {
        DomainError::LogWrite(self.path.display().to_string(), e.to_string())
    }
}

#[async_trait]
impl ActivityLog for FileActivityLog {
    async fn log(&self, message: &str) -> Result<(), DomainError> {
        self.append(message, false).await
    }
}

fn create_dir(dir: &Path) -> Result<(), DomainError> {
    std::fs::create_dir_all(dir)
        .map_err(|e| DomainError::LoggerInit(format!("{}: {}", dir.display(), e)))
}
