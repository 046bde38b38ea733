use async_trait::async_trait;
use file_limit_application::ports::FileStore;
use file_limit_domain::{DomainError, FileRecord};
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

/// Local filesystem access for the cleanup pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileStore;

impl LocalFileStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn list_files(&self, dir: &Path) -> Result<Vec<FileRecord>, DomainError> {
        let read_error =
            |e: std::io::Error| DomainError::DirectoryRead(dir.display().to_string(), e.to_string());

        let mut entries = fs::read_dir(dir).await.map_err(read_error)?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(read_error)? {
            let path = entry.path();
            // Follows symlinks; a dangling link or a file removed mid-scan is skipped.
            let metadata = match fs::metadata(&path).await {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            if !metadata.is_file() {
                continue;
            }

            let modified = metadata.modified().map_err(|e| {
                DomainError::IoError(format!(
                    "Modification time unavailable for {}: {}",
                    path.display(),
                    e
                ))
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            files.push(FileRecord::new(name, path, modified));
        }

        debug!(dir = %dir.display(), files = files.len(), "Directory listed");
        Ok(files)
    }

    async fn delete_file(&self, file: &FileRecord) -> Result<(), DomainError> {
        fs::remove_file(&file.path)
            .await
            .map_err(|e| DomainError::DeletionFailed(e.to_string()))
    }
}
