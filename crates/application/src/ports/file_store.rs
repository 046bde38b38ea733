use async_trait::async_trait;
use file_limit_domain::{DomainError, FileRecord};
use std::path::Path;

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Regular files directly under `dir`. Subdirectories are not descended.
    async fn list_files(&self, dir: &Path) -> Result<Vec<FileRecord>, DomainError>;

    async fn delete_file(&self, file: &FileRecord) -> Result<(), DomainError>;
}
