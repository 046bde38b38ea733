#![allow(dead_code)]

use async_trait::async_trait;
use file_limit_application::ports::{ActivityLog, FileStore};
use file_limit_domain::{DomainError, FileRecord};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::RwLock;

/// In-memory directory listing with per-file failure injection.
pub struct MockFileStore {
    files: Arc<RwLock<Vec<FileRecord>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    list_should_fail: Arc<RwLock<bool>>,
    delete_calls: Arc<AtomicU64>,
}

impl MockFileStore {
    pub fn new() -> Self {
        Self {
            files: Arc::new(RwLock::new(Vec::new())),
            failing: Arc::new(RwLock::new(HashSet::new())),
            list_should_fail: Arc::new(RwLock::new(false)),
            delete_calls: Arc::new(AtomicU64::new(0)),
        }
    }

    /// `count` files `file_00.log`.. whose ages decrease by one hour each,
    /// so `file_00.log` is the oldest.
    pub async fn with_aged_files(count: usize) -> Self {
        let store = Self::new();
        for i in 0..count {
            let hours_old = (count - i) as u64;
            store
                .add_file(&format!("file_{:02}.log", i), hours_old * 3_600)
                .await;
        }
        store
    }

    pub async fn add_file(&self, name: &str, secs_old: u64) {
        let modified = SystemTime::now() - Duration::from_secs(secs_old);
        self.add_file_at(name, modified).await;
    }

    pub async fn add_file_at(&self, name: &str, modified: SystemTime) {
        let path = PathBuf::from("/data/target").join(name);
        self.files
            .write()
            .await
            .push(FileRecord::new(name, path, modified));
    }

    pub async fn fail_deletion_of(&self, name: &str) {
        self.failing.write().await.insert(name.to_string());
    }

    pub async fn set_list_should_fail(&self, fail: bool) {
        *self.list_should_fail.write().await = fail;
    }

    pub async fn count(&self) -> usize {
        self.files.read().await.len()
    }

    pub async fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .files
            .read()
            .await
            .iter()
            .map(|f| f.name.clone())
            .collect();
        names.sort();
        names
    }

    pub fn delete_calls(&self) -> u64 {
        self.delete_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl FileStore for MockFileStore {
    async fn list_files(&self, dir: &Path) -> Result<Vec<FileRecord>, DomainError> {
        if *self.list_should_fail.read().await {
            return Err(DomainError::DirectoryRead(
                dir.display().to_string(),
                "listing failed".to_string(),
            ));
        }
        Ok(self.files.read().await.clone())
    }

    async fn delete_file(&self, file: &FileRecord) -> Result<(), DomainError> {
        self.delete_calls.fetch_add(1, Ordering::Relaxed);
        if self.failing.read().await.contains(&file.name) {
            return Err(DomainError::DeletionFailed(
                "Permission denied".to_string(),
            ));
        }
        let mut files = self.files.write().await;
        let before = files.len();
        files.retain(|f| f.name != file.name);
        if files.len() == before {
            return Err(DomainError::DeletionFailed(format!(
                "{} not found",
                file.name
            )));
        }
        Ok(())
    }
}

/// Captures every message in order; can be told to fail after N writes.
pub struct RecordingActivityLog {
    lines: Arc<RwLock<Vec<String>>>,
    fail_after: Arc<RwLock<Option<usize>>>,
}

impl RecordingActivityLog {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(RwLock::new(Vec::new())),
            fail_after: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn fail_after(&self, writes: usize) {
        *self.fail_after.write().await = Some(writes);
    }

    pub async fn lines(&self) -> Vec<String> {
        self.lines.read().await.clone()
    }

    pub async fn contains(&self, needle: &str) -> bool {
        self.lines.read().await.iter().any(|l| l.contains(needle))
    }

    pub async fn count_containing(&self, needle: &str) -> usize {
        self.lines
            .read()
            .await
            .iter()
            .filter(|l| l.contains(needle))
            .count()
    }
}

#[async_trait]
impl ActivityLog for RecordingActivityLog {
    async fn log(&self, message: &str) -> Result<(), DomainError> {
        let mut lines = self.lines.write().await;
        if let Some(limit) = *self.fail_after.read().await {
            if lines.len() >= limit {
                return Err(DomainError::LogWrite(
                    "memory".to_string(),
                    "sink closed".to_string(),
                ));
            }
        }
        lines.push(message.to_string());
        Ok(())
    }
}
