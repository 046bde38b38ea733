#![allow(dead_code)]
use file_limit_domain::FileRecord;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Fixed reference instant so ages are exact in assertions.
pub fn base_time() -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(1_700_000_000)
}

pub struct FileRecordBuilder {
    name: String,
    dir: PathBuf,
    modified: SystemTime,
}

impl FileRecordBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            dir: PathBuf::from("/var/tmp/artifacts"),
            modified: base_time(),
        }
    }

    pub fn secs_after_base(mut self, secs: u64) -> Self {
        self.modified = base_time() + Duration::from_secs(secs);
        self
    }

    pub fn modified(mut self, modified: SystemTime) -> Self {
        self.modified = modified;
        self
    }

    pub fn in_dir(mut self, dir: &str) -> Self {
        self.dir = PathBuf::from(dir);
        self
    }

    pub fn build(self) -> FileRecord {
        let path = self.dir.join(&self.name);
        FileRecord::new(self.name, path, self.modified)
    }
}

/// `count` records named `file_00.log`.. with strictly ascending timestamps.
pub fn ascending_records(count: usize) -> Vec<FileRecord> {
    (0..count)
        .map(|i| {
            FileRecordBuilder::new(&format!("file_{:02}.log", i))
                .secs_after_base(i as u64 * 60)
                .build()
        })
        .collect()
}
