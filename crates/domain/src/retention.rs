use crate::file_record::FileRecord;
use std::cmp::Ordering;

/// Split of a directory snapshot into the files to delete and the files to
/// keep so that at most `max_file_count` remain.
///
/// Files are ordered oldest first by modification time. Equal timestamps are
/// ordered by file name so the selection is reproducible.
#[derive(Debug, Clone)]
pub struct RetentionPlan {
    to_delete: Vec<FileRecord>,
    to_keep: Vec<FileRecord>,
}

impl RetentionPlan {
    pub fn new(mut files: Vec<FileRecord>, max_file_count: usize) -> Self {
        files.sort_by(oldest_first);
        let excess = files.len().saturating_sub(max_file_count);
        let to_keep = files.split_off(excess);
        Self {
            to_delete: files,
            to_keep,
        }
    }

    pub fn to_delete(&self) -> &[FileRecord] {
        &self.to_delete
    }

    pub fn to_keep(&self) -> &[FileRecord] {
        &self.to_keep
    }

    pub fn is_within_limit(&self) -> bool {
        self.to_delete.is_empty()
    }

    pub fn oldest(&self) -> Option<&FileRecord> {
        self.to_delete.first().or_else(|| self.to_keep.first())
    }

    pub fn newest(&self) -> Option<&FileRecord> {
        self.to_keep.last().or_else(|| self.to_delete.last())
    }
}

fn oldest_first(a: &FileRecord, b: &FileRecord) -> Ordering {
    a.modified
        .cmp(&b.modified)
        .then_with(|| a.name.cmp(&b.name))
}
