use crate::ports::{ActivityLog, FileStore};
use file_limit_domain::{CleanupOutcome, CleanupReport, DomainError, RetentionPlan};
use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, info, warn};

/// Use case: trim a directory down to a maximum file count, oldest first.
///
/// One sequential pass. Per-file deletion errors are logged and skipped;
/// listing and log-write errors abort the pass and propagate.
pub struct CleanupDirectoryUseCase {
    store: Arc<dyn FileStore>,
    activity: Arc<dyn ActivityLog>,
}

impl CleanupDirectoryUseCase {
    pub fn new(store: Arc<dyn FileStore>, activity: Arc<dyn ActivityLog>) -> Self {
        Self { store, activity }
    }

    pub async fn execute(
        &self,
        target_directory: &Path,
        max_file_count: usize,
    ) -> Result<CleanupReport, DomainError> {
        self.activity
            .log(&format!(
                "Starting cleanup - Target Directory: {}, Max File Count: {}",
                target_directory.display(),
                max_file_count
            ))
            .await?;

        let files = self.store.list_files(target_directory).await?;
        let initial_count = files.len();
        self.activity
            .log(&format!("Current file count: {}", initial_count))
            .await?;

        if files.is_empty() {
            self.activity.log("No files found in directory").await?;
            info!(dir = %target_directory.display(), "Cleanup skipped, directory is empty");
            return Ok(CleanupReport::empty());
        }

        let plan = RetentionPlan::new(files, max_file_count);
        let now = SystemTime::now();
        let oldest_age = plan.oldest().map(|f| f.age_at(now));
        let newest_age = plan.newest().map(|f| f.age_at(now));

        if let (Some(oldest), Some(newest)) = (oldest_age, newest_age) {
            self.activity
                .log(&format!("Oldest file age: {}", oldest))
                .await?;
            self.activity
                .log(&format!("Newest file age: {}", newest))
                .await?;
        }

        let mut report = CleanupReport {
            outcome: CleanupOutcome::WithinLimit,
            initial_count,
            deleted: 0,
            failed: 0,
            oldest_age,
            newest_age,
        };

        if plan.is_within_limit() {
            self.activity
                .log("File count within limit. No files deleted.")
                .await?;
            self.activity.log("Files deleted: 0").await?;
            info!(
                dir = %target_directory.display(),
                files = initial_count,
                max_file_count,
                "File count within limit"
            );
            return Ok(report);
        }

        report.outcome = CleanupOutcome::Trimmed;
        for file in plan.to_delete() {
            let age = file.age_at(SystemTime::now());
            match self.store.delete_file(file).await {
                Ok(()) => {
                    report.deleted += 1;
                    debug!(file = %file.name, %age, "Deleted file");
                    self.activity
                        .log(&format!("Deleted: {} (Age: {})", file.name, age))
                        .await?;
                }
                Err(e) => {
                    report.failed += 1;
                    warn!(file = %file.name, error = %e, "Failed to delete file");
                    self.activity
                        .log(&format!("Error deleting {}: {}", file.name, e))
                        .await?;
                }
            }
        }

        self.activity
            .log(&format!("Files deleted: {}", report.deleted))
            .await?;
        self.activity
            .log(&format!(
                "Cleanup completed. Remaining files: {}",
                report.remaining()
            ))
            .await?;

        info!(
            dir = %target_directory.display(),
            deleted = report.deleted,
            failed = report.failed,
            remaining = report.remaining(),
            "Directory cleanup completed"
        );
        Ok(report)
    }
}
