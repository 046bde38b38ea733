use file_limit_application::ports::ActivityLog;
use file_limit_application::use_cases::CleanupDirectoryUseCase;
use file_limit_infrastructure::repositories::LocalFileStore;
use std::sync::Arc;

pub struct UseCases {
    pub cleanup_directory: Arc<CleanupDirectoryUseCase>,
}

impl UseCases {
    pub fn new(activity: Arc<dyn ActivityLog>) -> Self {
        let store = Arc::new(LocalFileStore::new());

        Self {
            cleanup_directory: Arc::new(CleanupDirectoryUseCase::new(store, activity)),
        }
    }
}
