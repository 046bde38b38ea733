use crate::bootstrap::SinkKind;
use file_limit_application::ports::ActivityLog;
use file_limit_domain::DomainError;
use file_limit_infrastructure::logging::{
    ConsoleFileActivityLog, FileActivityLog, NullActivityLog,
};
use std::sync::Arc;
use tracing::info;

pub fn build_activity_log(sink: &SinkKind) -> Result<Arc<dyn ActivityLog>, DomainError> {
    let activity: Arc<dyn ActivityLog> = match sink {
        SinkKind::Null => Arc::new(NullActivityLog),
        SinkKind::File(path) => {
            let log = match path {
                Some(path) => FileActivityLog::new(path)?,
                None => FileActivityLog::with_default_location()?,
            };
            info!(path = %log.path().display(), "Audit log file");
            Arc::new(log)
        }
        SinkKind::ConsoleFile(path) => {
            let log = match path {
                Some(path) => ConsoleFileActivityLog::new(path)?,
                None => ConsoleFileActivityLog::with_default_location()?,
            };
            info!(path = %log.path().display(), "Audit log file");
            Arc::new(log)
        }
    };
    Ok(activity)
}
