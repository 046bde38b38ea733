use async_trait::async_trait;
use file_limit_application::ports::ActivityLog;
use file_limit_domain::DomainError;

/// Discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullActivityLog;

#[async_trait]
impl ActivityLog for NullActivityLog {
    async fn log(&self, _message: &str) -> Result<(), DomainError> {
        Ok(())
    }
}
