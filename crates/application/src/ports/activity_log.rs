use async_trait::async_trait;
use file_limit_domain::DomainError;

/// Audit trail for a cleanup pass.
///
/// Implementations prefix each message with a local timestamp and must
/// serialize concurrent calls so lines never interleave.
#[async_trait]
pub trait ActivityLog: Send + Sync {
    async fn log(&self, message: &str) -> Result<(), DomainError>;
}
