use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Failed to read directory {0}: {1}")]
    DirectoryRead(String, String),

    #[error("{0}")]
    DeletionFailed(String),

    #[error("Failed to initialize log sink: {0}")]
    LoggerInit(String),

    #[error("Failed to write log entry to {0}: {1}")]
    LogWrite(String, String),

    #[error("I/O error: {0}")]
    IoError(String),
}
