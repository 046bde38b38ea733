//! File Limit Domain Layer
pub mod cleanup_report;
pub mod config;
pub mod errors;
pub mod file_age;
pub mod file_record;
pub mod retention;

pub use cleanup_report::{CleanupOutcome, CleanupReport};
pub use config::{CleanupConfig, ConfigError};
pub use errors::DomainError;
pub use file_age::FileAge;
pub use file_record::FileRecord;
pub use retention::RetentionPlan;
