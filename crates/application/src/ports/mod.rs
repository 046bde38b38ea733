mod activity_log;
mod file_store;

pub use activity_log::ActivityLog;
pub use file_store::FileStore;
