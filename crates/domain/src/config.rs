pub mod errors;
pub mod root;

pub use errors::ConfigError;
pub use root::CleanupConfig;
