#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse configuration file {0}: {1}")]
    Parse(String, String),

    #[error("Configuration error: {0}")]
    Validation(String),
}
