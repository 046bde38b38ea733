use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use super::errors::ConfigError;

const FIELD_NAMES: [&str; 3] = ["targetDirectory", "maxFileCount", "enableLogging"];

/// Cleanup settings read from a JSON configuration file.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CleanupConfig {
    /// Directory whose top-level files are subject to the limit
    #[serde(default)]
    pub target_directory: String,

    /// Number of files to keep; signed so negative input can be reported
    pub max_file_count: i64,

    /// When false the run writes no audit log at all
    #[serde(default = "default_true")]
    pub enable_logging: bool,
}

fn default_true() -> bool {
    true
}

impl CleanupConfig {
    /// Load and validate configuration from a JSON file.
    ///
    /// Keys are matched case-insensitively. Comments and trailing commas are
    /// accepted.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        if !path.is_file() {
            return Err(ConfigError::NotFound(display));
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(display.clone(), e.to_string()))?;
        let config = Self::from_json(&contents).map_err(|e| ConfigError::Parse(display, e))?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration text without validating it.
    pub fn from_json(contents: &str) -> Result<Self, String> {
        let value: Value = json5::from_str(contents).map_err(|e| e.to_string())?;
        let value = match value {
            Value::Object(map) => Value::Object(canonicalize_keys(map)),
            Value::Null => return Err("document is null".to_string()),
            other => other,
        };
        serde_json::from_value(value).map_err(|e| e.to_string())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_directory.trim().is_empty() {
            return Err(ConfigError::Validation(
                "targetDirectory cannot be empty".to_string(),
            ));
        }

        if !Path::new(&self.target_directory).is_dir() {
            return Err(ConfigError::Validation(format!(
                "Directory '{}' does not exist",
                self.target_directory
            )));
        }

        if self.max_file_count < 0 {
            return Err(ConfigError::Validation(format!(
                "maxFileCount must be non-negative (got {})",
                self.max_file_count
            )));
        }

        Ok(())
    }

    /// Validated limit as an unsigned count.
    pub fn retention_limit(&self) -> usize {
        usize::try_from(self.max_file_count.max(0)).unwrap_or(usize::MAX)
    }
}

fn canonicalize_keys(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, value)| {
            let canonical = FIELD_NAMES
                .iter()
                .find(|name| name.eq_ignore_ascii_case(&key))
                .map(|name| name.to_string())
                .unwrap_or(key);
            (canonical, value)
        })
        .collect()
}
