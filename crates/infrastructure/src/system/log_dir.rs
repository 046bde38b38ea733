use file_limit_domain::DomainError;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const APP_DIR_NAME: &str = "file-limit";

/// Platform default directory for audit logs.
///
/// - Windows: `<local app data>/file-limit/Logs`
/// - Linux: `/var/log/file-limit`, or `~/.local/share/file-limit/logs` when
///   the system location cannot be created
/// - elsewhere: `~/.file-limit/logs`
pub fn default_log_directory() -> Result<PathBuf, DomainError> {
    if cfg!(windows) {
        let base = dirs::data_local_dir().ok_or_else(|| {
            DomainError::LoggerInit("local application data directory is unknown".to_string())
        })?;
        return Ok(base.join(APP_DIR_NAME).join("Logs"));
    }

    if cfg!(target_os = "linux") {
        let system_dir = Path::new("/var/log").join(APP_DIR_NAME);
        return linux_log_directory(&system_dir, dirs::home_dir());
    }

    Ok(home_dir()?.join(format!(".{}", APP_DIR_NAME)).join("logs"))
}

fn linux_log_directory(
    system_dir: &Path,
    home: Option<PathBuf>,
) -> Result<PathBuf, DomainError> {
    match std::fs::create_dir_all(system_dir) {
        Ok(()) => Ok(system_dir.to_path_buf()),
        Err(e) => {
            debug!(
                dir = %system_dir.display(),
                error = %e,
                "System log directory unavailable, using home directory"
            );
            let home = home.ok_or_else(home_unknown)?;
            Ok(home
                .join(".local")
                .join("share")
                .join(APP_DIR_NAME)
                .join("logs"))
        }
    }
}

fn home_dir() -> Result<PathBuf, DomainError> {
    dirs::home_dir().ok_or_else(home_unknown)
}

fn home_unknown() -> DomainError {
    DomainError::LoggerInit("home directory is unknown".to_string())
}
