use crate::args::{Invocation, ResolvedArgs};
use file_limit_domain::{CleanupConfig, ConfigError};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkKind {
    Null,
    /// Explicit path, or the platform log directory when `None`
    File(Option<PathBuf>),
    ConsoleFile(Option<PathBuf>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub target_directory: PathBuf,
    pub max_file_count: usize,
    pub sink: SinkKind,
}

/// Merge command-line arguments with the configuration file, if one was given.
///
/// A configuration with `enableLogging: false` silences the audit log even
/// when output was not suppressed on the command line.
pub fn load_settings(args: ResolvedArgs) -> Result<RunSettings, ConfigError> {
    let (target_directory, max_file_count, logging_enabled) = match args.invocation {
        Invocation::Direct {
            target_directory,
            max_file_count,
        } => (target_directory, max_file_count, true),
        Invocation::ConfigFile(path) => {
            let config = CleanupConfig::load(&path)?;
            info!(
                path = %path.display(),
                target = %config.target_directory,
                max_file_count = config.max_file_count,
                "Configuration loaded"
            );
            (
                PathBuf::from(&config.target_directory),
                config.retention_limit(),
                config.enable_logging,
            )
        }
    };

    let sink = if args.sink.quiet || !logging_enabled {
        SinkKind::Null
    } else if args.sink.console {
        SinkKind::ConsoleFile(args.sink.log_file)
    } else {
        SinkKind::File(args.sink.log_file)
    };

    Ok(RunSettings {
        target_directory,
        max_file_count,
        sink,
    })
}
