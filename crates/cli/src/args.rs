use clap::Parser;
use std::path::{Path, PathBuf};

pub const USAGE: &str = "\
Usage:
  file-limit <target-directory> <max-file-count> [noui]
  file-limit --config <config-file-path> [noui]

Arguments:
  target-directory: Path to the directory to monitor
  max-file-count: Maximum number of files to keep in the directory
  --config: Path to JSON configuration file
  noui: (Optional) Suppress all console output";

const NOUI: &str = "noui";

#[derive(Parser, Debug)]
#[command(name = "file-limit")]
#[command(version)]
#[command(about = "Keep a directory under a maximum file count by deleting the oldest files")]
pub struct Cli {
    /// Directory whose top-level files are limited
    #[arg(value_name = "TARGET_DIRECTORY")]
    pub target_directory: Option<String>,

    /// Maximum number of files to keep
    #[arg(value_name = "MAX_FILE_COUNT", allow_negative_numbers = true)]
    pub max_file_count: Option<String>,

    /// Pass `noui` to suppress all output
    #[arg(value_name = "noui")]
    pub mode: Option<String>,

    /// JSON configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress all output, same as the trailing `noui` word
    #[arg(long)]
    pub noui: bool,

    /// Write the audit log to this file instead of the platform log directory
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Do not mirror audit lines to standard output
    #[arg(long)]
    pub no_console: bool,

    /// Diagnostic log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("{}", USAGE)]
    Usage,

    #[error("max-file-count must be a non-negative integer")]
    InvalidCount,

    #[error("Directory '{0}' does not exist")]
    DirectoryNotFound(String),

    #[error("Unexpected argument '{0}'")]
    Unexpected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Direct {
        target_directory: PathBuf,
        max_file_count: usize,
    },
    ConfigFile(PathBuf),
}

/// Where the audit log goes, before any configuration file is consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkOptions {
    pub quiet: bool,
    pub log_file: Option<PathBuf>,
    pub console: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArgs {
    pub invocation: Invocation,
    pub sink: SinkOptions,
}

impl Cli {
    /// Check positional arguments for one of the two invocation forms.
    pub fn resolve(&self) -> Result<ResolvedArgs, ArgumentError> {
        let mut quiet = self.noui;

        let invocation = if let Some(config) = &self.config {
            for extra in [&self.target_directory, &self.max_file_count, &self.mode]
                .into_iter()
                .flatten()
            {
                if is_noui(extra) {
                    quiet = true;
                } else {
                    return Err(ArgumentError::Unexpected(extra.clone()));
                }
            }
            Invocation::ConfigFile(config.clone())
        } else {
            let (Some(dir), Some(count)) = (&self.target_directory, &self.max_file_count) else {
                return Err(ArgumentError::Usage);
            };

            let max_file_count = parse_count(count)?;
            if !Path::new(dir).is_dir() {
                return Err(ArgumentError::DirectoryNotFound(dir.clone()));
            }

            if let Some(mode) = &self.mode {
                if !is_noui(mode) {
                    return Err(ArgumentError::Unexpected(mode.clone()));
                }
                quiet = true;
            }

            Invocation::Direct {
                target_directory: PathBuf::from(dir),
                max_file_count,
            }
        };

        Ok(ResolvedArgs {
            invocation,
            sink: SinkOptions {
                quiet,
                log_file: self.log_file.clone(),
                console: !self.no_console,
            },
        })
    }
}

fn is_noui(word: &str) -> bool {
    word.eq_ignore_ascii_case(NOUI)
}

fn parse_count(raw: &str) -> Result<usize, ArgumentError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| ArgumentError::InvalidCount)
}
