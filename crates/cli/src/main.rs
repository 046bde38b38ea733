use args::{ArgumentError, Cli};
use clap::error::ErrorKind;
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tracing::{error, info, warn};

mod args;
mod bootstrap;
mod di;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = write!(std::io::stdout().lock(), "{}", e.render());
            return ExitCode::from(1);
        }
    };

    bootstrap::init_logging(cli.log_level.as_deref());

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // stdout may already be gone, e.g. a closed pipe
            let mut out = std::io::stdout().lock();
            let _ = match e.downcast_ref::<ArgumentError>() {
                Some(ArgumentError::Usage) => writeln!(out, "{}", args::USAGE),
                _ => writeln!(out, "Error: {}", e),
            };
            error!(error = %e, "Run aborted");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let resolved = cli.resolve()?;
    let settings = bootstrap::load_settings(resolved)?;

    info!(
        "Starting File Limit v{} on {}",
        env!("CARGO_PKG_VERSION"),
        settings.target_directory.display()
    );

    let activity = di::build_activity_log(&settings.sink)?;
    let use_cases = di::UseCases::new(activity);

    let report = use_cases
        .cleanup_directory
        .execute(&settings.target_directory, settings.max_file_count)
        .await?;

    if report.has_failures() {
        warn!(
            failed = report.failed,
            remaining = report.remaining(),
            "Some files could not be deleted"
        );
    }
    Ok(())
}
