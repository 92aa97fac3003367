use std::path::PathBuf;

use anyhow::Context as _;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes file-based tracing. Terminal output stays reserved for the
/// chat itself; diagnostics go to a daily-rolled log file. The returned
/// guard must be held for the lifetime of the process.
pub fn init_tracing(log_dir: Option<PathBuf>) -> anyhow::Result<WorkerGuard> {
    let dir = log_dir
        .or_else(|| dirs::data_local_dir().map(|d| d.join("tutor8")))
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, "tutor8.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
