use crate::error::{GhpeekError, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output to `path`; the terminal belongs to the UI.
///
/// `RUST_LOG` wins over `default_filter`. Keep the returned guard alive until
/// exit or buffered lines are lost.
pub fn init(path: &Path, default_filter: &str) -> Result<WorkerGuard> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let file_name = path
        .file_name()
        .ok_or_else(|| GhpeekError::Config(format!("log file has no name: {}", path.display())))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    Ok(guard)
}
