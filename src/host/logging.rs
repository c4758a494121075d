use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::error::PowerError;
use crate::model::config::LogConfig;

// Keeps the non-blocking writer alive for the rest of the process.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install file logging for the loaded module (never stdout, the host owns it).
///
/// Returns `Ok(false)` when logging is disabled, already installed by us, or when the
/// host process already has its own global subscriber.
pub fn init(config: &LogConfig) -> Result<bool, PowerError> {
    if !config.enabled || LOG_GUARD.get().is_some() {
        return Ok(false);
    }

    let filter = EnvFilter::try_new(&config.filter).map_err(|source| PowerError::LogFilter {
        filter: config.filter.clone(),
        source,
    })?;

    let log_dir = match &config.directory {
        Some(dir) => dir.clone(),
        None => default_log_dir().ok_or(PowerError::NoLogDir)?,
    };
    fs::create_dir_all(&log_dir).map_err(|source| PowerError::LogDir {
        path: log_dir.clone(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "power.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let installed = tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .try_init()
        .is_ok();

    if !installed {
        return Ok(false);
    }

    let _ = LOG_GUARD.set(guard);
    tracing::info!("power logging to {}", log_dir.display());
    Ok(true)
}

fn default_log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "power").map(|dirs| dirs.data_dir().to_path_buf())
}
