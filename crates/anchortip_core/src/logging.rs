//! Structured logging setup with console and file output.
//!
//! Provides:
//! - Daily rotating log files
//! - Build-type conditional log levels
//! - Console-only fallback when file logging fails
//! - Environment variable override via ANCHORTIP_LOG or RUST_LOG

use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

use crate::error::AnchorTipError;

/// Logging configuration.
pub struct LogConfig {
    /// Directory for log files
    pub log_dir: PathBuf,
    /// Whether running in a PTY (affects output formatting)
    pub is_pty: bool,
    /// Optional custom log filter
    pub log_filter: Option<String>,
}

impl LogConfig {
    /// Create a new logging configuration.
    pub fn new(log_dir: PathBuf) -> Self {
        Self { log_dir, is_pty: atty::is(atty::Stream::Stdout), log_filter: None }
    }

    /// Set custom log filter.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }
}

/// Guard that must be held for the lifetime of the application.
///
/// Dropping this guard flushes pending log entries.
pub struct LoggingGuard {
    _worker_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    /// Whether log lines are also written to a file.
    pub fn has_file_output(&self) -> bool {
        self._worker_guard.is_some()
    }
}

/// Initialize logging with the given configuration.
///
/// If file logging initialization fails, falls back to console-only.
pub fn init_logging(config: LogConfig) -> LoggingGuard {
    // Interactive terminal: console only
    if config.is_pty {
        return init_console_logging(config.log_filter.as_deref());
    }

    match init_file_logging(&config) {
        Ok(guard) => LoggingGuard { _worker_guard: Some(guard) },
        Err(e) => {
            eprintln!("Warning: Failed to initialize file logging: {}. Using console only.", e);
            init_console_logging(config.log_filter.as_deref())
        }
    }
}

/// Initialize with defaults (convenience function).
pub fn init_logging_default() -> LoggingGuard {
    init_logging(LogConfig::new(log_dir()))
}

/// Initialize console-only logging.
fn init_console_logging(filter: Option<&str>) -> LoggingGuard {
    let env_filter = build_env_filter(filter);

    // try_init: a host application may already own the global subscriber
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_target(false)
        .with_thread_ids(false)
        .try_init();

    LoggingGuard { _worker_guard: None }
}

/// Initialize file + console logging.
fn init_file_logging(config: &LogConfig) -> Result<WorkerGuard, AnchorTipError> {
    let file_appender = file_appender(&config.log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Combine console and file output; stdout is left to the caller
    let console = std::io::stderr.with_max_level(tracing::Level::INFO);
    let combined = console.and(non_blocking);

    let env_filter = build_env_filter(config.log_filter.as_deref());

    tracing_subscriber::fmt()
        .with_writer(combined)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .try_init()
        .map_err(|e| AnchorTipError::logging(e.to_string()))?;

    Ok(guard)
}

/// Create the daily rotating appender, creating `dir` if needed.
pub fn file_appender(dir: &Path) -> Result<RollingFileAppender, AnchorTipError> {
    std::fs::create_dir_all(dir).map_err(|e| {
        AnchorTipError::logging(format!("cannot create log directory {}: {e}", dir.display()))
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("anchortip")
        .filename_suffix("log")
        .build(dir)
        .map_err(|e| AnchorTipError::logging(e.to_string()))
}

/// Build the environment filter from config or defaults.
fn build_env_filter(custom_filter: Option<&str>) -> EnvFilter {
    // Priority: custom filter > ANCHORTIP_LOG > RUST_LOG > default
    if let Some(filter) = custom_filter {
        return EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(default_log_filter()));
    }

    EnvFilter::try_from_env("ANCHORTIP_LOG")
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter()))
}

/// Get the default log filter based on build type.
pub fn default_log_filter() -> &'static str {
    #[cfg(debug_assertions)]
    {
        "debug,anchortip=trace,anchortip_core=trace,anchortip_ui=trace"
    }
    #[cfg(not(debug_assertions))]
    {
        "info,anchortip=info,anchortip_core=info,anchortip_ui=info"
    }
}

/// Get the default log directory.
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")).join("anchortip").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_appender_creates_directory() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("nested").join("logs");

        let appender = file_appender(&dir);
        assert!(appender.is_ok());
        assert!(dir.is_dir());
    }

    #[test]
    fn test_file_appender_rejects_file_path() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let err = file_appender(&temp.path().join("logs")).unwrap_err();
        assert_eq!(err.category(), "Logging");
    }

    #[test]
    fn test_console_guard_has_no_file_output() {
        let guard = LoggingGuard { _worker_guard: None };
        assert!(!guard.has_file_output());
    }

    #[test]
    fn test_log_config_with_filter() {
        let config = LogConfig::new(PathBuf::from("/tmp/anchortip")).with_filter("warn");
        assert_eq!(config.log_filter.as_deref(), Some("warn"));
    }

    #[test]
    fn test_default_log_filter_mentions_crates() {
        let filter = default_log_filter();
        assert!(filter.contains("anchortip_ui"));
        assert!(EnvFilter::try_new(filter).is_ok());
    }

    #[test]
    fn test_log_dir_ends_with_app_name() {
        assert!(log_dir().ends_with("anchortip/logs"));
    }
}
