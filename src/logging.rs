//! Operator-facing log file.
//!
//! Diagnostics (clipboard failures, vault recovery, saves and deletes) go
//! to a daily-rolling file under `<data_dir>/logs`. User-facing messages
//! go through `cli::output` instead.

use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "securevault.log";

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "SECUREVAULT_LOG";

/// Install the global subscriber. Never fails the caller: if the log
/// file cannot be opened, logging is simply unavailable.
pub fn init_tracing(data_dir: &Path, default_filter: &str) {
    let log_dir = log_directory(data_dir);
    if fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let Some(appender) = file_appender(&log_dir) else {
        return;
    };

    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init();
}

pub fn log_directory(data_dir: &Path) -> PathBuf {
    data_dir.join("logs")
}

/// Daily-rolling appender in `log_dir`, or `None` if the log file cannot
/// be opened there.
fn file_appender(log_dir: &Path) -> Option<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(log_dir)
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn appender_opens_in_writable_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(file_appender(tmp.path()).is_some());
    }

    #[test]
    fn appender_in_unusable_dir_is_none() {
        let tmp = TempDir::new().unwrap();
        let not_a_dir = tmp.path().join("logs");
        fs::write(&not_a_dir, "").unwrap();

        assert!(file_appender(&not_a_dir).is_none());
        init_tracing(tmp.path(), "warn");
    }
}
