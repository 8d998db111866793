//! Tracing setup. The menu owns the terminal, so logs go to a file.

use std::path::Path;

use anyhow::{Result, anyhow};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber writing to `path`.
///
/// Keep the returned guard alive for the lifetime of the process, dropping it
/// flushes buffered log lines.
pub fn init(path: &Path) -> Result<WorkerGuard> {
    let appender = file_appender(path)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(true))
        .try_init()?;

    Ok(guard)
}

/// Opens `path` for appending, creating its directory if needed.
fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("log path {} has no file name", path.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)?;
    Ok(appender)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_appender_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("pizza.log");

        file_appender(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_init_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "").unwrap();

        assert!(init(&blocker.join("pizza.log")).is_err());
    }

    #[test]
    fn test_init_rejects_path_without_file_name() {
        assert!(init(Path::new("/")).is_err());
    }
}
