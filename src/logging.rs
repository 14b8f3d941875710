//! Tracing setup.
//!
//! The terminal is owned by the UI, so records go to a log file. `RUST_LOG`
//! takes precedence over the configured filter.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, anyhow};
use roster_config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Returns the filter directives to use.
fn filter_directives(env: Option<String>, configured: &str) -> String {
    env.filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| configured.to_string())
}

/// Opens `path` for appending, creating it and its parent directory.
fn open_log_file(path: &Path) -> anyhow::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

/// Installs the global subscriber writing to `path`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened, the filter does not
/// parse, or a subscriber is already installed.
pub fn init(config: &LoggingConfig, path: &Path) -> anyhow::Result<()> {
    let directives = filter_directives(std::env::var("RUST_LOG").ok(), &config.filter);
    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid log filter {directives:?}"))?;
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn env_overrides_configured_filter() {
        assert_eq!(
            filter_directives(Some("roster=debug".to_string()), "info"),
            "roster=debug"
        );
        assert_eq!(filter_directives(None, "warn"), "warn");
        assert_eq!(filter_directives(Some("  ".to_string()), "warn"), "warn");
    }

    #[test]
    fn open_log_file_creates_parent_and_appends() {
        use std::io::Write;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("roster.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}
