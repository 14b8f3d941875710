//! Configuration file discovery, reading and writing.
//!
//! Both JSON5 (`.json5`, comments and trailing commas allowed) and plain JSON
//! (`.json`) files are accepted. Files are always written back as pretty JSON.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./roster.json5` or `./roster.json`
//! 2. User: `~/.config/roster/config.json5` or `~/.config/roster/config.json`
//!
//! Logs default to `~/.local/share/roster/roster.log` (or the platform's
//! equivalent data directory).

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Local configuration file names, in priority order.
const CONFIG_FILE_NAMES: &[&str] = &["roster.json5", "roster.json"];

/// Application directory name under the user config and data directories.
const APP_DIR: &str = "roster";

/// User configuration file names, in priority order.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Default log file name.
const LOG_FILE_NAME: &str = "roster.log";

/// Finds the configuration file, looking in the working directory first and
/// the user config directory second.
///
/// Returns `None` when no configuration file exists.
///
/// # Examples
///
/// ```no_run
/// use roster_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(Path::new("."), dirs::config_dir().as_deref())
}

/// Finds the configuration file below explicit local and user directories.
///
/// `user_config_root` is the platform config directory (e.g. `~/.config`);
/// the `roster/` application directory is appended to it.
#[must_use]
pub fn find_config_file_in(local_dir: &Path, user_config_root: Option<&Path>) -> Option<PathBuf> {
    let local = CONFIG_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_config_root
        .map(|root| root.join(APP_DIR))
        .into_iter()
        .flat_map(|dir| USER_CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.exists())
}

/// Returns the default log file path
/// (typically `~/.local/share/roster/roster.log`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_log_path() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR).join(LOG_FILE_NAME))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Reads and parses a JSON5 or JSON configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed into `T`.
///
/// # Examples
///
/// ```no_run
/// use roster_config::persistence::read_config_file;
/// use roster_config::Config;
///
/// # fn main() -> roster_config::Result<()> {
/// let config: Config = read_config_file("roster.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    // JSON5 parser handles both JSON5 and JSON
    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a value to a file as pretty-printed JSON, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be written, or the
/// value cannot be serialized.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.exists()) {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let content = serde_json::to_string_pretty(config)?;

    std::fs::write(path, content).map_err(|e| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
