//! Log output configuration.
//!
//! The terminal belongs to the UI while the application runs, so log
//! records are written to a file instead of stderr.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default log filter directive.
pub const DEFAULT_FILTER: &str = "info";

/// Where and how much to log.
///
/// # Examples
///
/// ```
/// use roster_config::LoggingConfig;
///
/// let logging = LoggingConfig::default();
/// assert_eq!(logging.filter, "info");
/// assert!(logging.file.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// A `tracing` filter directive such as `"info"` or `"roster_client=debug"`.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Log file path. When unset, the application picks a file in the user
    /// data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_filter() -> String {
    DEFAULT_FILTER.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            file: None,
        }
    }
}
