//! Configuration management for the roster application.
//!
//! This crate handles loading, validating, and persisting configuration
//! files.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Top-level configuration struct and loading logic
//! - [`api`]: Location of the employee REST collection
//! - [`logging`]: Log filter and log file destination
//! - [`persistence`]: Config file discovery, reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./roster.json5` or `./roster.json`)
//! 2. User config (`~/.config/roster/config.json5` or `~/.config/roster/config.json`)
//! 3. Built-in defaults
//!
//! The log filter can additionally be overridden at startup with `RUST_LOG`.
//!
//! # File Format
//!
//! ```json5
//! {
//!   api: {
//!     base_url: "http://localhost:8080",
//!     collection: "users",
//!   },
//!   logging: {
//!     filter: "info",
//!     // file: "/tmp/roster.log",
//!   },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use roster_config::Config;
//!
//! # fn example() -> roster_config::Result<()> {
//! let config = Config::load()?;
//! println!("Listing employees from {}", config.api.collection_url());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use api::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, Result};
pub use logging::LoggingConfig;
