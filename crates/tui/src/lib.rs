//! Terminal UI for the roster application.
//!
//! This crate provides a Ratatui-based employee directory: a table of the
//! employees fetched from the REST endpoint and a form to edit the selected
//! record or add a new one.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct, effects, and run loop
//! - [`state`]: Application state (store, selection, focus, notices)
//! - [`form_state`]: The form draft, field order, and input masks
//! - [`theme`]: Style class strings to terminal styles
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//!
//! # Example
//!
//! ```no_run
//! use roster_client::EmployeeClient;
//! use roster_config::Config;
//! use roster_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let client = EmployeeClient::new(&config.api)?;
//!
//!     terminal::install_panic_hook();
//!     let mut session = terminal::TerminalSession::enter()?;
//!
//!     let mut app = App::new();
//!     let result = app.run(session.terminal_mut(), client).await;
//!
//!     session.exit()?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod form_state;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::{AppState, Focus};
