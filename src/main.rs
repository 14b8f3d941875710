//! roster - A terminal employee directory.
//!
//! This is the main binary: it loads the configuration, starts logging,
//! and runs the TUI against the configured employee endpoint.

mod logging;

use anyhow::Context;
use roster_client::EmployeeClient;
use roster_config::Config;
use roster_tui::{App, terminal};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    let log_path = config.log_path()?;
    logging::init(&config.logging, &log_path)?;
    info!(
        url = %config.api.collection_url(),
        log = %log_path.display(),
        "starting roster"
    );

    let client = EmployeeClient::new(&config.api)?;

    // Install before entering the session so a panic restores the terminal
    terminal::install_panic_hook();
    let mut session = terminal::TerminalSession::enter()?;

    let mut app = App::new();
    let result = app.run(session.terminal_mut(), client).await;

    // Restore even if the loop failed
    session.exit()?;

    info!("roster exited");
    result
}
