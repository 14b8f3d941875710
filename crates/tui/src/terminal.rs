//! Terminal setup and teardown.
//!
//! [`TerminalSession`] owns the raw-mode, alternate-screen terminal for the
//! lifetime of the app and puts the terminal back on [`TerminalSession::exit`]
//! or, failing that, on drop. [`install_panic_hook`] covers panics, which
//! skip both.

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, warn};

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// A terminal in raw mode on the alternate screen, with mouse capture.
///
/// # Examples
///
/// ```no_run
/// use roster_tui::terminal::TerminalSession;
///
/// # fn main() -> Result<(), roster_tui::terminal::TerminalError> {
/// let mut session = TerminalSession::enter()?;
/// session.terminal_mut().clear().ok();
/// session.exit()?;
/// # Ok(())
/// # }
/// ```
pub struct TerminalSession {
    terminal: AppTerminal,
    active: bool,
}

impl TerminalSession {
    /// Enables raw mode, enters the alternate screen, and captures the mouse.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::Setup`] if any terminal operation fails. Raw
    /// mode and the alternate screen are undone before returning.
    pub fn enter() -> Result<Self, TerminalError> {
        enable_raw_mode().map_err(TerminalError::Setup)?;
        let terminal = setup_or_undo(open_screen, || {
            let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })?;
        debug!("terminal session started");
        Ok(Self {
            terminal,
            active: true,
        })
    }

    /// Returns the terminal to draw on.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }

    /// Restores the terminal, reporting failures.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::Restore`] if any terminal operation fails.
    pub fn exit(mut self) -> Result<(), TerminalError> {
        self.restore()
    }

    fn restore(&mut self) -> Result<(), TerminalError> {
        if !std::mem::replace(&mut self.active, false) {
            return Ok(());
        }
        disable_raw_mode().map_err(TerminalError::Restore)?;
        execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )
        .map_err(TerminalError::Restore)?;
        self.terminal.show_cursor().map_err(TerminalError::Restore)?;
        debug!("terminal session ended");
        Ok(())
    }
}

/// Runs `setup`, calling `undo` if it fails.
fn setup_or_undo<T>(
    setup: impl FnOnce() -> io::Result<T>,
    undo: impl FnOnce(),
) -> Result<T, TerminalError> {
    setup().map_err(|err| {
        undo();
        TerminalError::Setup(err)
    })
}

/// Switches stdout to the alternate screen with mouse capture.
fn open_screen() -> io::Result<AppTerminal> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(%err, "terminal left in a bad state");
        }
    }
}

/// Installs a panic hook that restores the terminal before panicking.
///
/// The previous hook still runs afterwards, so the panic message lands on
/// the normal screen. Call once, before [`TerminalSession::enter`].
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn failed_setup_is_undone() {
        let undone = Cell::new(false);
        let result: Result<(), _> = setup_or_undo(
            || Err(io::Error::other("no tty")),
            || undone.set(true),
        );

        assert!(matches!(result, Err(TerminalError::Setup(_))));
        assert!(undone.get());
    }

    #[test]
    fn successful_setup_is_kept() {
        let undone = Cell::new(false);
        let result = setup_or_undo(|| Ok(7), || undone.set(true));

        assert_eq!(result.unwrap(), 7);
        assert!(!undone.get());
    }
}
