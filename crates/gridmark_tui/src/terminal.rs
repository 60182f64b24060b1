//! Terminal setup and teardown.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, info, warn};

/// Runs a restore action when dropped. Restores the terminal on every exit
/// path, including an early `?` during setup.
pub struct TerminalGuard {
    restore: Option<Box<dyn FnOnce()>>,
}

impl TerminalGuard {
    /// Creates a guard that calls `restore` exactly once on drop.
    pub fn new(restore: impl FnOnce() + 'static) -> Self {
        Self {
            restore: Some(Box::new(restore)),
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            debug!("Restoring terminal");
            restore();
        }
    }
}

/// Switches to raw mode, the alternate screen and mouse capture.
///
/// The guard is armed right after raw mode is enabled, so a failure in any
/// later step still leaves the terminal usable.
pub fn enter() -> io::Result<TerminalGuard> {
    enable_raw_mode()?;
    let guard = TerminalGuard::new(restore);
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    info!("Terminal entered raw mode with mouse capture");
    Ok(guard)
}

fn restore() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}
