//! Ownership of the real terminal while the board is shown.

use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use crossterm::{
    ExecutableCommand, cursor,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, warn};

pub type MenuTerminal = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

/// Raw-mode alternate screen. The normal screen comes back on `leave` or,
/// failing that, when the value is dropped.
pub struct Screen {
    terminal: MenuTerminal,
    active: bool,
}

impl Screen {
    pub fn enter() -> io::Result<Self> {
        PANIC_HOOK.call_once(install_panic_hook);

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(cursor::Hide)?;
        debug!("entered alternate screen");

        Ok(Self {
            terminal: Terminal::new(CrosstermBackend::new(stdout))?,
            active: true,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut MenuTerminal {
        &mut self.terminal
    }

    /// Give the terminal back, reporting any failure.
    pub fn leave(mut self) -> io::Result<()> {
        self.active = false;
        restore()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        if self.active {
            if let Err(err) = restore() {
                warn!(error = %err, "failed to restore terminal");
            }
        }
    }
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(cursor::Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    debug!("terminal restored");
    Ok(())
}

// A panic message printed inside the alternate screen would be lost.
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore();
        previous(info);
    }));
}
