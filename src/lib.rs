//! # pizza-menu
//!
//! A terminal menu board for a pizza restaurant.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pizza_menu::{Menu, MenuAppError, OpeningHours, PizzaMenu};
//!
//! fn main() -> Result<(), MenuAppError> {
//!     // The house menu is compiled in; `Menu::from_json_file` loads another one.
//!     let menu = Menu::builtin()?;
//!
//!     // Open 8:00 to 22:00, both ends inclusive.
//!     let hours = OpeningHours::new(8, 22)?;
//!
//!     PizzaMenu::new(menu, hours).run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod clock;
pub mod config;
mod data;
pub mod logging;
mod models;
pub mod terminal;
mod ui;
pub mod view;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use thiserror::Error;
use tracing::info;

pub use app::App;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, ConfigError, MenuSource, OpeningHours};
pub use data::{LoadError, Menu};
pub use models::Pizza;
pub use view::PageView;

/// Error type for menu board operations.
#[derive(Debug, Error)]
pub enum MenuAppError {
    #[error("failed to load menu: {0}")]
    Load(#[from] LoadError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A menu board that can be shown in the terminal.
pub struct PizzaMenu {
    app: App,
}

impl PizzaMenu {
    /// Create a board reading the local wall clock.
    pub fn new(menu: Menu, hours: OpeningHours) -> Self {
        Self {
            app: App::new(menu, hours),
        }
    }

    pub fn with_clock(menu: Menu, hours: OpeningHours, clock: Box<dyn Clock>) -> Self {
        Self {
            app: App::with_clock(menu, hours, clock),
        }
    }

    /// Load the menu and pick the clock described by `config`.
    ///
    /// The menu is validated here, so a bad entry stops the program before
    /// anything is drawn.
    pub fn from_config(config: &Config) -> Result<Self, MenuAppError> {
        config.validate()?;
        let menu = config.menu.load()?;
        info!(
            open_hour = config.hours.open_hour(),
            close_hour = config.hours.close_hour(),
            pinned_hour = ?config.hour_override,
            "opening hours configured"
        );

        let clock: Box<dyn Clock> = match config.hour_override {
            Some(hour) => Box::new(FixedClock(hour)),
            None => Box::new(SystemClock),
        };
        Ok(Self::with_clock(menu, config.hours, clock))
    }

    /// Render the page once as plain text.
    pub fn render_text(&self) -> String {
        self.app.page().to_string()
    }

    /// Draw a single frame onto any ratatui backend.
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<(), MenuAppError> {
        let page = self.app.page();
        terminal
            .draw(|frame| ui::render(frame, &page, self.app.scroll()))
            .map_err(|err| io::Error::other(err.to_string()))?;
        Ok(())
    }

    /// Run the board in the terminal.
    ///
    /// This takes over the terminal and returns when the user quits.
    pub fn run(mut self) -> Result<(), MenuAppError> {
        let mut screen = terminal::Screen::enter()?;
        let result = run_event_loop(screen.terminal_mut(), &mut self);
        screen.leave()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    board: &mut PizzaMenu,
) -> Result<(), MenuAppError> {
    loop {
        board.draw(terminal)?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(board.app_mut(), key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the board should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_up();
            false
        }
        KeyCode::Char('o') | KeyCode::Char('O') => {
            if app.page().footer.is_open() {
                app.press_order();
            }
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_at(hour: u32) -> PizzaMenu {
        let config = Config {
            hour_override: Some(hour),
            ..Config::default()
        };
        PizzaMenu::from_config(&config).unwrap()
    }

    #[test]
    fn test_handle_input() {
        let mut board = board_at(12);
        let app = board.app_mut();

        assert!(!handle_input(app, KeyCode::Char('j')));
        assert_eq!(app.scroll(), 1);
        assert!(!handle_input(app, KeyCode::Up));
        assert_eq!(app.scroll(), 0);
        assert!(!handle_input(app, KeyCode::Char('o')));
        assert!(!handle_input(app, KeyCode::Char('x')));
        assert!(handle_input(app, KeyCode::Char('q')));
        assert!(handle_input(app, KeyCode::Esc));
    }

    #[test]
    fn test_from_config_rejects_bad_hour() {
        let config = Config {
            hour_override: Some(24),
            ..Config::default()
        };
        let err = PizzaMenu::from_config(&config).err().unwrap();
        assert!(matches!(err, MenuAppError::Config(ConfigError::HourOutOfRange(24))));
    }

    #[test]
    fn test_from_config_empty_menu() {
        let config = Config {
            menu: MenuSource::Empty,
            hour_override: Some(9),
            ..Config::default()
        };
        let board = PizzaMenu::from_config(&config).unwrap();
        assert!(board.app().menu().is_empty());
        assert!(board.render_text().contains("still working on our menu"));
    }

    #[test]
    fn test_render_text() {
        let text = board_at(23).render_text();
        assert!(text.contains("Fast React Pizza Co."));
        assert!(text.contains("Pizza Salamino"));
        assert!(text.contains("between 8:00 and 22:00"));
    }
}
