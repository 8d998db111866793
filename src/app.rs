use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::config::OpeningHours;
use crate::data::Menu;
use crate::view::{self, PageView};

pub struct App {
    menu: Menu,
    hours: OpeningHours,
    clock: Box<dyn Clock>,
    scroll: usize,
}

impl App {
    pub fn new(menu: Menu, hours: OpeningHours) -> Self {
        Self::with_clock(menu, hours, Box::new(SystemClock))
    }

    pub fn with_clock(menu: Menu, hours: OpeningHours, clock: Box<dyn Clock>) -> Self {
        Self {
            menu,
            hours,
            clock,
            scroll: 0,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Builds the page for this frame. Reads the clock once.
    pub fn page(&self) -> PageView {
        view::page(&self.menu, &self.hours, self.clock.current_hour())
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.menu.len() {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// The order button does not place orders.
    pub fn press_order(&self) {
        info!(hour = self.clock.current_hour(), "order button pressed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn app_at(hour: u32) -> App {
        App::with_clock(
            Menu::builtin().unwrap(),
            OpeningHours::default(),
            Box::new(FixedClock(hour)),
        )
    }

    #[test]
    fn test_page_uses_injected_clock() {
        assert!(app_at(8).page().footer.is_open());
        assert!(!app_at(7).page().footer.is_open());
    }

    #[test]
    fn test_scroll_bounds() {
        let mut app = app_at(12);
        app.scroll_up();
        assert_eq!(app.scroll(), 0);

        for _ in 0..20 {
            app.scroll_down();
        }
        assert_eq!(app.scroll(), app.menu().len() - 1);

        app.scroll_up();
        assert_eq!(app.scroll(), app.menu().len() - 2);
    }

    #[test]
    fn test_scroll_on_empty_menu() {
        let mut app = App::with_clock(
            Menu::empty(),
            OpeningHours::default(),
            Box::new(FixedClock(12)),
        );
        app.scroll_down();
        assert_eq!(app.scroll(), 0);
    }
}
