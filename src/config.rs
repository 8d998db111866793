//! Runtime configuration: where the menu comes from and when the shop is open.

use std::path::PathBuf;

use thiserror::Error;

use crate::data::{LoadError, Menu};

pub const DEFAULT_OPEN_HOUR: u32 = 8;
pub const DEFAULT_CLOSE_HOUR: u32 = 22;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not an hour of the day (expected 0-23)")]
    HourOutOfRange(u32),

    #[error("opening hour {open} is after closing hour {close}")]
    InvertedHours { open: u32, close: u32 },
}

/// Inclusive window of hours during which ordering is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    open_hour: u32,
    close_hour: u32,
}

impl OpeningHours {
    pub fn new(open_hour: u32, close_hour: u32) -> Result<Self, ConfigError> {
        for hour in [open_hour, close_hour] {
            if hour > 23 {
                return Err(ConfigError::HourOutOfRange(hour));
            }
        }
        if open_hour > close_hour {
            return Err(ConfigError::InvertedHours {
                open: open_hour,
                close: close_hour,
            });
        }
        Ok(Self {
            open_hour,
            close_hour,
        })
    }

    pub fn open_hour(&self) -> u32 {
        self.open_hour
    }

    pub fn close_hour(&self) -> u32 {
        self.close_hour
    }

    /// Both ends are inclusive: a shop open 8-22 is still open at 22:59.
    pub fn is_open_at(&self, hour: u32) -> bool {
        hour >= self.open_hour && hour <= self.close_hour
    }
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            open_hour: DEFAULT_OPEN_HOUR,
            close_hour: DEFAULT_CLOSE_HOUR,
        }
    }
}

/// Where the menu is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MenuSource {
    #[default]
    Builtin,
    File(PathBuf),
    Empty,
}

impl MenuSource {
    pub fn load(&self) -> Result<Menu, LoadError> {
        match self {
            MenuSource::Builtin => Menu::builtin(),
            MenuSource::File(path) => Menu::from_json_file(path),
            MenuSource::Empty => Ok(Menu::empty()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub menu: MenuSource,
    pub hours: OpeningHours,
    /// Pins the clock to this hour instead of reading the wall clock.
    pub hour_override: Option<u32>,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.hour_override {
            Some(hour) if hour > 23 => Err(ConfigError::HourOutOfRange(hour)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hours() {
        let hours = OpeningHours::default();
        assert_eq!(hours.open_hour(), 8);
        assert_eq!(hours.close_hour(), 22);
    }

    #[test]
    fn test_open_window_is_inclusive() {
        let hours = OpeningHours::new(8, 22).unwrap();
        assert!(!hours.is_open_at(7));
        assert!(hours.is_open_at(8));
        assert!(hours.is_open_at(15));
        assert!(hours.is_open_at(22));
        assert!(!hours.is_open_at(23));
        assert!(!hours.is_open_at(0));
    }

    #[test]
    fn test_rejects_bad_hours() {
        assert_eq!(
            OpeningHours::new(8, 24),
            Err(ConfigError::HourOutOfRange(24))
        );
        assert_eq!(
            OpeningHours::new(22, 8),
            Err(ConfigError::InvertedHours { open: 22, close: 8 })
        );
        assert!(OpeningHours::new(12, 12).is_ok());
    }

    #[test]
    fn test_hour_override_validated() {
        let config = Config {
            hour_override: Some(30),
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::HourOutOfRange(30)));
    }

    #[test]
    fn test_menu_source_empty() {
        assert!(MenuSource::Empty.load().unwrap().is_empty());
        assert_eq!(MenuSource::Builtin.load().unwrap().len(), 6);
    }
}
