//! Time source for the opening-hours check.

use chrono::{Local, Timelike};

/// Something that can tell the current local hour (0..=23).
pub trait Clock {
    fn current_hour(&self) -> u32;
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// A clock stuck at one hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn current_hour(&self) -> u32 {
        self.0
    }
}
