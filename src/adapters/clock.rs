//! Wall-clock sources

use std::cell::Cell;

use crate::core::ports::Clock;

/// The system wall clock, at millisecond resolution
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        chrono::Utc::now().timestamp_millis() as f64 / 1000.0
    }
}

/// A clock that only moves when told to
///
/// Used to simulate elapsed time and process suspension.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    /// Clock reading `start` seconds
    #[must_use]
    pub const fn new(start: f64) -> Self {
        Self { now: Cell::new(start) }
    }

    /// Move forward by `seconds`
    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }

    /// Jump to an absolute reading
    pub fn set(&self, now: f64) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}
