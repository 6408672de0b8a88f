//! Timer observer port
//!
//! Hosts attach a [`TimerListener`] to learn when the countdown starts,
//! stops, ticks or expires. Every method has an empty default, so a listener
//! only implements the notifications it cares about.

use serde::Serialize;

/// Snapshot of the countdown passed to every notification
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimerStatus {
    /// Whether the countdown is running
    pub running: bool,
    /// Remaining time in fractional seconds, never negative
    pub remaining: f64,
    /// Remaining time rounded up to a whole second for display
    pub display_seconds: u32,
}

impl TimerStatus {
    /// Build a status from a remaining value in seconds
    #[must_use]
    pub fn new(running: bool, remaining: f64) -> Self {
        let remaining = remaining.max(0.0);
        Self {
            running,
            remaining,
            display_seconds: remaining.ceil() as u32,
        }
    }

    /// Render the display value as `MM:SS`
    #[must_use]
    pub fn clock_text(&self) -> String {
        format!("{:02}:{:02}", self.display_seconds / 60, self.display_seconds % 60)
    }
}

/// Kind of timer notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerEvent {
    /// The countdown started (or a listener attached to a running timer)
    Start,
    /// The countdown stopped (or a listener attached to a stopped timer)
    Stop,
    /// Periodic refresh
    Tick,
    /// The countdown reached zero
    Expire,
}

/// Observer of countdown state changes
pub trait TimerListener {
    /// Called when the countdown starts
    fn on_start(&mut self, _status: &TimerStatus) {}

    /// Called when the countdown stops
    fn on_stop(&mut self, _status: &TimerStatus) {}

    /// Called on every periodic tick and after a reset
    fn on_tick(&mut self, _status: &TimerStatus) {}

    /// Called once when the countdown reaches zero, before it stops
    fn on_expire(&mut self, _status: &TimerStatus) {}

    /// Dispatch an event to the matching method
    fn notify(&mut self, event: TimerEvent, status: &TimerStatus) {
        match event {
            TimerEvent::Start => self.on_start(status),
            TimerEvent::Stop => self.on_stop(status),
            TimerEvent::Tick => self.on_tick(status),
            TimerEvent::Expire => self.on_expire(status),
        }
    }
}
