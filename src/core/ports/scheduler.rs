//! Time source and callback scheduler ports
//!
//! The countdown timer never sleeps or owns a thread. It reads wall-clock
//! time from a [`Clock`] and asks a [`Scheduler`] to call it back once after
//! a delay; the host delivers that callback by calling
//! [`MatchState::timer_fired`](crate::core::models::MatchState::timer_fired)
//! with the handle it was given.

use serde::{Deserialize, Serialize};

/// Opaque identifier for a pending one-shot callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScheduleHandle(pub u64);

/// Wall-clock time source
pub trait Clock {
    /// Seconds since the Unix epoch, with sub-second resolution
    fn now(&self) -> f64;
}

/// One-shot callback scheduler provided by the host
pub trait Scheduler: Clock {
    /// Arrange for a callback after `delay_ms` milliseconds
    fn schedule_once(&mut self, delay_ms: u64) -> ScheduleHandle;

    /// Cancel a callback that has not fired yet
    ///
    /// Cancelling an unknown or already fired handle is a no-op.
    fn cancel(&mut self, handle: ScheduleHandle);
}
