//! Wall-clock anchored countdown timer
//!
//! A running timer stores the wall-clock instant it was started and the time
//! that was left at that instant; the remaining value is always computed live
//! from the clock. Nothing decrements a counter per tick, so a process that is
//! suspended (or a state file that sits on disk) loses no time: on resume the
//! anchor still points at the same instant.
//!
//! While running, exactly one 100 ms one-shot callback is pending with the
//! host scheduler. Each firing re-arms it, notifies [`TimerListener::on_tick`]
//! and, once the countdown reaches zero, fires `on_expire` and stops.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::ports::{Clock, ScheduleHandle, Scheduler, TimerEvent, TimerListener, TimerStatus};

/// Delay between periodic callbacks while the timer runs
pub const TICK_INTERVAL_MS: u64 = 100;

/// Persistable timer state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimerState {
    /// Remaining seconds: at the anchor when running, outright when stopped
    pub initial: f64,
    /// Wall-clock anchor in seconds since the Unix epoch (running only)
    pub started: f64,
    /// Whether the countdown is running
    pub running: bool,
    /// Duration restored by a reset
    pub reset_to: u16,
}

impl TimerState {
    /// Stopped state holding `reset_to` seconds
    #[must_use]
    pub fn stopped(reset_to: u16) -> Self {
        Self {
            initial: f64::from(reset_to),
            started: 0.0,
            running: false,
            reset_to,
        }
    }

    /// Remaining seconds at wall-clock time `now`, clamped at zero
    #[must_use]
    pub fn remaining_at(&self, now: f64) -> f64 {
        if self.running {
            let elapsed = (now - self.started).max(0.0);
            (self.initial - elapsed).max(0.0)
        } else {
            self.initial.max(0.0)
        }
    }
}

/// Countdown with start/stop/reset and periodic notifications
pub struct CountdownTimer {
    state: TimerState,
    pending: Option<ScheduleHandle>,
    listener: Option<Box<dyn TimerListener>>,
}

impl fmt::Debug for CountdownTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountdownTimer")
            .field("state", &self.state)
            .field("pending", &self.pending)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl CountdownTimer {
    /// Create a stopped timer holding `reset_to` seconds
    #[must_use]
    pub fn new(reset_to: u16) -> Self {
        Self {
            state: TimerState::stopped(reset_to),
            pending: None,
            listener: None,
        }
    }

    /// Whether the countdown is running
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.running
    }

    /// Duration restored by [`CountdownTimer::reset`]
    #[must_use]
    pub const fn reset_to(&self) -> u16 {
        self.state.reset_to
    }

    /// Handle of the pending periodic callback, if any
    #[must_use]
    pub const fn pending(&self) -> Option<ScheduleHandle> {
        self.pending
    }

    /// Copy of the persistable state
    #[must_use]
    pub const fn snapshot(&self) -> TimerState {
        self.state
    }

    /// Remaining seconds, computed live while running
    #[must_use]
    pub fn remaining<C: Clock + ?Sized>(&self, clock: &C) -> f64 {
        self.state.remaining_at(clock.now())
    }

    /// Remaining seconds rounded up for display
    #[must_use]
    pub fn display_seconds<C: Clock + ?Sized>(&self, clock: &C) -> u32 {
        self.status(clock).display_seconds
    }

    /// Status snapshot as passed to listeners
    #[must_use]
    pub fn status<C: Clock + ?Sized>(&self, clock: &C) -> TimerStatus {
        TimerStatus::new(self.state.running, self.remaining(clock))
    }

    /// Start counting down from the current remaining value
    pub fn start<R: Scheduler + ?Sized>(&mut self, rt: &mut R) {
        if self.state.running {
            return;
        }
        self.state.started = rt.now();
        self.state.running = true;
        self.arm(rt);
        log::debug!("timer started with {:.1}s remaining", self.state.initial);
        self.emit(TimerEvent::Start, rt.now());
    }

    /// Stop and capture the remaining value
    pub fn stop<R: Scheduler + ?Sized>(&mut self, rt: &mut R) {
        if !self.state.running {
            return;
        }
        let now = rt.now();
        self.state.initial = self.state.remaining_at(now);
        self.state.running = false;
        if let Some(handle) = self.pending.take() {
            rt.cancel(handle);
        }
        log::debug!("timer stopped with {:.1}s remaining", self.state.initial);
        self.emit(TimerEvent::Stop, now);
    }

    /// Stop if running, then restore the configured duration
    pub fn reset<R: Scheduler + ?Sized>(&mut self, rt: &mut R) {
        if self.state.running {
            self.stop(rt);
        }
        self.state.initial = f64::from(self.state.reset_to);
        log::debug!("timer reset to {}s", self.state.reset_to);
        self.emit(TimerEvent::Tick, rt.now());
    }

    /// Change the duration used by later resets
    pub fn set_reset_to(&mut self, seconds: u16) {
        self.state.reset_to = seconds;
    }

    /// Handle a periodic callback delivered by the host
    ///
    /// Returns `false` for a stale handle (one that is not the currently
    /// pending callback), which is ignored.
    pub fn timer_fired<R: Scheduler + ?Sized>(&mut self, handle: ScheduleHandle, rt: &mut R) -> bool {
        if self.pending != Some(handle) {
            return false;
        }
        self.pending = None;
        if !self.state.running {
            return false;
        }
        self.arm(rt);
        let now = rt.now();
        self.emit(TimerEvent::Tick, now);
        if self.state.remaining_at(now) <= 0.0 {
            log::info!("timer expired");
            self.emit(TimerEvent::Expire, now);
            self.stop(rt);
        }
        true
    }

    /// Attach a listener and bring it up to date
    ///
    /// Fires `on_start` or `on_stop` to match the current state, then one
    /// `on_tick`.
    pub fn set_listener<C: Clock + ?Sized>(&mut self, listener: Box<dyn TimerListener>, clock: &C) {
        self.listener = Some(listener);
        let now = clock.now();
        let event = if self.state.running {
            TimerEvent::Start
        } else {
            TimerEvent::Stop
        };
        self.emit(event, now);
        self.emit(TimerEvent::Tick, now);
    }

    /// Detach and return the current listener
    pub fn clear_listener(&mut self) -> Option<Box<dyn TimerListener>> {
        self.listener.take()
    }

    /// Adopt a persisted state and recover from any suspension
    ///
    /// A running timer whose time ran out while the process was away is
    /// stopped at zero; one with time left has its callback reinstalled.
    pub fn restore<R: Scheduler + ?Sized>(&mut self, state: TimerState, rt: &mut R) {
        if let Some(handle) = self.pending.take() {
            rt.cancel(handle);
        }
        self.state = state;
        self.state.initial = self.state.initial.max(0.0);
        if !self.state.running {
            return;
        }
        if self.remaining(&*rt) <= 0.0 {
            log::debug!("timer expired while suspended");
            self.stop(rt);
        } else {
            self.resume(rt);
        }
    }

    /// Reinstall the periodic callback for a timer that is already running
    pub fn resume<R: Scheduler + ?Sized>(&mut self, rt: &mut R) {
        if !self.state.running {
            return;
        }
        if self.pending.is_none() {
            self.arm(rt);
        }
        log::debug!("timer resumed with {:.1}s remaining", self.remaining(&*rt));
        self.emit(TimerEvent::Start, rt.now());
    }

    fn arm<R: Scheduler + ?Sized>(&mut self, rt: &mut R) {
        if let Some(stale) = self.pending.take() {
            rt.cancel(stale);
        }
        self.pending = Some(rt.schedule_once(TICK_INTERVAL_MS));
    }

    fn emit(&mut self, event: TimerEvent, now: f64) {
        let status = TimerStatus::new(self.state.running, self.state.remaining_at(now));
        if let Some(listener) = self.listener.as_mut() {
            listener.notify(event, &status);
        }
    }
}
