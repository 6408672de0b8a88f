//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing refwatch components.

use std::cell::RefCell;
use std::rc::Rc;

use refwatch::adapters::{LoopScheduler, ManualClock, MemoryStore};
use refwatch::core::models::GameConfig;
use refwatch::core::ports::{TimerEvent, TimerListener, TimerStatus};
use refwatch::core::services::Session;

/// Wall-clock reading every test starts from
pub const START: f64 = 1_700_000_000.0;

/// A scheduler driven by a manual clock
pub fn scheduler() -> LoopScheduler<ManualClock> {
    LoopScheduler::new(ManualClock::new(START))
}

/// A session over an in-memory store
pub type TestSession = Session<MemoryStore, LoopScheduler<ManualClock>>;

/// Open a fresh session over `store`
pub fn open_session(store: MemoryStore) -> TestSession {
    Session::open(store, scheduler())
}

/// Default configuration
pub fn config() -> GameConfig {
    GameConfig::default()
}

/// Advance the clock in 100 ms steps, delivering due callbacks
///
/// Returns the number of callbacks the timer accepted.
pub fn run_for(session: &mut TestSession, seconds: f64) -> usize {
    let steps = (seconds * 10.0).round() as usize;
    let mut fired = 0;
    for _ in 0..steps {
        session.scheduler().clock().advance(0.1);
        for handle in session.scheduler_mut().take_due() {
            if session.timer_fired(handle) {
                fired += 1;
            }
        }
    }
    fired
}

/// Listener that records every notification
#[derive(Clone, Default)]
pub struct RecordingListener {
    events: Rc<RefCell<Vec<(TimerEvent, TimerStatus)>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Event kinds seen so far
    pub fn kinds(&self) -> Vec<TimerEvent> {
        self.events.borrow().iter().map(|(kind, _)| *kind).collect()
    }

    /// Status passed with the most recent event
    pub fn last_status(&self) -> Option<TimerStatus> {
        self.events.borrow().last().map(|(_, status)| *status)
    }

    pub fn count(&self, kind: TimerEvent) -> usize {
        self.events.borrow().iter().filter(|(k, _)| *k == kind).count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn boxed(&self) -> Box<dyn TimerListener> {
        Box::new(self.clone())
    }
}

impl TimerListener for RecordingListener {
    fn notify(&mut self, event: TimerEvent, status: &TimerStatus) {
        self.events.borrow_mut().push((event, *status));
    }
}
