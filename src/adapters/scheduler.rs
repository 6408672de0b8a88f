//! Single-threaded callback scheduler
//!
//! `LoopScheduler` records each one-shot callback with its due time. A host
//! loop asks for [`LoopScheduler::next_due`], sleeps until then, collects the
//! due handles with [`LoopScheduler::take_due`] and delivers each one to the
//! match. Nothing runs concurrently; the table is only touched from the
//! loop's thread.

use std::collections::BTreeMap;

use crate::core::ports::{Clock, ScheduleHandle, Scheduler};

/// Pending-callback table over a wall clock
#[derive(Debug, Clone, Default)]
pub struct LoopScheduler<C> {
    clock: C,
    next_id: u64,
    pending: BTreeMap<ScheduleHandle, f64>,
}

impl<C: Clock> LoopScheduler<C> {
    /// Scheduler reading time from `clock`
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self {
            clock,
            next_id: 1,
            pending: BTreeMap::new(),
        }
    }

    /// The underlying clock
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Number of callbacks waiting to fire
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether `handle` is still waiting to fire
    #[must_use]
    pub fn is_pending(&self, handle: ScheduleHandle) -> bool {
        self.pending.contains_key(&handle)
    }

    /// Earliest due time among pending callbacks
    #[must_use]
    pub fn next_due(&self) -> Option<f64> {
        self.pending.values().copied().reduce(f64::min)
    }

    /// Remove and return every callback due at the current time, oldest first
    pub fn take_due(&mut self) -> Vec<ScheduleHandle> {
        let now = self.clock.now();
        let due: Vec<ScheduleHandle> = self
            .pending
            .iter()
            .filter(|&(_, &at)| at <= now)
            .map(|(&handle, _)| handle)
            .collect();
        for handle in &due {
            self.pending.remove(handle);
        }
        due
    }
}

impl<C: Clock> Clock for LoopScheduler<C> {
    fn now(&self) -> f64 {
        self.clock.now()
    }
}

impl<C: Clock> Scheduler for LoopScheduler<C> {
    fn schedule_once(&mut self, delay_ms: u64) -> ScheduleHandle {
        let handle = ScheduleHandle(self.next_id);
        self.next_id += 1;
        let due = self.clock.now() + delay_ms as f64 / 1000.0;
        self.pending.insert(handle, due);
        handle
    }

    fn cancel(&mut self, handle: ScheduleHandle) {
        self.pending.remove(&handle);
    }
}
