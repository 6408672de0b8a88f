//! Per-team scoring record

use serde::{Deserialize, Serialize};

use super::error::MatchError;
use super::event_log::PackedEventLog;

/// Score value of a touchdown before its try is resolved
pub const TOUCHDOWN_POINTS: u8 = 6;

/// Largest extra-point value (two-point conversion)
pub const MAX_EXTRA_POINTS: u8 = 2;

/// Value recorded in the penalties log for a charged timeout
pub const TIMEOUT_MARKER: u8 = 0;

/// Which side an action applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    /// Home team
    Home,
    /// Away team
    Away,
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Away => write!(f, "away"),
        }
    }
}

impl std::str::FromStr for Team {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" | "h" => Ok(Self::Home),
            "away" | "a" | "visitor" => Ok(Self::Away),
            _ => Err(format!("Invalid team: {s}. Use: home, away")),
        }
    }
}

/// One team's logs, running total and remaining timeouts
///
/// `total` is kept equal to the sum of the scores log; every mutation goes
/// through methods that update both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRecord {
    scores: PackedEventLog,
    penalties: PackedEventLog,
    total: u16,
    timeouts: u8,
    try_pending: bool,
}

impl TeamRecord {
    /// Create an empty record with `timeouts` remaining
    #[must_use]
    pub fn new(timeouts: u8) -> Self {
        Self {
            scores: PackedEventLog::new(),
            penalties: PackedEventLog::new(),
            total: 0,
            timeouts,
            try_pending: false,
        }
    }

    /// Scoring log
    #[must_use]
    pub const fn scores(&self) -> &PackedEventLog {
        &self.scores
    }

    /// Penalty and timeout log
    #[must_use]
    pub const fn penalties(&self) -> &PackedEventLog {
        &self.penalties
    }

    /// Running point total
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.total
    }

    /// Timeouts remaining this half
    #[must_use]
    pub const fn timeouts(&self) -> u8 {
        self.timeouts
    }

    /// Record a score
    ///
    /// A touchdown leaves its try pending; any other score forfeits a try
    /// that was still open.
    pub fn new_score(&mut self, value: u8, quarter: u8) {
        self.total = self.total.wrapping_add(u16::from(value));
        self.scores.add(value, quarter);
        self.try_pending = value == TOUCHDOWN_POINTS;
    }

    /// Whether the last touchdown still awaits its try
    #[must_use]
    pub const fn try_pending(&self) -> bool {
        self.try_pending
    }

    /// Resolve the try that follows a touchdown
    ///
    /// Only the most recent touchdown, and only once: it becomes `6 + extra`
    /// (6, 7 or 8).
    pub fn add_pat(&mut self, extra: u8) -> Result<(), MatchError> {
        if extra > MAX_EXTRA_POINTS {
            return Err(MatchError::InvalidExtraPoint(extra));
        }
        if !self.try_pending {
            return Err(MatchError::NoPendingTry);
        }
        self.scores.amend_last(TOUCHDOWN_POINTS + extra)?;
        self.total = self.total.wrapping_add(u16::from(extra));
        self.try_pending = false;
        Ok(())
    }

    /// Record a penalty
    pub fn add_penalty(&mut self, number: u8, quarter: u8) {
        self.penalties.add(number, quarter);
    }

    /// Charge a timeout: decrement the counter and log a marker entry
    pub fn add_timeout(&mut self, quarter: u8) -> Result<(), MatchError> {
        if self.timeouts == 0 {
            return Err(MatchError::NoTimeoutsRemaining);
        }
        self.timeouts -= 1;
        self.penalties.add(TIMEOUT_MARKER, quarter);
        Ok(())
    }

    /// Restore the timeout counter (half boundary)
    pub fn set_timeouts(&mut self, timeouts: u8) {
        self.timeouts = timeouts;
    }

    /// Empty both logs, zero the total and set the timeout counter
    pub fn clear(&mut self, timeouts: u8) {
        self.scores.clear();
        self.penalties.clear();
        self.total = 0;
        self.timeouts = timeouts;
        self.try_pending = false;
    }

    /// Mutable access to both logs, for loading persisted entries
    ///
    /// Call [`TeamRecord::recompute_total`] once the logs are loaded.
    pub(crate) fn logs_mut(&mut self) -> (&mut PackedEventLog, &mut PackedEventLog) {
        (&mut self.scores, &mut self.penalties)
    }

    /// Reopen the try on a loaded record
    ///
    /// Returns `false`, leaving the flag clear, unless the last score is a
    /// bare touchdown.
    pub(crate) fn restore_try(&mut self) -> bool {
        self.try_pending = self
            .scores
            .last()
            .is_some_and(|entry| entry.value == TOUCHDOWN_POINTS);
        self.try_pending
    }

    /// Rebuild the running total from the scores log
    pub fn recompute_total(&mut self) {
        self.total = self.scores.total_value();
    }
}
