//! Domain models for refwatch
//!
//! Pure game-state types. Time and scheduling reach them only through the
//! port traits passed into each operation.
//!
//! - [`PackedEventLog`] - Ordered log of `(quarter, value)` entries
//! - [`TeamRecord`] - A team's scores, penalties, total and timeouts
//! - [`CountdownTimer`] - Wall-clock anchored countdown
//! - [`MatchState`] - Both teams, quarter, try flag, play clock and timer
//! - [`GameConfig`] - Versioned game tunables

mod entry;
mod error;
mod event_log;
mod game_config;
mod match_state;
mod team;
mod timer;

pub use entry::{Entry, quarter_label};
pub use error::MatchError;
pub use event_log::{ENTRY_BYTES, PackedEventLog};
pub use game_config::{CONFIG_VERSION, ConfigTag, ConfigValue, GameConfig};
pub use match_state::{
    ClockPreset, HALFTIME_SECONDS, MatchState, PlayClock, ScoringPlay, TIMEOUT_SECONDS, TryResult,
};
pub use team::{MAX_EXTRA_POINTS, TIMEOUT_MARKER, TOUCHDOWN_POINTS, Team, TeamRecord};
pub use timer::{CountdownTimer, TICK_INTERVAL_MS, TimerState};
