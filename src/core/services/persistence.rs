//! Versioned match snapshot
//!
//! A match is stored under five consecutive keys:
//!
//! ```text
//! base      fixed-size record {version, timer, timeouts, quarter, flags}
//! base + 1  home scores   (packed 16-bit entries)
//! base + 2  away scores
//! base + 3  home penalties
//! base + 4  away penalties
//! ```
//!
//! The record is encoded with bincode's fixed-width little-endian layout.
//! Loading either adopts everything or nothing: the record and all four logs
//! are decoded before the match state is touched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{MatchState, PackedEventLog, PlayClock, TeamRecord, TimerState};
use crate::core::ports::{KeyValueStore, Scheduler, StoreError};

/// Key of the match record; the logs follow at `+1..=+4`
pub const MATCH_BASE_KEY: u32 = 0;

/// Schema version of the match record
pub const MATCH_RECORD_VERSION: u32 = 3;

/// Why a persisted record could not be used
#[derive(Debug, Error)]
pub enum LoadError {
    /// Nothing stored under the key
    #[error("no record stored at key {0}")]
    Absent(u32),

    /// Stored record has the wrong length
    #[error("record at key {key} is {actual} bytes, expected {expected}")]
    Truncated {
        /// Key of the record
        key: u32,
        /// Length of the current schema
        expected: usize,
        /// Length actually read
        actual: usize,
    },

    /// Stored record was written by another schema version
    #[error("record version {found} does not match expected version {expected}")]
    VersionMismatch {
        /// Version found in storage
        found: u32,
        /// Version this build reads
        expected: u32,
    },

    /// Record bytes did not decode
    #[error("record decode failed: {0}")]
    Decode(#[from] bincode::Error),

    /// Store failure while reading
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct MatchRecord {
    version: u32,
    timer: TimerState,
    home_timeouts: u8,
    away_timeouts: u8,
    quarter: u8,
    try_active: bool,
    home_team_active: bool,
}

impl MatchRecord {
    fn capture(state: &MatchState) -> Self {
        Self {
            version: MATCH_RECORD_VERSION,
            timer: state.timer.snapshot(),
            home_timeouts: state.home.timeouts(),
            away_timeouts: state.away.timeouts(),
            quarter: state.quarter,
            try_active: state.try_active,
            home_team_active: state.home_team_active,
        }
    }

    fn encoded_len() -> usize {
        let sample = Self {
            version: MATCH_RECORD_VERSION,
            timer: TimerState::stopped(0),
            home_timeouts: 0,
            away_timeouts: 0,
            quarter: 0,
            try_active: false,
            home_team_active: false,
        };
        bincode::serialized_size(&sample).map_or(0, |n| n as usize)
    }
}

/// Store a log as packed entries (`len * 2` bytes)
pub fn write_log<S: KeyValueStore + ?Sized>(
    log: &PackedEventLog,
    store: &mut S,
    key: u32,
) -> Result<(), StoreError> {
    store.write(key, &log.to_bytes())
}

/// Load a log stored by [`write_log`]
///
/// A missing key leaves the log unchanged.
pub fn read_log<S: KeyValueStore + ?Sized>(
    log: &mut PackedEventLog,
    store: &S,
    key: u32,
) -> Result<(), StoreError> {
    let Some(size) = store.size_of(key) else {
        return Ok(());
    };
    let mut buf = vec![0u8; size];
    let read = store.read(key, &mut buf)?;
    log.load_bytes(&buf[..read]);
    Ok(())
}

/// Persist the whole match
///
/// Writes are fire-and-forget: a failure only costs the next launch its
/// state, so it is logged and otherwise ignored.
pub fn save_match<S: KeyValueStore + ?Sized>(state: &MatchState, store: &mut S, base_key: u32) {
    match bincode::serialize(&MatchRecord::capture(state)) {
        Ok(bytes) => {
            if let Err(e) = store.write(base_key, &bytes) {
                log::warn!("failed to write match record: {e}");
            }
        },
        Err(e) => log::warn!("failed to encode match record: {e}"),
    }

    let logs = [
        (state.home.scores(), 1),
        (state.away.scores(), 2),
        (state.home.penalties(), 3),
        (state.away.penalties(), 4),
    ];
    for (events, offset) in logs {
        if let Err(e) = write_log(events, store, base_key + offset) {
            log::warn!("failed to write event log at key {}: {e}", base_key + offset);
        }
    }
}

/// Load a match saved by [`save_match`] into `state`
///
/// On any error `state` is left untouched and the caller is expected to
/// reset it. On success the totals are recomputed from the score logs and
/// the timer is recovered: a running timer that ran out while suspended is
/// stopped at zero, otherwise its periodic callback is reinstalled.
pub fn load_match<S, R>(
    state: &mut MatchState,
    store: &S,
    base_key: u32,
    rt: &mut R,
) -> Result<(), LoadError>
where
    S: KeyValueStore + ?Sized,
    R: Scheduler + ?Sized,
{
    let record = read_record(store, base_key)?;

    let mut logs: [PackedEventLog; 4] = Default::default();
    for (offset, events) in (1u32..).zip(logs.iter_mut()) {
        read_log(events, store, base_key + offset)?;
    }
    let [home_scores, away_scores, home_penalties, away_penalties] = logs;

    adopt_logs(&mut state.home, home_scores, home_penalties, record.home_timeouts);
    adopt_logs(&mut state.away, away_scores, away_penalties, record.away_timeouts);
    state.quarter = record.quarter;
    state.home_team_active = record.home_team_active;
    state.try_active = false;
    if record.try_active {
        let team = state.active_team();
        state.try_active = state.team_mut(team).restore_try();
        if !state.try_active {
            log::debug!("dropping pending try: last {team} score is not a touchdown");
        }
    }
    state.play_clock = PlayClock::Off;
    state.timer.restore(record.timer, rt);

    log::debug!(
        "loaded match: quarter {}, home {}, away {}",
        state.quarter,
        state.home.total(),
        state.away.total()
    );
    Ok(())
}

fn read_record<S: KeyValueStore + ?Sized>(store: &S, key: u32) -> Result<MatchRecord, LoadError> {
    let Some(size) = store.size_of(key) else {
        return Err(LoadError::Absent(key));
    };
    let mut buf = vec![0u8; size];
    let read = store.read(key, &mut buf)?;
    buf.truncate(read);

    if let Some(version) = buf.first_chunk::<4>() {
        let found = u32::from_le_bytes(*version);
        if found != MATCH_RECORD_VERSION {
            return Err(LoadError::VersionMismatch {
                found,
                expected: MATCH_RECORD_VERSION,
            });
        }
    }
    let expected = MatchRecord::encoded_len();
    if buf.len() != expected {
        return Err(LoadError::Truncated {
            key,
            expected,
            actual: buf.len(),
        });
    }
    Ok(bincode::deserialize(&buf)?)
}

fn adopt_logs(
    team: &mut TeamRecord,
    scores: PackedEventLog,
    penalties: PackedEventLog,
    timeouts: u8,
) {
    let (team_scores, team_penalties) = team.logs_mut();
    *team_scores = scores;
    *team_penalties = penalties;
    team.set_timeouts(timeouts);
    team.recompute_total();
}
