//! Full in-memory game state
//!
//! `MatchState` aggregates both teams, quarter progression, the pending-try
//! flag, the play-clock mode and the countdown timer. Scoring goes to the
//! active team; timer operations are forwarded with the host scheduler.

use serde::{Deserialize, Serialize};

use super::error::MatchError;
use super::game_config::GameConfig;
use super::team::{MAX_EXTRA_POINTS, TOUCHDOWN_POINTS, Team, TeamRecord};
use super::timer::CountdownTimer;
use crate::core::ports::{Clock, ScheduleHandle, Scheduler, TimerListener, TimerStatus};

/// Timeout clock length in seconds
pub const TIMEOUT_SECONDS: u16 = 90;

/// Halftime clock length in seconds
pub const HALFTIME_SECONDS: u16 = 20 * 60;

/// Play-clock mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayClock {
    /// The countdown is not a play clock
    #[default]
    Off,
    /// Play clock running toward the snap
    PreSnap,
    /// Shortened clock after the snap
    PostSnap,
}

impl PlayClock {
    /// Numeric mode (0 = off, 1 = pre-snap, 2 = post-snap)
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::PreSnap => 1,
            Self::PostSnap => 2,
        }
    }

    /// Mode for a numeric value, if valid
    #[must_use]
    pub const fn from_u8(mode: u8) -> Option<Self> {
        match mode {
            0 => Some(Self::Off),
            1 => Some(Self::PreSnap),
            2 => Some(Self::PostSnap),
            _ => None,
        }
    }
}

/// Plays that put points on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringPlay {
    /// 6 points, followed by a try
    Touchdown,
    /// 3 points
    FieldGoal,
    /// 2 points
    Safety,
}

impl ScoringPlay {
    /// Points awarded
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Touchdown => TOUCHDOWN_POINTS,
            Self::FieldGoal => 3,
            Self::Safety => 2,
        }
    }
}

impl std::str::FromStr for ScoringPlay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "touchdown" | "td" => Ok(Self::Touchdown),
            "field-goal" | "fieldgoal" | "fg" => Ok(Self::FieldGoal),
            "safety" => Ok(Self::Safety),
            _ => Err(format!("Invalid play: {s}. Use: touchdown, field-goal, safety")),
        }
    }
}

/// Outcome of the try after a touchdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryResult {
    /// Two-point conversion
    TwoPoint,
    /// Kick
    OnePoint,
    /// No good
    Failed,
}

impl TryResult {
    /// Extra points awarded
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::TwoPoint => MAX_EXTRA_POINTS,
            Self::OnePoint => 1,
            Self::Failed => 0,
        }
    }
}

impl std::str::FromStr for TryResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "two-point" | "two" | "2" => Ok(Self::TwoPoint),
            "one-point" | "one" | "1" => Ok(Self::OnePoint),
            "failed" | "none" | "0" => Ok(Self::Failed),
            _ => Err(format!("Invalid try result: {s}. Use: two-point, one-point, failed")),
        }
    }
}

/// Durations the countdown can be set to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockPreset {
    /// Game clock from the configuration
    Game,
    /// Play clock from the configuration
    Play,
    /// Fixed timeout length
    Timeout,
    /// Fixed halftime length
    Halftime,
}

impl ClockPreset {
    /// Countdown length for this preset
    #[must_use]
    pub fn seconds(self, config: &GameConfig) -> u16 {
        match self {
            Self::Game => config.game_clock_seconds,
            Self::Play => u16::from(config.play_clock_seconds),
            Self::Timeout => TIMEOUT_SECONDS,
            Self::Halftime => HALFTIME_SECONDS,
        }
    }
}

impl std::str::FromStr for ClockPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "game" => Ok(Self::Game),
            "play" => Ok(Self::Play),
            "timeout" => Ok(Self::Timeout),
            "halftime" | "half" => Ok(Self::Halftime),
            _ => Err(format!("Invalid clock: {s}. Use: game, play, timeout, halftime")),
        }
    }
}

/// The whole game
#[derive(Debug)]
pub struct MatchState {
    pub(crate) home: TeamRecord,
    pub(crate) away: TeamRecord,
    pub(crate) quarter: u8,
    pub(crate) try_active: bool,
    pub(crate) home_team_active: bool,
    pub(crate) play_clock: PlayClock,
    pub(crate) timer: CountdownTimer,
}

impl MatchState {
    /// Fresh match under `config` with a stopped game clock
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            home: TeamRecord::new(config.timeouts_per_half),
            away: TeamRecord::new(config.timeouts_per_half),
            quarter: 0,
            try_active: false,
            home_team_active: false,
            play_clock: PlayClock::Off,
            timer: CountdownTimer::new(config.game_clock_seconds),
        }
    }

    /// Clear both teams and restart at the first quarter with the game clock
    pub fn reset<R: Scheduler + ?Sized>(&mut self, config: &GameConfig, rt: &mut R) {
        self.home.clear(config.timeouts_per_half);
        self.away.clear(config.timeouts_per_half);
        self.quarter = 0;
        self.try_active = false;
        self.home_team_active = false;
        self.play_clock = PlayClock::Off;
        self.timer.set_reset_to(config.game_clock_seconds);
        self.timer.reset(rt);
        log::info!("match reset");
    }

    /// Record for one team
    #[must_use]
    pub const fn team(&self, team: Team) -> &TeamRecord {
        match team {
            Team::Home => &self.home,
            Team::Away => &self.away,
        }
    }

    pub(crate) fn team_mut(&mut self, team: Team) -> &mut TeamRecord {
        match team {
            Team::Home => &mut self.home,
            Team::Away => &mut self.away,
        }
    }

    /// Current quarter index (0-based)
    #[must_use]
    pub const fn quarter(&self) -> u8 {
        self.quarter
    }

    /// Whether a touchdown is awaiting its try
    #[must_use]
    pub const fn try_active(&self) -> bool {
        self.try_active
    }

    /// Current play-clock mode
    #[must_use]
    pub const fn play_clock(&self) -> PlayClock {
        self.play_clock
    }

    /// The countdown
    #[must_use]
    pub const fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    /// Team the next scoring action applies to
    #[must_use]
    pub const fn active_team(&self) -> Team {
        if self.home_team_active {
            Team::Home
        } else {
            Team::Away
        }
    }

    /// Choose the team the next scoring action applies to
    ///
    /// The active team is locked to the scoring team while its try is
    /// pending.
    pub fn set_active_team(&mut self, team: Team) -> Result<(), MatchError> {
        if self.try_active && team != self.active_team() {
            return Err(MatchError::TryPending);
        }
        self.home_team_active = team == Team::Home;
        Ok(())
    }

    /// Move to the next quarter, replenishing timeouts at the half
    pub fn advance_quarter(&mut self, config: &GameConfig) {
        self.quarter = self.quarter.saturating_add(1);
        if self.quarter == config.half_boundary() {
            self.home.set_timeouts(config.timeouts_per_half);
            self.away.set_timeouts(config.timeouts_per_half);
            log::info!("half boundary reached; timeouts restored to {}", config.timeouts_per_half);
        }
    }

    /// Score for the active team in the current quarter
    ///
    /// A touchdown opens a try that must be resolved with
    /// [`MatchState::add_pat`] before the next score.
    pub fn new_score(&mut self, value: u8) -> Result<(), MatchError> {
        if self.try_active {
            return Err(MatchError::TryPending);
        }
        let quarter = self.quarter;
        let team = self.active_team();
        self.team_mut(team).new_score(value, quarter);
        if value == TOUCHDOWN_POINTS {
            self.try_active = true;
        }
        Ok(())
    }

    /// Resolve the pending try for the active team
    pub fn add_pat(&mut self, extra: u8) -> Result<(), MatchError> {
        if !self.try_active {
            return Err(MatchError::NoPendingTry);
        }
        let team = self.active_team();
        self.team_mut(team).add_pat(extra)?;
        self.try_active = false;
        Ok(())
    }

    /// Record a penalty against `team` in the current quarter
    pub fn add_penalty(&mut self, team: Team, number: u8) {
        let quarter = self.quarter;
        self.team_mut(team).add_penalty(number, quarter);
    }

    /// Charge a timeout to `team`
    pub fn call_timeout(&mut self, team: Team) -> Result<(), MatchError> {
        let quarter = self.quarter;
        self.team_mut(team).add_timeout(quarter)
    }

    /// Start the countdown
    pub fn start_clock<R: Scheduler + ?Sized>(&mut self, rt: &mut R) {
        self.timer.start(rt);
    }

    /// Stop the countdown
    pub fn stop_clock<R: Scheduler + ?Sized>(&mut self, rt: &mut R) {
        self.timer.stop(rt);
    }

    /// Start a stopped countdown or stop a running one
    pub fn toggle_clock<R: Scheduler + ?Sized>(&mut self, rt: &mut R) {
        if self.timer.is_running() {
            self.timer.stop(rt);
        } else {
            self.timer.start(rt);
        }
    }

    /// Reset the countdown to its configured duration
    pub fn reset_clock<R: Scheduler + ?Sized>(&mut self, rt: &mut R) {
        self.timer.reset(rt);
    }

    /// Switch the countdown to a preset duration (stopped)
    pub fn select_clock<R: Scheduler + ?Sized>(
        &mut self,
        preset: ClockPreset,
        config: &GameConfig,
        rt: &mut R,
    ) {
        self.play_clock = if preset == ClockPreset::Play {
            PlayClock::PreSnap
        } else {
            PlayClock::Off
        };
        self.timer.set_reset_to(preset.seconds(config));
        self.timer.reset(rt);
    }

    /// The ball was snapped while the play clock was running
    ///
    /// With post-snap shortening enabled the clock restarts at
    /// `post_snap_seconds`; otherwise the play clock is switched off.
    pub fn ball_snapped<R: Scheduler + ?Sized>(&mut self, config: &GameConfig, rt: &mut R) {
        if self.play_clock != PlayClock::PreSnap {
            return;
        }
        if config.post_snap_seconds == 0 {
            self.play_clock = PlayClock::Off;
            self.timer.stop(rt);
            return;
        }
        self.play_clock = PlayClock::PostSnap;
        self.timer.set_reset_to(u16::from(config.post_snap_seconds));
        self.timer.reset(rt);
        self.timer.start(rt);
    }

    /// Deliver a scheduler callback to the countdown
    pub fn timer_fired<R: Scheduler + ?Sized>(&mut self, handle: ScheduleHandle, rt: &mut R) -> bool {
        self.timer.timer_fired(handle, rt)
    }

    /// Attach a countdown listener
    pub fn set_timer_listener<C: Clock + ?Sized>(&mut self, listener: Box<dyn TimerListener>, clock: &C) {
        self.timer.set_listener(listener, clock);
    }

    /// Detach the countdown listener
    pub fn clear_timer_listener(&mut self) -> Option<Box<dyn TimerListener>> {
        self.timer.clear_listener()
    }

    /// Countdown status at the clock's current time
    #[must_use]
    pub fn clock_status<C: Clock + ?Sized>(&self, clock: &C) -> TimerStatus {
        self.timer.status(clock)
    }
}
