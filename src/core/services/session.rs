//! Host-owned game session
//!
//! A `Session` is the one object a host keeps between events: it owns the
//! key-value store, the callback scheduler, the game configuration and the
//! match. Opening a session loads both persisted records; a match record
//! that cannot be used is discarded and the match starts fresh.
//!
//! The play-clock mode is not part of the match snapshot; the session stores
//! it as one byte under [`PLAY_CLOCK_KEY`].

use crate::core::models::{ClockPreset, ConfigValue, GameConfig, MatchState, PlayClock};
use crate::core::ports::{KeyValueStore, ScheduleHandle, Scheduler, TimerListener, TimerStatus};

use super::config_store::{apply_update, load_config};
use super::persistence::{MATCH_BASE_KEY, load_match, save_match};

/// Key of the session's play-clock byte
pub const PLAY_CLOCK_KEY: u32 = 101;

/// Store, scheduler, configuration and match owned by the host
#[derive(Debug)]
pub struct Session<S, R> {
    store: S,
    scheduler: R,
    config: GameConfig,
    game: MatchState,
}

impl<S: KeyValueStore, R: Scheduler> Session<S, R> {
    /// Load configuration and match from `store`
    pub fn open(store: S, mut scheduler: R) -> Self {
        let config = load_config(&store);
        let mut game = MatchState::new(&config);
        match load_match(&mut game, &store, MATCH_BASE_KEY, &mut scheduler) {
            Ok(()) => game.play_clock = read_play_clock(&store),
            Err(e) => {
                log::info!("starting a new match ({e})");
                game.reset(&config, &mut scheduler);
            },
        }
        Self {
            store,
            scheduler,
            config,
            game,
        }
    }

    /// Persist the match (fire-and-forget)
    pub fn save(&mut self) {
        save_match(&self.game, &mut self.store, MATCH_BASE_KEY);
        if let Err(e) = self.store.write(PLAY_CLOCK_KEY, &[self.game.play_clock.as_u8()]) {
            log::warn!("failed to write play clock mode: {e}");
        }
    }

    /// Replace the configuration and reset the match under it
    pub fn apply_config_update<I>(&mut self, pairs: I) -> GameConfig
    where
        I: IntoIterator<Item = (u32, ConfigValue)>,
    {
        self.config = apply_update(&mut self.store, pairs);
        self.reset_match();
        self.config
    }

    /// Start a new match under the current configuration
    pub fn reset_match(&mut self) {
        self.game.reset(&self.config, &mut self.scheduler);
    }

    /// Current game configuration
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The match
    #[must_use]
    pub const fn game(&self) -> &MatchState {
        &self.game
    }

    /// The match, mutably
    pub const fn game_mut(&mut self) -> &mut MatchState {
        &mut self.game
    }

    /// The scheduler
    #[must_use]
    pub const fn scheduler(&self) -> &R {
        &self.scheduler
    }

    /// The scheduler, mutably
    pub const fn scheduler_mut(&mut self) -> &mut R {
        &mut self.scheduler
    }

    /// The backing store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Match and scheduler together, for operations that need both
    pub const fn parts_mut(&mut self) -> (&mut MatchState, &mut R) {
        (&mut self.game, &mut self.scheduler)
    }

    /// Close the session and hand back the store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Countdown status now
    #[must_use]
    pub fn clock_status(&self) -> TimerStatus {
        self.game.clock_status(&self.scheduler)
    }

    /// Start the countdown
    pub fn start_clock(&mut self) {
        self.game.start_clock(&mut self.scheduler);
    }

    /// Stop the countdown
    pub fn stop_clock(&mut self) {
        self.game.stop_clock(&mut self.scheduler);
    }

    /// Toggle the countdown
    pub fn toggle_clock(&mut self) {
        self.game.toggle_clock(&mut self.scheduler);
    }

    /// Reset the countdown to its current duration
    pub fn reset_clock(&mut self) {
        self.game.reset_clock(&mut self.scheduler);
    }

    /// Switch the countdown to a preset
    pub fn select_clock(&mut self, preset: ClockPreset) {
        self.game.select_clock(preset, &self.config, &mut self.scheduler);
    }

    /// The ball was snapped
    pub fn ball_snapped(&mut self) {
        self.game.ball_snapped(&self.config, &mut self.scheduler);
    }

    /// Advance to the next quarter
    pub fn advance_quarter(&mut self) {
        self.game.advance_quarter(&self.config);
    }

    /// Deliver a scheduler callback
    pub fn timer_fired(&mut self, handle: ScheduleHandle) -> bool {
        self.game.timer_fired(handle, &mut self.scheduler)
    }

    /// Attach a countdown listener
    pub fn set_timer_listener(&mut self, listener: Box<dyn TimerListener>) {
        self.game.set_timer_listener(listener, &self.scheduler);
    }
}

fn read_play_clock<S: KeyValueStore + ?Sized>(store: &S) -> PlayClock {
    let mut buf = [0u8; 1];
    match store.read(PLAY_CLOCK_KEY, &mut buf) {
        Ok(1) => PlayClock::from_u8(buf[0]).unwrap_or_default(),
        _ => PlayClock::Off,
    }
}
