//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{GameConfig, MatchState, PlayClock, Team, quarter_label};
use crate::core::ports::TimerStatus;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One side of the scoreboard
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TeamLine {
    /// Points
    pub total: u16,
    /// Timeouts remaining this half
    pub timeouts: u8,
}

/// Scoreboard snapshot
#[derive(Debug, Serialize)]
pub struct StatusReport {
    /// Home team
    pub home: TeamLine,
    /// Away team
    pub away: TeamLine,
    /// Quarter index (0-based)
    pub quarter: u8,
    /// Quarter label ("1st", ..., "Overtime")
    pub quarter_label: String,
    /// Clock as `MM:SS`
    pub clock: String,
    /// Remaining seconds, fractional
    pub remaining: f64,
    /// Whether the clock is running
    pub clock_running: bool,
    /// Whether a touchdown awaits its try
    pub try_pending: bool,
    /// Team the next score applies to
    pub active_team: Team,
    /// Play-clock mode
    pub play_clock: PlayClock,
}

impl StatusReport {
    /// Capture the scoreboard
    #[must_use]
    pub fn capture(game: &MatchState, config: &GameConfig, clock: &TimerStatus) -> Self {
        let line = |team| {
            let record = game.team(team);
            TeamLine {
                total: record.total(),
                timeouts: record.timeouts(),
            }
        };
        Self {
            home: line(Team::Home),
            away: line(Team::Away),
            quarter: game.quarter(),
            quarter_label: quarter_label(game.quarter(), config.periods),
            clock: clock.clock_text(),
            remaining: clock.remaining,
            clock_running: clock.running,
            try_pending: game.try_active(),
            active_team: game.active_team(),
            play_clock: game.play_clock(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let bars = |n: u8| "▬".repeat(usize::from(n));
        println!("{:^10}{:^10}", "AWAY".bold(), "HOME".bold());
        println!("{:^10}{:^10}", self.away.total, self.home.total);
        println!("{:^10}{:^10}", bars(self.away.timeouts), bars(self.home.timeouts));
        println!("{:^20}", self.quarter_label);
        if self.clock_running {
            println!("{:^20}", format!(" {} ", self.clock).reversed());
        } else {
            println!("{:^20}", self.clock);
        }
        match self.play_clock {
            PlayClock::Off => {},
            PlayClock::PreSnap => println!("Play clock (pre-snap)"),
            PlayClock::PostSnap => println!("Play clock (post-snap)"),
        }
        if self.try_pending {
            println!("Try pending ({})", self.active_team);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Rendered log entries for one team
#[derive(Debug, Serialize)]
pub struct LogReport {
    /// Team the log belongs to
    pub team: Team,
    /// "scores" or "penalties"
    pub kind: String,
    /// Entries as `"<Ordinal> - <value>"`
    pub entries: Vec<String>,
}

impl LogReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.entries.is_empty() {
            println!("No {} for the {} team.", self.kind, self.team);
            return;
        }
        println!("{} {}:\n", capitalize(&self.team.to_string()), self.kind);
        for entry in &self.entries {
            println!("  {entry}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Game configuration listing
#[derive(Debug, Serialize)]
pub struct ConfigReport {
    /// The configuration
    #[serde(flatten)]
    pub config: GameConfig,
}

impl ConfigReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let c = &self.config;
                println!("Game clock:        {}s", c.game_clock_seconds);
                println!("Play clock:        {}s", c.play_clock_seconds);
                println!("Timeouts per half: {}", c.timeouts_per_half);
                println!("Periods:           {}", c.periods);
                if c.post_snap_seconds == 0 {
                    println!("Post-snap clock:   off");
                } else {
                    println!("Post-snap clock:   {}s", c.post_snap_seconds);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Successful result with `message`
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
