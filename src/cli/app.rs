//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, Context};
use refwatch::config::HostConfig;
use refwatch::core::models::{ClockPreset, ScoringPlay, Team, TryResult};
use refwatch::output::OutputMode;

/// refwatch - Scorekeeper and game clock for football referees
#[derive(Parser, Debug)]
#[command(
    name = "refwatch",
    version,
    about = "Scorekeeper and game clock for football referees",
    long_about = "Track scores, tries, penalties, timeouts and quarters, and run a game clock\n\
                  that keeps time between invocations.\n\n\
                  State is kept in a small key-value store on disk; every command\n\
                  loads it, applies one action and saves it again."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// State directory (overrides the settings file)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the scoreboard
    Status,

    /// Record a score for a team
    Score {
        /// Team that scored: home, away
        team: Team,

        /// Play: touchdown, field-goal, safety
        play: ScoringPlay,
    },

    /// Resolve the try after a touchdown
    Try {
        /// Result: two-point, one-point, failed
        result: TryResult,
    },

    /// Record a penalty against a team
    Penalty {
        /// Penalized team: home, away
        team: Team,

        /// Penalty number
        number: u8,
    },

    /// Charge a timeout to a team
    Timeout {
        /// Team calling the timeout: home, away
        team: Team,
    },

    /// End the current quarter
    Quarter,

    /// Show a team's scoring or penalty log
    Log {
        /// Team: home, away
        team: Team,

        /// Show penalties and timeouts instead of scores
        #[arg(short, long)]
        penalties: bool,
    },

    /// Control the game clock
    Clock {
        #[command(subcommand)]
        action: ClockAction,
    },

    /// Show or replace the game configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Start a new match
    Reset,

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ClockAction {
    /// Start the clock
    Start,

    /// Stop the clock
    Stop,

    /// Start a stopped clock or stop a running one
    Toggle,

    /// Reset the clock to its current duration
    Reset,

    /// Switch to a preset: game, play, timeout, halftime
    Set {
        /// Preset name
        preset: ClockPreset,
    },

    /// The ball was snapped (play clock)
    Snap,

    /// Follow the running clock until it stops
    Watch,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the game configuration
    Show,

    /// Replace the game configuration; omitted values return to defaults
    Set {
        /// Game clock length in seconds
        #[arg(long)]
        game_clock: Option<u16>,

        /// Play clock length in seconds
        #[arg(long)]
        play_clock: Option<u8>,

        /// Timeouts per half
        #[arg(long)]
        timeouts: Option<u8>,

        /// Number of periods
        #[arg(long)]
        periods: Option<u8>,

        /// Post-snap play clock in seconds (0 disables)
        #[arg(long)]
        post_snap: Option<u8>,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let settings = HostConfig::load();
    let ctx = Context {
        mode: output_mode,
        data_dir: settings.data_dir(cli.data_dir.as_deref()),
        bell: settings.alerts.bell,
    };

    match cli.command {
        Some(Command::Status) => commands::status(&ctx),
        Some(Command::Score { team, play }) => commands::score(&ctx, team, play),
        Some(Command::Try { result }) => commands::try_cmd(&ctx, result),
        Some(Command::Penalty { team, number }) => commands::penalty(&ctx, team, number),
        Some(Command::Timeout { team }) => commands::timeout(&ctx, team),
        Some(Command::Quarter) => commands::quarter(&ctx),
        Some(Command::Log { team, penalties }) => commands::log_cmd(&ctx, team, penalties),
        Some(Command::Clock { action }) => commands::clock(&ctx, action),
        Some(Command::Config { action }) => commands::config_cmd(&ctx, action),
        Some(Command::Reset) => commands::reset(&ctx),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("refwatch v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("refwatch v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'refwatch --help' for usage");
                println!("Run 'refwatch status' to see the scoreboard");
            }
            Ok(())
        },
    }
}
