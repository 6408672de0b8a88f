//! Tests for the match state

use refwatch::core::models::{
    ClockPreset, Entry, GameConfig, HALFTIME_SECONDS, MatchError, MatchState, PlayClock,
    ScoringPlay, TIMEOUT_SECONDS, Team, TryResult,
};

use crate::common::{config, scheduler};

fn new_match() -> MatchState {
    MatchState::new(&config())
}

#[test]
fn test_new_match_defaults() {
    let game = new_match();
    let rt = scheduler();
    assert_eq!(game.quarter(), 0);
    assert!(!game.try_active());
    assert_eq!(game.active_team(), Team::Away);
    assert_eq!(game.play_clock(), PlayClock::Off);
    assert_eq!(game.team(Team::Home).timeouts(), 3);
    assert_eq!(game.clock_status(&rt).clock_text(), "15:00");
}

#[test]
fn test_touchdown_then_try() {
    let mut game = new_match();
    game.set_active_team(Team::Home).unwrap();
    game.new_score(ScoringPlay::Touchdown.points()).unwrap();
    assert!(game.try_active());
    assert_eq!(game.new_score(3), Err(MatchError::TryPending));

    game.add_pat(TryResult::OnePoint.points()).unwrap();
    assert!(!game.try_active());
    assert_eq!(game.team(Team::Home).total(), 7);
    assert_eq!(game.team(Team::Home).scores().entries(), &[Entry::new(7, 0)]);
    assert_eq!(game.team(Team::Away).total(), 0);
}

#[test]
fn test_failed_try_keeps_touchdown() {
    let mut game = new_match();
    game.new_score(6).unwrap();
    game.add_pat(TryResult::Failed.points()).unwrap();
    assert_eq!(game.team(Team::Away).total(), 6);
    assert!(!game.try_active());
}

#[test]
fn test_invalid_try_leaves_try_pending() {
    let mut game = new_match();
    game.new_score(6).unwrap();
    assert_eq!(game.add_pat(5), Err(MatchError::InvalidExtraPoint(5)));
    assert!(game.try_active());
}

#[test]
fn test_pat_without_touchdown_fails() {
    let mut game = new_match();
    game.new_score(ScoringPlay::FieldGoal.points()).unwrap();
    assert!(!game.try_active());
    assert_eq!(game.add_pat(1), Err(MatchError::NoPendingTry));
}

#[test]
fn test_scores_are_tagged_with_quarter() {
    let cfg = config();
    let mut game = new_match();
    game.new_score(3).unwrap();
    game.advance_quarter(&cfg);
    game.new_score(2).unwrap();

    let scores = game.team(Team::Away).scores();
    assert_eq!(scores.get(0), Some(Entry::new(3, 0)));
    assert_eq!(scores.get(1), Some(Entry::new(2, 1)));
    assert_eq!(game.team(Team::Away).total(), 5);
}

#[test]
fn test_timeouts_restored_at_half() {
    let cfg = config();
    let mut game = new_match();
    game.call_timeout(Team::Home).unwrap();
    game.call_timeout(Team::Home).unwrap();
    game.call_timeout(Team::Away).unwrap();

    game.advance_quarter(&cfg);
    assert_eq!(game.team(Team::Home).timeouts(), 1);

    game.advance_quarter(&cfg);
    assert_eq!(game.quarter(), 2);
    assert_eq!(game.team(Team::Home).timeouts(), 3);
    assert_eq!(game.team(Team::Away).timeouts(), 3);
    // timeout markers remain in the log
    assert_eq!(game.team(Team::Home).penalties().len(), 2);
}

#[test]
fn test_half_boundary_follows_periods() {
    let cfg = GameConfig {
        periods: 6,
        ..GameConfig::default()
    };
    let mut game = MatchState::new(&cfg);
    game.call_timeout(Team::Away).unwrap();
    game.advance_quarter(&cfg);
    game.advance_quarter(&cfg);
    assert_eq!(game.team(Team::Away).timeouts(), 2);
    game.advance_quarter(&cfg);
    assert_eq!(game.team(Team::Away).timeouts(), 3);
}

#[test]
fn test_no_timeouts_left() {
    let mut game = new_match();
    for _ in 0..3 {
        game.call_timeout(Team::Away).unwrap();
    }
    assert_eq!(game.call_timeout(Team::Away), Err(MatchError::NoTimeoutsRemaining));
}

#[test]
fn test_penalty_goes_to_named_team() {
    let mut game = new_match();
    game.set_active_team(Team::Home).unwrap();
    game.add_penalty(Team::Away, 15);
    assert_eq!(game.team(Team::Away).penalties().entries(), &[Entry::new(15, 0)]);
    assert!(game.team(Team::Home).penalties().is_empty());
}

#[test]
fn test_select_clock_presets() {
    let cfg = config();
    let mut rt = scheduler();
    let mut game = new_match();

    game.select_clock(ClockPreset::Timeout, &cfg, &mut rt);
    assert_eq!(game.timer().reset_to(), TIMEOUT_SECONDS);
    assert_eq!(game.play_clock(), PlayClock::Off);

    game.select_clock(ClockPreset::Halftime, &cfg, &mut rt);
    assert_eq!(game.clock_status(&rt).clock_text(), "20:00");
    assert_eq!(game.timer().reset_to(), HALFTIME_SECONDS);

    game.select_clock(ClockPreset::Play, &cfg, &mut rt);
    assert_eq!(game.play_clock(), PlayClock::PreSnap);
    assert_eq!(game.clock_status(&rt).display_seconds, 25);

    game.select_clock(ClockPreset::Game, &cfg, &mut rt);
    assert_eq!(game.play_clock(), PlayClock::Off);
    assert_eq!(game.clock_status(&rt).display_seconds, 900);
}

#[test]
fn test_select_clock_stops_running_clock() {
    let cfg = config();
    let mut rt = scheduler();
    let mut game = new_match();
    game.start_clock(&mut rt);
    game.select_clock(ClockPreset::Timeout, &cfg, &mut rt);
    assert!(!game.timer().is_running());
    assert_eq!(rt.pending_count(), 0);
}

#[test]
fn test_snap_without_post_snap_ends_play_clock() {
    let cfg = config();
    let mut rt = scheduler();
    let mut game = new_match();
    game.select_clock(ClockPreset::Play, &cfg, &mut rt);
    game.start_clock(&mut rt);
    rt.clock().advance(10.0);

    game.ball_snapped(&cfg, &mut rt);
    assert_eq!(game.play_clock(), PlayClock::Off);
    assert!(!game.timer().is_running());
    assert_eq!(game.clock_status(&rt).display_seconds, 15);
}

#[test]
fn test_snap_with_post_snap_restarts_clock() {
    let cfg = GameConfig {
        post_snap_seconds: 10,
        ..GameConfig::default()
    };
    let mut rt = scheduler();
    let mut game = MatchState::new(&cfg);
    game.select_clock(ClockPreset::Play, &cfg, &mut rt);
    game.start_clock(&mut rt);
    rt.clock().advance(20.0);

    game.ball_snapped(&cfg, &mut rt);
    assert_eq!(game.play_clock(), PlayClock::PostSnap);
    assert!(game.timer().is_running());
    assert_eq!(game.clock_status(&rt).display_seconds, 10);
    assert_eq!(rt.pending_count(), 1);

    // a second snap is ignored outside pre-snap
    rt.clock().advance(2.0);
    game.ball_snapped(&cfg, &mut rt);
    assert_eq!(game.clock_status(&rt).display_seconds, 8);
}

#[test]
fn test_snap_ignored_on_game_clock() {
    let cfg = config();
    let mut rt = scheduler();
    let mut game = new_match();
    game.start_clock(&mut rt);
    game.ball_snapped(&cfg, &mut rt);
    assert!(game.timer().is_running());
    assert_eq!(game.play_clock(), PlayClock::Off);
}

#[test]
fn test_toggle_clock() {
    let mut rt = scheduler();
    let mut game = new_match();
    game.toggle_clock(&mut rt);
    assert!(game.timer().is_running());
    game.toggle_clock(&mut rt);
    assert!(!game.timer().is_running());
}

#[test]
fn test_reset_clears_match() {
    let cfg = config();
    let mut rt = scheduler();
    let mut game = new_match();
    game.new_score(6).unwrap();
    game.add_penalty(Team::Home, 5);
    game.advance_quarter(&cfg);
    game.select_clock(ClockPreset::Play, &cfg, &mut rt);
    game.start_clock(&mut rt);

    game.reset(&cfg, &mut rt);
    assert_eq!(game.quarter(), 0);
    assert!(!game.try_active());
    assert_eq!(game.team(Team::Away).total(), 0);
    assert!(game.team(Team::Home).penalties().is_empty());
    assert_eq!(game.play_clock(), PlayClock::Off);
    assert!(!game.timer().is_running());
    assert_eq!(game.timer().reset_to(), 900);
}

#[test]
fn test_parsers() {
    assert_eq!("fg".parse::<ScoringPlay>().unwrap(), ScoringPlay::FieldGoal);
    assert_eq!("two-point".parse::<TryResult>().unwrap(), TryResult::TwoPoint);
    assert_eq!("half".parse::<ClockPreset>().unwrap(), ClockPreset::Halftime);
    assert!("punt".parse::<ScoringPlay>().is_err());
}

#[test]
fn test_active_team_locked_while_try_pending() {
    let mut game = new_match();
    game.new_score(6).unwrap();
    game.add_pat(TryResult::Failed.points()).unwrap();
    game.set_active_team(Team::Home).unwrap();
    game.new_score(6).unwrap();

    assert_eq!(game.set_active_team(Team::Away), Err(MatchError::TryPending));
    assert_eq!(game.active_team(), Team::Home);
    // re-selecting the scoring team is allowed
    game.set_active_team(Team::Home).unwrap();

    game.add_pat(TryResult::TwoPoint.points()).unwrap();
    assert_eq!(game.team(Team::Home).scores().entries(), &[Entry::new(8, 0)]);
    assert_eq!(game.team(Team::Away).scores().entries(), &[Entry::new(6, 0)]);
    assert_eq!(game.team(Team::Away).total(), 6);
    assert!(!game.try_active());

    game.set_active_team(Team::Away).unwrap();
    assert_eq!(game.add_pat(1), Err(MatchError::NoPendingTry));
    assert_eq!(game.team(Team::Away).total(), 6);
}
