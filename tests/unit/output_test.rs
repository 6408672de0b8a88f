//! Tests for report rendering

use refwatch::core::models::{MatchState, Team};
use refwatch::output::{ConfigReport, LogReport, StatusReport};

use crate::common::{config, scheduler};

#[test]
fn test_status_report_captures_scoreboard() {
    let cfg = config();
    let mut rt = scheduler();
    let mut game = MatchState::new(&cfg);
    game.set_active_team(Team::Home).unwrap();
    game.new_score(6).unwrap();
    game.call_timeout(Team::Away).unwrap();
    game.start_clock(&mut rt);
    rt.clock().advance(65.0);

    let report = StatusReport::capture(&game, &cfg, &game.clock_status(&rt));
    assert_eq!(report.home.total, 6);
    assert_eq!(report.away.timeouts, 2);
    assert_eq!(report.quarter_label, "1st");
    assert_eq!(report.clock, "13:55");
    assert!(report.clock_running);
    assert!(report.try_pending);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["active_team"], "home");
    assert_eq!(json["play_clock"], "off");
    assert_eq!(json["home"]["total"], 6);
}

#[test]
fn test_log_report_json() {
    let report = LogReport {
        team: Team::Away,
        kind: "scores".to_string(),
        entries: vec!["1st - 7".to_string()],
    };
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["team"], "away");
    assert_eq!(json["entries"][0], "1st - 7");
}

#[test]
fn test_config_report_is_flat() {
    let report = ConfigReport { config: config() };
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["game_clock_seconds"], 900);
    assert_eq!(json["periods"], 4);
}
