//! Property-based tests for event logs and team records
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use refwatch::core::models::{PackedEventLog, TeamRecord};

proptest! {
    /// Capacity is the smallest power of two holding every entry
    #[test]
    fn capacity_is_power_of_two(values in prop::collection::vec(any::<u8>(), 0..200)) {
        let mut log = PackedEventLog::new();
        for v in &values {
            log.add(*v, 0);
        }
        prop_assert!(log.capacity().is_power_of_two());
        prop_assert!(log.capacity() >= log.len());
        prop_assert!(log.len() <= 1 || log.capacity() < 2 * log.len());
    }

    /// Entries survive the packed encoding
    #[test]
    fn packed_bytes_preserve_entries(entries in prop::collection::vec((any::<u8>(), 0u8..8), 0..64)) {
        let mut log = PackedEventLog::new();
        for (value, quarter) in &entries {
            log.add(*value, *quarter);
        }
        let mut loaded = PackedEventLog::new();
        loaded.load_bytes(&log.to_bytes());
        prop_assert_eq!(loaded.entries(), log.entries());
    }

    /// Total and entries follow any mix of appends, amendments and clears
    #[test]
    fn log_tracks_model(ops in prop::collection::vec((0u8..3, any::<u8>(), 0u8..6), 0..80)) {
        let mut log = PackedEventLog::new();
        let mut model: Vec<(u8, u8)> = Vec::new();
        for (op, value, quarter) in ops {
            match op {
                0 => {
                    log.add(value, quarter);
                    model.push((value, quarter));
                },
                1 => {
                    let amended = log.amend_last(value);
                    prop_assert_eq!(amended.is_ok(), !model.is_empty());
                    if let Some(last) = model.last_mut() {
                        last.0 = value;
                    }
                },
                _ => {
                    let capacity = log.capacity();
                    log.clear();
                    model.clear();
                    prop_assert_eq!(log.capacity(), capacity);
                },
            }
            let expected = model.iter().fold(0u16, |sum, (v, _)| sum.wrapping_add(u16::from(*v)));
            prop_assert_eq!(log.total_value(), expected);
            prop_assert_eq!(log.len(), model.len());
        }
    }

    /// The running total always equals the sum of the scores log, and a
    /// try is accepted exactly when the last touchdown is still open
    #[test]
    fn total_matches_scores(plays in prop::collection::vec((0u8..5, 0u8..3), 0..60)) {
        let mut team = TeamRecord::new(3);
        let mut open_try = false;
        for (play, extra) in plays {
            match play {
                0 => {
                    team.new_score(6, 0);
                    open_try = true;
                },
                1 => {
                    team.new_score(3, 0);
                    open_try = false;
                },
                2 => {
                    team.new_score(2, 0);
                    open_try = false;
                },
                3 => {
                    let result = team.add_pat(extra);
                    prop_assert_eq!(result.is_ok(), open_try);
                    if open_try {
                        prop_assert_eq!(team.scores().last().map(|e| e.value), Some(6 + extra));
                    }
                    open_try = false;
                },
                _ => {
                    team.clear(3);
                    open_try = false;
                    prop_assert!(team.scores().is_empty());
                },
            }
            prop_assert_eq!(team.try_pending(), open_try);
            prop_assert_eq!(team.total(), team.scores().total_value());
        }
    }
}
