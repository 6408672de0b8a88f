//! Log entries and quarter labels

use serde::{Deserialize, Serialize};

/// One logged event: a value tagged with the quarter it happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entry {
    /// Quarter index, 0-based
    pub quarter: u8,
    /// Points scored, penalty number, or 0 for a timeout marker
    pub value: u8,
}

impl Entry {
    /// Create a new entry
    #[must_use]
    pub const fn new(value: u8, quarter: u8) -> Self {
        Self { quarter, value }
    }

    /// Pack into the 16-bit storage word (quarter high byte, value low byte)
    #[must_use]
    pub fn to_word(self) -> u16 {
        (u16::from(self.quarter) << 8) | u16::from(self.value)
    }

    /// Unpack from the 16-bit storage word
    #[must_use]
    pub const fn from_word(word: u16) -> Self {
        Self {
            quarter: (word >> 8) as u8,
            value: (word & 0x00FF) as u8,
        }
    }
}

/// Label for a quarter index given the configured number of periods
///
/// Regulation periods read `1st`, `2nd`, `3rd`, ...; anything past the last
/// regulation period is `Overtime`.
#[must_use]
pub fn quarter_label(quarter: u8, periods: u8) -> String {
    if quarter >= periods {
        return "Overtime".to_string();
    }
    let n = u32::from(quarter) + 1;
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
