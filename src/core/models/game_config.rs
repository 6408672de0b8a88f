//! Versioned game tunables
//!
//! Updates arrive as `(tag, value)` pairs and always replace the whole
//! configuration: any field missing from an update falls back to its default
//! rather than keeping its previous value.

use serde::{Deserialize, Serialize};

/// Schema version of the persisted configuration record
pub const CONFIG_VERSION: u16 = 1;

/// Game tunables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Schema version
    pub version: u16,
    /// Game clock length in seconds
    pub game_clock_seconds: u16,
    /// Play clock length in seconds
    pub play_clock_seconds: u8,
    /// Timeouts each team gets per half
    pub timeouts_per_half: u8,
    /// Number of regulation periods
    pub periods: u8,
    /// Play clock after the snap; 0 disables post-snap shortening
    pub post_snap_seconds: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            game_clock_seconds: 15 * 60,
            play_clock_seconds: 25,
            timeouts_per_half: 3,
            periods: 4,
            post_snap_seconds: 0,
        }
    }
}

/// Field selector carried by an update pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigTag {
    /// Tag 1: game clock (u16)
    GameClock,
    /// Tag 2: play clock (u8)
    PlayClock,
    /// Tag 3: timeouts per half (u8)
    Timeouts,
    /// Tag 4: periods (u8)
    Periods,
    /// Tag 5: post-snap play clock (u8)
    PostSnap,
}

impl TryFrom<u32> for ConfigTag {
    type Error = u32;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(Self::GameClock),
            2 => Ok(Self::PlayClock),
            3 => Ok(Self::Timeouts),
            4 => Ok(Self::Periods),
            5 => Ok(Self::PostSnap),
            other => Err(other),
        }
    }
}

impl From<ConfigTag> for u32 {
    fn from(tag: ConfigTag) -> Self {
        match tag {
            ConfigTag::GameClock => 1,
            ConfigTag::PlayClock => 2,
            ConfigTag::Timeouts => 3,
            ConfigTag::Periods => 4,
            ConfigTag::PostSnap => 5,
        }
    }
}

/// Typed value carried by an update pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    /// Integer value
    Int(i64),
    /// Text value (never valid for the current fields)
    Text(String),
}

impl From<u16> for ConfigValue {
    fn from(value: u16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u8> for ConfigValue {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl GameConfig {
    /// Build a configuration from an update
    ///
    /// Starts from the defaults and overwrites only the fields present.
    /// Unknown tags are skipped; values that are not integers or do not fit
    /// the field are skipped with a warning.
    #[must_use]
    pub fn from_update<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, ConfigValue)>,
    {
        let mut config = Self::default();
        for (raw_tag, value) in pairs {
            let Ok(tag) = ConfigTag::try_from(raw_tag) else {
                log::debug!("ignoring unknown config tag {raw_tag}");
                continue;
            };
            if !config.set(tag, &value) {
                log::warn!("ignoring config tag {raw_tag}: value {value:?} out of range");
            }
        }
        config
    }

    /// Set one field; returns `false` if the value does not fit
    pub fn set(&mut self, tag: ConfigTag, value: &ConfigValue) -> bool {
        let ConfigValue::Int(n) = *value else {
            return false;
        };
        match tag {
            ConfigTag::GameClock => u16::try_from(n).map(|v| self.game_clock_seconds = v).is_ok(),
            ConfigTag::PlayClock => u8::try_from(n).map(|v| self.play_clock_seconds = v).is_ok(),
            ConfigTag::Timeouts => u8::try_from(n).map(|v| self.timeouts_per_half = v).is_ok(),
            ConfigTag::Periods => u8::try_from(n).map(|v| self.periods = v).is_ok(),
            ConfigTag::PostSnap => u8::try_from(n).map(|v| self.post_snap_seconds = v).is_ok(),
        }
    }

    /// Quarter index at which timeouts are replenished
    #[must_use]
    pub const fn half_boundary(&self) -> u8 {
        self.periods / 2
    }
}
