//! Game configuration persistence
//!
//! The configuration lives under its own key, separate from the match
//! snapshot. A record that is missing, the wrong size or from another schema
//! version is discarded in favour of the defaults.

use crate::core::models::{CONFIG_VERSION, ConfigValue, GameConfig};
use crate::core::ports::KeyValueStore;

use super::persistence::LoadError;

/// Key of the configuration record
pub const CONFIG_KEY: u32 = 100;

/// Load the configuration, falling back to defaults
#[must_use]
pub fn load_config<S: KeyValueStore + ?Sized>(store: &S) -> GameConfig {
    match read_config(store) {
        Ok(config) => config,
        Err(e) => {
            log::debug!("using default game config: {e}");
            GameConfig::default()
        },
    }
}

/// Persist the configuration (fire-and-forget)
pub fn save_config<S: KeyValueStore + ?Sized>(config: &GameConfig, store: &mut S) {
    match bincode::serialize(config) {
        Ok(bytes) => {
            if let Err(e) = store.write(CONFIG_KEY, &bytes) {
                log::warn!("failed to write game config: {e}");
            }
        },
        Err(e) => log::warn!("failed to encode game config: {e}"),
    }
}

/// Replace the configuration from an update and persist it
///
/// Fields absent from `pairs` take their default value. The caller must
/// reset the match afterwards, since timeout and period counts may no longer
/// fit the game in progress.
pub fn apply_update<S, I>(store: &mut S, pairs: I) -> GameConfig
where
    S: KeyValueStore + ?Sized,
    I: IntoIterator<Item = (u32, ConfigValue)>,
{
    let config = GameConfig::from_update(pairs);
    save_config(&config, store);
    log::info!(
        "game config updated: clock {}s, play clock {}s, {} timeouts, {} periods, post-snap {}s",
        config.game_clock_seconds,
        config.play_clock_seconds,
        config.timeouts_per_half,
        config.periods,
        config.post_snap_seconds
    );
    config
}

fn read_config<S: KeyValueStore + ?Sized>(store: &S) -> Result<GameConfig, LoadError> {
    let Some(size) = store.size_of(CONFIG_KEY) else {
        return Err(LoadError::Absent(CONFIG_KEY));
    };
    let expected = bincode::serialized_size(&GameConfig::default())? as usize;
    if size != expected {
        return Err(LoadError::Truncated {
            key: CONFIG_KEY,
            expected,
            actual: size,
        });
    }
    let mut buf = vec![0u8; expected];
    let read = store.read(CONFIG_KEY, &mut buf)?;
    if read != expected {
        return Err(LoadError::Truncated {
            key: CONFIG_KEY,
            expected,
            actual: read,
        });
    }
    let config: GameConfig = bincode::deserialize(&buf)?;
    if config.version != CONFIG_VERSION {
        return Err(LoadError::VersionMismatch {
            found: u32::from(config.version),
            expected: u32::from(CONFIG_VERSION),
        });
    }
    Ok(config)
}
