//! Config command - show or replace the game configuration

use refwatch::core::models::{ConfigTag, ConfigValue};
use refwatch::output::{ConfigReport, OutputMode};

use super::Context;
use crate::cli::app::ConfigAction;

/// Run a config action
pub fn config_cmd(ctx: &Context, action: ConfigAction) -> anyhow::Result<()> {
    let mut session = ctx.open();
    match action {
        ConfigAction::Show => {
            ConfigReport {
                config: *session.config(),
            }
            .render(ctx.mode);
        },
        ConfigAction::Set {
            game_clock,
            play_clock,
            timeouts,
            periods,
            post_snap,
        } => {
            let pairs = [
                (ConfigTag::GameClock, game_clock.map(ConfigValue::from)),
                (ConfigTag::PlayClock, play_clock.map(ConfigValue::from)),
                (ConfigTag::Timeouts, timeouts.map(ConfigValue::from)),
                (ConfigTag::Periods, periods.map(ConfigValue::from)),
                (ConfigTag::PostSnap, post_snap.map(ConfigValue::from)),
            ]
            .into_iter()
            .filter_map(|(tag, value)| value.map(|v| (u32::from(tag), v)));

            session.apply_config_update(pairs);
            session.save();
            if ctx.mode == OutputMode::Human {
                println!("Configuration replaced; match reset\n");
            }
            ConfigReport {
                config: *session.config(),
            }
            .render(ctx.mode);
        },
    }
    Ok(())
}
