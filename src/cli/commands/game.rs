//! Scoring, penalty, timeout, quarter and reset commands

use refwatch::core::models::{ScoringPlay, Team, TryResult, quarter_label};
use refwatch::output::OperationResult;

use super::Context;

/// Record a score for `team`
pub fn score(ctx: &Context, team: Team, play: ScoringPlay) -> anyhow::Result<()> {
    let mut session = ctx.open();
    let game = session.game_mut();
    if game.try_active() {
        anyhow::bail!("a try is pending for the {} team; resolve it with 'refwatch try'", game.active_team());
    }
    game.set_active_team(team)?;
    game.new_score(play.points())?;
    let total = game.team(team).total();
    let pending = game.try_active();
    session.save();

    let mut message = format!("{team}: +{} ({total})", play.points());
    if pending {
        message.push_str("\nTry pending: 'refwatch try <two-point|one-point|failed>'");
    }
    OperationResult::ok(message).render(ctx.mode);
    Ok(())
}

/// Resolve the pending try
pub fn try_cmd(ctx: &Context, result: TryResult) -> anyhow::Result<()> {
    let mut session = ctx.open();
    let game = session.game_mut();
    game.add_pat(result.points())?;
    let team = game.active_team();
    let total = game.team(team).total();
    session.save();

    OperationResult::ok(format!("{team}: try +{} ({total})", result.points())).render(ctx.mode);
    Ok(())
}

/// Record a penalty against `team`
pub fn penalty(ctx: &Context, team: Team, number: u8) -> anyhow::Result<()> {
    let mut session = ctx.open();
    session.game_mut().add_penalty(team, number);
    session.save();

    OperationResult::ok(format!("Penalty {number} recorded against {team}")).render(ctx.mode);
    Ok(())
}

/// Charge a timeout to `team`
pub fn timeout(ctx: &Context, team: Team) -> anyhow::Result<()> {
    let mut session = ctx.open();
    session.game_mut().call_timeout(team)?;
    let left = session.game().team(team).timeouts();
    session.save();

    OperationResult::ok(format!("Timeout {team}: {left} remaining")).render(ctx.mode);
    Ok(())
}

/// End the current quarter
pub fn quarter(ctx: &Context) -> anyhow::Result<()> {
    let mut session = ctx.open();
    session.advance_quarter();
    let label = quarter_label(session.game().quarter(), session.config().periods);
    session.save();

    OperationResult::ok(format!("Now in the {label}")).render(ctx.mode);
    Ok(())
}

/// Start a new match
pub fn reset(ctx: &Context) -> anyhow::Result<()> {
    let mut session = ctx.open();
    session.reset_match();
    session.save();

    OperationResult::ok("Match reset").render(ctx.mode);
    Ok(())
}
