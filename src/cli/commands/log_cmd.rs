//! Log command - list a team's scores or penalties

use refwatch::core::models::Team;
use refwatch::output::LogReport;

use super::Context;

/// Show a team's log
pub fn log_cmd(ctx: &Context, team: Team, penalties: bool) -> anyhow::Result<()> {
    let session = ctx.open();
    let record = session.game().team(team);
    let (events, kind) = if penalties {
        (record.penalties(), "penalties")
    } else {
        (record.scores(), "scores")
    };
    let periods = session.config().periods;
    let entries = (0..events.len())
        .map(|i| events.text(i, periods))
        .collect::<Result<Vec<_>, _>>()?;

    LogReport {
        team,
        kind: kind.to_string(),
        entries,
    }
    .render(ctx.mode);
    Ok(())
}
