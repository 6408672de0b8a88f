//! Status command - show the scoreboard

use refwatch::output::StatusReport;

use super::Context;

/// Show the scoreboard
pub fn status(ctx: &Context) -> anyhow::Result<()> {
    let mut session = ctx.open();
    let report = StatusReport::capture(session.game(), session.config(), &session.clock_status());
    // Loading may have stopped a clock that expired in the meantime.
    session.save();
    report.render(ctx.mode);
    Ok(())
}
