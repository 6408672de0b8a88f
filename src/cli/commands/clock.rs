//! Clock command - drive the game clock

use std::io::Write;
use std::thread;
use std::time::Duration;

use colored::Colorize;
use refwatch::core::ports::{Clock, TimerListener, TimerStatus};
use refwatch::output::{OperationResult, OutputMode, StatusReport};

use super::Context;
use super::context::HostSession;
use crate::cli::app::ClockAction;

/// Run a clock action
pub fn clock(ctx: &Context, action: ClockAction) -> anyhow::Result<()> {
    let mut session = ctx.open();
    match action {
        ClockAction::Start => session.start_clock(),
        ClockAction::Stop => session.stop_clock(),
        ClockAction::Toggle => session.toggle_clock(),
        ClockAction::Reset => session.reset_clock(),
        ClockAction::Set { preset } => session.select_clock(preset),
        ClockAction::Snap => session.ball_snapped(),
        ClockAction::Watch => {
            watch(ctx, &mut session);
            session.save();
            return Ok(());
        },
    }
    session.save();

    let status = session.clock_status();
    let state = if status.running { "running" } else { "stopped" };
    OperationResult::ok(format!("Clock {} ({state})", status.clock_text())).render(ctx.mode);
    Ok(())
}

/// Follow the running clock until it stops
fn watch(ctx: &Context, session: &mut HostSession) {
    if !session.game().timer().is_running() {
        let report = StatusReport::capture(session.game(), session.config(), &session.clock_status());
        report.render(ctx.mode);
        return;
    }

    session.set_timer_listener(Box::new(ConsoleListener::new(ctx.mode, ctx.bell)));
    while session.game().timer().is_running() {
        let Some(due) = session.scheduler().next_due() else {
            break;
        };
        let wait = (due - session.scheduler().now()).max(0.0);
        thread::sleep(Duration::from_secs_f64(wait));
        for handle in session.scheduler_mut().take_due() {
            session.timer_fired(handle);
        }
    }
    session.game_mut().clear_timer_listener();
}

/// Prints the countdown as it ticks
struct ConsoleListener {
    mode: OutputMode,
    bell: bool,
    shown: Option<u32>,
}

impl ConsoleListener {
    const fn new(mode: OutputMode, bell: bool) -> Self {
        Self {
            mode,
            bell,
            shown: None,
        }
    }

    fn event(&self, name: &str, status: &TimerStatus) {
        if self.mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({ "event": name, "clock": status.clock_text(), "remaining": status.remaining })
            );
        }
    }
}

impl TimerListener for ConsoleListener {
    fn on_start(&mut self, status: &TimerStatus) {
        self.event("start", status);
    }

    fn on_stop(&mut self, status: &TimerStatus) {
        self.event("stop", status);
        if self.mode == OutputMode::Human {
            println!();
        }
    }

    fn on_tick(&mut self, status: &TimerStatus) {
        if self.mode != OutputMode::Human || self.shown == Some(status.display_seconds) {
            return;
        }
        self.shown = Some(status.display_seconds);
        let text = format!(" {} ", status.clock_text());
        print!("\r{}", if status.running { text.reversed() } else { text.normal() });
        if let Err(e) = std::io::stdout().flush() {
            log::debug!("failed to flush clock display: {e}");
        }
    }

    fn on_expire(&mut self, status: &TimerStatus) {
        self.event("expire", status);
        if self.bell {
            print!("\x07");
        }
        if self.mode == OutputMode::Human {
            print!("\r{}", " 00:00 ".bold());
        }
        log::info!("clock expired");
    }
}
