//! Tests for the wall-clock anchored countdown

use refwatch::adapters::{LoopScheduler, ManualClock};
use refwatch::core::models::{CountdownTimer, TimerState};
use refwatch::core::ports::{Scheduler, TimerEvent};

use crate::common::{RecordingListener, START, scheduler};

/// Advance 100 ms and deliver whatever is due
fn step(timer: &mut CountdownTimer, rt: &mut LoopScheduler<ManualClock>) -> bool {
    rt.clock().advance(0.1);
    let mut fired = false;
    for handle in rt.take_due() {
        fired |= timer.timer_fired(handle, rt);
    }
    fired
}

#[test]
fn test_remaining_follows_wall_clock() {
    let mut rt = scheduler();
    let mut timer = CountdownTimer::new(60);
    timer.start(&mut rt);

    rt.clock().advance(12.5);
    assert!((timer.remaining(&rt) - 47.5).abs() < 1e-6);
    assert_eq!(timer.display_seconds(&rt), 48);
}

#[test]
fn test_remaining_never_increases_while_running() {
    let mut rt = scheduler();
    let mut timer = CountdownTimer::new(5);
    timer.start(&mut rt);

    let mut previous = timer.remaining(&rt);
    for _ in 0..80 {
        step(&mut timer, &mut rt);
        let now = timer.remaining(&rt);
        assert!(now <= previous);
        assert!(now >= 0.0);
        previous = now;
    }
}

#[test]
fn test_stop_freezes_and_start_resumes() {
    let mut rt = scheduler();
    let mut timer = CountdownTimer::new(60);
    timer.start(&mut rt);
    rt.clock().advance(10.0);
    timer.stop(&mut rt);

    rt.clock().advance(100.0);
    assert!((timer.remaining(&rt) - 50.0).abs() < 1e-6);

    timer.start(&mut rt);
    rt.clock().advance(5.0);
    assert!((timer.remaining(&rt) - 45.0).abs() < 1e-6);
}

#[test]
fn test_start_and_stop_are_idempotent() {
    let mut rt = scheduler();
    let mut timer = CountdownTimer::new(60);
    let listener = RecordingListener::new();
    timer.set_listener(listener.boxed(), &rt);
    listener.clear();

    timer.start(&mut rt);
    let handle = timer.pending();
    rt.clock().advance(3.0);
    timer.start(&mut rt);
    assert_eq!(timer.pending(), handle);
    assert!((timer.remaining(&rt) - 57.0).abs() < 1e-6);

    timer.stop(&mut rt);
    timer.stop(&mut rt);
    assert_eq!(listener.kinds(), vec![TimerEvent::Start, TimerEvent::Stop]);
}

#[test]
fn test_exactly_one_callback_pending_while_running() {
    let mut rt = scheduler();
    let mut timer = CountdownTimer::new(30);
    timer.start(&mut rt);
    assert_eq!(rt.pending_count(), 1);

    for _ in 0..25 {
        assert!(step(&mut timer, &mut rt));
        assert_eq!(rt.pending_count(), 1);
    }

    let last = timer.pending().unwrap();
    assert!(rt.is_pending(last));
    timer.stop(&mut rt);
    assert!(!rt.is_pending(last));
    assert_eq!(rt.pending_count(), 0);
    assert_eq!(timer.pending(), None);
}

#[test]
fn test_stale_callback_is_ignored() {
    let mut rt = scheduler();
    let mut timer = CountdownTimer::new(30);
    timer.start(&mut rt);
    let first = timer.pending().unwrap();
    timer.stop(&mut rt);
    timer.start(&mut rt);

    assert!(!timer.timer_fired(first, &mut rt));
    assert_ne!(timer.pending(), Some(first));
    assert_eq!(rt.pending_count(), 1);
}

#[test]
fn test_expiry_fires_once_then_stops() {
    let mut rt = scheduler();
    let mut timer = CountdownTimer::new(1);
    let listener = RecordingListener::new();
    timer.set_listener(listener.boxed(), &rt);
    timer.start(&mut rt);

    for _ in 0..30 {
        step(&mut timer, &mut rt);
    }

    assert!(!timer.is_running());
    assert_eq!(listener.count(TimerEvent::Expire), 1);
    assert_eq!(timer.remaining(&rt), 0.0);
    assert_eq!(rt.pending_count(), 0);

    let kinds = listener.kinds();
    let expire = kinds.iter().position(|k| *k == TimerEvent::Expire).unwrap();
    assert_eq!(kinds[expire + 1], TimerEvent::Stop);
}

#[test]
fn test_reset_stops_and_restores_duration() {
    let mut rt = scheduler();
    let mut timer = CountdownTimer::new(25);
    let listener = RecordingListener::new();
    timer.set_listener(listener.boxed(), &rt);
    timer.start(&mut rt);
    rt.clock().advance(7.0);
    listener.clear();

    timer.reset(&mut rt);
    assert!(!timer.is_running());
    assert!((timer.remaining(&rt) - 25.0).abs() < 1e-6);
    assert_eq!(listener.kinds(), vec![TimerEvent::Stop, TimerEvent::Tick]);
}

#[test]
fn test_suspension_clamps_at_zero() {
    let mut rt = scheduler();
    let mut timer = CountdownTimer::new(60);
    timer.start(&mut rt);

    // No callbacks delivered while the host is asleep.
    rt.clock().advance(3600.0);
    assert_eq!(timer.remaining(&rt), 0.0);
    assert_eq!(timer.display_seconds(&rt), 0);
}

#[test]
fn test_clock_moving_backwards_does_not_add_time() {
    let mut rt = scheduler();
    let mut timer = CountdownTimer::new(60);
    timer.start(&mut rt);
    rt.clock().set(START - 30.0);
    assert!((timer.remaining(&rt) - 60.0).abs() < 1e-6);
}

#[test]
fn test_listener_is_synced_on_attach() {
    let mut rt = scheduler();
    let mut timer = CountdownTimer::new(60);
    timer.start(&mut rt);
    rt.clock().advance(20.0);

    let listener = RecordingListener::new();
    timer.set_listener(listener.boxed(), &rt);
    assert_eq!(listener.kinds(), vec![TimerEvent::Start, TimerEvent::Tick]);
    let status = listener.last_status().unwrap();
    assert!(status.running);
    assert_eq!(status.display_seconds, 40);
    assert_eq!(status.clock_text(), "00:40");
}

#[test]
fn test_restore_stops_timer_that_expired_while_suspended() {
    let mut rt = scheduler();
    let saved = TimerState {
        initial: 30.0,
        started: START - 100.0,
        running: true,
        reset_to: 30,
    };
    let mut timer = CountdownTimer::new(0);
    timer.restore(saved, &mut rt);

    assert!(!timer.is_running());
    assert_eq!(timer.remaining(&rt), 0.0);
    assert_eq!(rt.pending_count(), 0);
}

#[test]
fn test_restore_resumes_running_timer() {
    let mut rt = scheduler();
    let saved = TimerState {
        initial: 30.0,
        started: START - 10.0,
        running: true,
        reset_to: 30,
    };
    let mut timer = CountdownTimer::new(0);
    timer.restore(saved, &mut rt);

    assert!(timer.is_running());
    assert!((timer.remaining(&rt) - 20.0).abs() < 1e-6);
    assert_eq!(rt.pending_count(), 1);
    assert!(step(&mut timer, &mut rt));
}

#[test]
fn test_scheduler_handles_are_unique() {
    let mut rt = scheduler();
    let a = rt.schedule_once(100);
    let b = rt.schedule_once(100);
    assert_ne!(a, b);
}
