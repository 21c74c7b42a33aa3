// Host-side tests for the activity-driven visibility timer.

use instant::Instant;
use std::time::Duration;
use viewer_core::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn hides_after_quiet_window() {
    let t0 = Instant::now();
    let mut timer = ActivityTimer::default();
    assert!(!timer.is_visible());

    timer.record_activity(t0);
    assert!(timer.is_visible());
    assert!(!timer.poll(t0 + ms(3999)));
    assert!(timer.is_visible());
    assert!(timer.poll(t0 + ms(4001)));
    assert!(!timer.is_visible());
    assert_eq!(timer.hide_deadline(), None);
}

#[test]
fn activity_resets_the_full_window() {
    let t0 = Instant::now();
    let mut timer = ActivityTimer::default();
    timer.on_mount(t0);
    timer.record_activity(t0 + ms(3000));

    // Past the original deadline, still visible.
    assert!(!timer.poll(t0 + ms(4500)));
    assert!(timer.is_visible());
    assert_eq!(timer.hide_deadline(), Some(t0 + ms(7000)));

    assert!(timer.poll(t0 + ms(7000)));
    assert!(!timer.is_visible());
}

#[test]
fn teardown_cancels_pending_hide() {
    let t0 = Instant::now();
    let mut timer = ActivityTimer::new(ms(250));
    timer.record_activity(t0);
    timer.teardown();
    assert!(!timer.poll(t0 + ms(10_000)));
    assert_eq!(timer.hide_deadline(), None);
}

#[test]
fn tracked_event_names_round_trip() {
    for event in ActivityEvent::ALL {
        assert_eq!(ActivityEvent::from_dom_name(event.dom_name()), Some(event));
    }
    assert_eq!(ActivityEvent::from_dom_name("keydown"), None);
}

#[test]
fn early_wake_reports_the_remaining_wait() {
    let t0 = Instant::now();
    let mut timer = ActivityTimer::default();
    timer.record_activity(t0);
    let deadline = timer.hide_deadline().expect("deadline armed");

    // A timer firing 3ms early must wait out the rest before polling.
    assert_eq!(time_until(deadline, t0 + ms(3997)), Some(ms(3)));
    assert!(!timer.poll(t0 + ms(3997)));
    assert_eq!(time_until(deadline, deadline), None);
    assert_eq!(time_until(deadline, t0 + ms(5000)), None);
    assert!(timer.poll(deadline));
}
