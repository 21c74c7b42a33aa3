// Host-side tests for device classification and the resize/orientation watcher.

use instant::Instant;
use std::time::Duration;
use viewer_core::*;

const DESKTOP_UA: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";
const IPHONE_UA: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";

fn signals(width: f64, ua: &str, touch: bool) -> DeviceSignals {
    DeviceSignals {
        viewport_width: width,
        viewport_height: 800.0,
        user_agent: ua.to_string(),
        has_touch: touch,
    }
}

#[test]
fn classifies_reference_cases() {
    assert_eq!(classify(&signals(500.0, IPHONE_UA, true)), DeviceClass::Mobile);
    assert_eq!(classify(&signals(900.0, DESKTOP_UA, false)), DeviceClass::Tablet);
    assert_eq!(classify(&signals(1200.0, DESKTOP_UA, false)), DeviceClass::Desktop);
    assert_eq!(classify(&signals(900.0, DESKTOP_UA, true)), DeviceClass::Mobile);
}

#[test]
fn mobile_user_agent_wins_at_any_width() {
    assert_eq!(classify(&signals(2560.0, IPHONE_UA, false)), DeviceClass::Mobile);
    let android = "Mozilla/5.0 (Linux; ANDROID 14; Pixel 8)";
    assert_eq!(classify(&signals(1920.0, android, false)), DeviceClass::Mobile);
}

#[test]
fn ipad_user_agent_is_mobile_not_tablet() {
    // The "ipad" mobile token is checked before the tablet UA clause.
    let ipad = "Mozilla/5.0 (iPad; CPU OS 17_5 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";
    assert_eq!(classify(&signals(1366.0, ipad, true)), DeviceClass::Mobile);
    assert_eq!(classify(&signals(1366.0, ipad, false)), DeviceClass::Mobile);
}

#[test]
fn breakpoints_are_inclusive() {
    assert_eq!(classify(&signals(768.0, DESKTOP_UA, false)), DeviceClass::Mobile);
    assert_eq!(classify(&signals(769.0, DESKTOP_UA, false)), DeviceClass::Tablet);
    assert_eq!(classify(&signals(1024.0, DESKTOP_UA, false)), DeviceClass::Tablet);
    assert_eq!(classify(&signals(1024.0, DESKTOP_UA, true)), DeviceClass::Mobile);
    assert_eq!(classify(&signals(1025.0, DESKTOP_UA, true)), DeviceClass::Desktop);
}

#[test]
fn missing_viewport_defaults_to_mobile() {
    assert_eq!(classify(&DeviceSignals::default()), DeviceClass::Mobile);
}

#[test]
fn layout_mode_per_class() {
    assert_eq!(LayoutMode::for_class(DeviceClass::Desktop), LayoutMode::Split);
    assert_eq!(LayoutMode::for_class(DeviceClass::Tablet), LayoutMode::Overlay);
    assert_eq!(LayoutMode::for_class(DeviceClass::Mobile), LayoutMode::Overlay);
}

#[test]
fn resize_reports_only_changes() {
    let mut watcher = DeviceWatcher::new(&signals(1200.0, DESKTOP_UA, false));
    assert_eq!(watcher.class(), DeviceClass::Desktop);
    assert_eq!(watcher.on_resize(&signals(1300.0, DESKTOP_UA, false)), None);
    assert_eq!(
        watcher.on_resize(&signals(1000.0, DESKTOP_UA, false)),
        Some(DeviceClass::Tablet)
    );
    assert_eq!(watcher.layout(), LayoutMode::Overlay);
    // No hysteresis: crossing back flips straight away.
    assert_eq!(
        watcher.on_resize(&signals(1025.0, DESKTOP_UA, false)),
        Some(DeviceClass::Desktop)
    );
}

#[test]
fn orientation_change_waits_for_settle_window() {
    let t0 = Instant::now();
    let mut watcher = DeviceWatcher::new(&signals(1200.0, DESKTOP_UA, true));
    let rotated = signals(700.0, DESKTOP_UA, true);

    watcher.on_orientation_change(t0);
    assert_eq!(watcher.reclassify_at(), Some(t0 + Duration::from_millis(100)));
    assert_eq!(watcher.poll(t0 + Duration::from_millis(50), &rotated), None);
    assert_eq!(watcher.class(), DeviceClass::Desktop);

    assert_eq!(
        watcher.poll(t0 + Duration::from_millis(100), &rotated),
        Some(DeviceClass::Mobile)
    );
    assert_eq!(watcher.reclassify_at(), None);
    assert_eq!(watcher.poll(t0 + Duration::from_millis(500), &rotated), None);
}
