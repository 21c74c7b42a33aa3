// Host-side tests for scroll-strip dragging and the split-pane divider.

use viewer_core::*;

#[test]
fn drag_scrolls_incrementally_with_sensitivity() {
    let mut strip = ScrollStrip::default();
    strip.on_drag_start(300.0);
    let first = strip.on_drag_move(250.0).unwrap();
    assert!((first - 60.0).abs() < 1e-9);
    // Reference moved to 250, so the next 50px adds another 60.
    let second = strip.on_drag_move(200.0).unwrap();
    assert!((second - 120.0).abs() < 1e-9);
    strip.on_drag_end();
    assert!(!strip.is_dragging());
    assert_eq!(strip.on_drag_move(0.0), None);
    assert_eq!(strip.offset(), second);
}

#[test]
fn offset_is_clamped_to_scroll_range() {
    let mut strip = ScrollStrip::new(1.0);
    strip.set_extent(500.0, 300.0);
    assert!(strip.is_scrollable());
    assert!(!strip.can_scroll_left());
    assert!(strip.can_scroll_right());

    strip.on_drag_start(0.0);
    assert_eq!(strip.on_drag_move(50.0), Some(0.0));
    assert_eq!(strip.on_drag_move(-1000.0), Some(200.0));
    assert!(strip.can_scroll_left());
    assert!(!strip.can_scroll_right());

    // Shrinking content re-clamps.
    strip.set_extent(350.0, 300.0);
    assert_eq!(strip.offset(), 50.0);
    strip.set_extent(200.0, 300.0);
    assert!(!strip.is_scrollable());
    assert_eq!(strip.offset(), 0.0);
}

#[test]
fn center_on_places_item_mid_viewport() {
    let mut strip = ScrollStrip::default();
    strip.set_extent(1000.0, 400.0);
    strip.center_on(500.0, 80.0);
    assert_eq!(strip.offset(), 340.0);
    strip.center_on(20.0, 80.0);
    assert_eq!(strip.offset(), 0.0);
    strip.center_on(980.0, 80.0);
    assert_eq!(strip.offset(), 600.0);
}

#[test]
fn strips_never_affect_each_other() {
    let mut menu = DragScrollController::default();
    menu.on_drag_start(StripId::Categories, 400.0);
    menu.on_drag_start(StripId::Items, 400.0);
    menu.on_drag_move(StripId::Categories, 300.0);
    menu.on_drag_move(StripId::Items, 380.0);
    menu.on_drag_end(StripId::Items);
    menu.on_drag_move(StripId::Categories, 250.0);
    menu.on_drag_move(StripId::Items, 0.0);

    assert!((menu.strip(StripId::Categories).offset() - 180.0).abs() < 1e-9);
    assert!((menu.strip(StripId::Items).offset() - 24.0).abs() < 1e-9);

    menu.cancel_all();
    assert!(!menu.strip(StripId::Categories).is_dragging());
    assert_eq!(menu.on_drag_move(StripId::Categories, 0.0), None);
}

#[test]
fn split_percent_is_always_within_bounds() {
    let widths = [320.0, 1024.0, 1920.0, 3840.0];
    for &width in &widths {
        for step in -10..=60 {
            let x = width * step as f64 / 50.0;
            let p = split_percent(x, width).unwrap();
            assert!((30.0..=80.0).contains(&p), "x={x} w={width} -> {p}");
        }
    }
    assert_eq!(split_percent(100.0, 1000.0), Some(30.0));
    assert_eq!(split_percent(950.0, 1000.0), Some(80.0));
    assert_eq!(split_percent(-5.0, 1000.0), Some(30.0));
    assert_eq!(split_percent(250.0, 500.0), Some(50.0));
    assert_eq!(split_percent(500.0, 0.0), None);
    assert_eq!(split_percent(f64::NAN, 1000.0), None);
}

#[test]
fn split_drag_is_ignored_outside_desktop() {
    let mut split = SplitResizeController::default();
    let start = split.percent();
    for class in [DeviceClass::Mobile, DeviceClass::Tablet] {
        assert!(!split.on_drag_start(class));
        assert_eq!(split.on_drag_move(400.0, 1000.0), None);
    }
    assert_eq!(split.percent(), start);
}

#[test]
fn split_drag_tracks_and_releases_on_desktop() {
    let mut split = SplitResizeController::default();
    assert!(split.on_drag_start(DeviceClass::Desktop));
    assert_eq!(split.on_drag_move(600.0, 1200.0), Some(50.0));
    assert_eq!(split.on_drag_move(10.0, 1200.0), Some(30.0));
    split.on_drag_end();
    assert_eq!(split.on_drag_move(1100.0, 1200.0), None);
    assert_eq!(split.percent(), 30.0);

    split.on_drag_start(DeviceClass::Desktop);
    split.on_device_change(DeviceClass::Tablet);
    assert!(!split.is_dragging());
}
