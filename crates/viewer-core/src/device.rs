//! Device classification feeding the layout mode.

use crate::constants::{
    MOBILE_BREAKPOINT_PX, MOBILE_UA_TOKENS, ORIENTATION_SETTLE, TABLET_BREAKPOINT_PX,
    TABLET_UA_TOKENS,
};
use instant::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

/// Which shell layout a device class renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// Full-screen scene with the menu strip overlaid at the bottom.
    Overlay,
    /// Scene and desktop menu side by side with a draggable divider.
    Split,
}

impl LayoutMode {
    pub fn for_class(class: DeviceClass) -> Self {
        match class {
            DeviceClass::Desktop => LayoutMode::Split,
            DeviceClass::Mobile | DeviceClass::Tablet => LayoutMode::Overlay,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceSignals {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub user_agent: String,
    pub has_touch: bool,
}

fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_UA_TOKENS.iter().any(|t| ua.contains(t))
}

fn is_tablet_user_agent(user_agent: &str) -> bool {
    TABLET_UA_TOKENS.iter().any(|t| user_agent.contains(t))
}

/// Classify a device. Precedence, first match wins:
/// mobile UA, narrow viewport, touch with a tablet-or-narrower viewport,
/// tablet-range viewport or tablet UA, then desktop.
///
/// There is no hysteresis; a window resized across a breakpoint flips class
/// immediately.
pub fn classify(signals: &DeviceSignals) -> DeviceClass {
    let width = signals.viewport_width;
    if is_mobile_user_agent(&signals.user_agent) {
        return DeviceClass::Mobile;
    }
    if width <= MOBILE_BREAKPOINT_PX {
        return DeviceClass::Mobile;
    }
    if signals.has_touch && width <= TABLET_BREAKPOINT_PX {
        return DeviceClass::Mobile;
    }
    if width <= TABLET_BREAKPOINT_PX || is_tablet_user_agent(&signals.user_agent) {
        return DeviceClass::Tablet;
    }
    DeviceClass::Desktop
}

/// Tracks the current class across resize and orientation events.
///
/// Resizes reclassify immediately. Orientation changes wait for the viewport
/// to settle; the host calls [`DeviceWatcher::poll`] once the deadline passes.
#[derive(Clone, Debug)]
pub struct DeviceWatcher {
    class: DeviceClass,
    pending_since: Option<Instant>,
}

impl DeviceWatcher {
    pub fn new(signals: &DeviceSignals) -> Self {
        Self {
            class: classify(signals),
            pending_since: None,
        }
    }

    pub fn class(&self) -> DeviceClass {
        self.class
    }

    pub fn layout(&self) -> LayoutMode {
        LayoutMode::for_class(self.class)
    }

    /// Reclassify now. Returns the new class only if it changed.
    pub fn on_resize(&mut self, signals: &DeviceSignals) -> Option<DeviceClass> {
        let next = classify(signals);
        if next == self.class {
            return None;
        }
        log::info!(
            "[device] {:?} -> {:?} at {}x{}",
            self.class,
            next,
            signals.viewport_width,
            signals.viewport_height
        );
        self.class = next;
        Some(next)
    }

    /// Start (or restart) the settle window after an orientation change.
    pub fn on_orientation_change(&mut self, now: Instant) {
        self.pending_since = Some(now);
    }

    pub fn reclassify_at(&self) -> Option<Instant> {
        self.pending_since.map(|t| t + ORIENTATION_SETTLE)
    }

    /// Run a pending reclassification whose settle window has elapsed.
    pub fn poll(&mut self, now: Instant, signals: &DeviceSignals) -> Option<DeviceClass> {
        match self.reclassify_at() {
            Some(due) if now >= due => {
                self.pending_since = None;
                self.on_resize(signals)
            }
            _ => None,
        }
    }
}
