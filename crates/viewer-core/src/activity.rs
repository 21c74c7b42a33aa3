//! Idle/activity timer controlling the floating controls' visibility.

use crate::constants::ACTIVITY_QUIET_WINDOW;
use instant::Instant;
use std::time::Duration;

/// Input kinds that count as activity on the scene region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityEvent {
    PointerDown,
    PointerMove,
    PointerUp,
    Wheel,
    TouchStart,
    TouchMove,
    TouchEnd,
}

impl ActivityEvent {
    pub const ALL: [ActivityEvent; 7] = [
        ActivityEvent::PointerDown,
        ActivityEvent::PointerMove,
        ActivityEvent::PointerUp,
        ActivityEvent::Wheel,
        ActivityEvent::TouchStart,
        ActivityEvent::TouchMove,
        ActivityEvent::TouchEnd,
    ];

    /// DOM event type name.
    pub fn dom_name(self) -> &'static str {
        match self {
            ActivityEvent::PointerDown => "pointerdown",
            ActivityEvent::PointerMove => "pointermove",
            ActivityEvent::PointerUp => "pointerup",
            ActivityEvent::Wheel => "wheel",
            ActivityEvent::TouchStart => "touchstart",
            ActivityEvent::TouchMove => "touchmove",
            ActivityEvent::TouchEnd => "touchend",
        }
    }

    pub fn from_dom_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.dom_name() == name)
    }
}

/// Time left before `deadline`, or `None` once it is due. Host timers can
/// wake slightly early, so callers re-arm with the remainder.
pub fn time_until(deadline: Instant, now: Instant) -> Option<Duration> {
    if now >= deadline {
        None
    } else {
        Some(deadline - now)
    }
}

/// Debounced visibility: every activity shows the controls and pushes the
/// hide deadline a full quiet window into the future.
#[derive(Clone, Debug)]
pub struct ActivityTimer {
    quiet_window: Duration,
    visible: bool,
    hide_at: Option<Instant>,
}

impl Default for ActivityTimer {
    fn default() -> Self {
        Self::new(ACTIVITY_QUIET_WINDOW)
    }
}

impl ActivityTimer {
    pub fn new(quiet_window: Duration) -> Self {
        Self {
            quiet_window,
            visible: false,
            hide_at: None,
        }
    }

    /// Mount-time start: controls begin visible with a fresh countdown.
    pub fn on_mount(&mut self, now: Instant) {
        self.record_activity(now);
    }

    pub fn record_activity(&mut self, now: Instant) {
        self.visible = true;
        self.hide_at = Some(now + self.quiet_window);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn hide_deadline(&self) -> Option<Instant> {
        self.hide_at
    }

    pub fn quiet_window(&self) -> Duration {
        self.quiet_window
    }

    /// Hide once the deadline has passed. Returns true if visibility changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.hide_at = None;
                let was_visible = self.visible;
                self.visible = false;
                was_visible
            }
            _ => false,
        }
    }

    /// Cancel any pending hide; a later `poll` does nothing.
    pub fn teardown(&mut self) {
        self.hide_at = None;
    }
}
