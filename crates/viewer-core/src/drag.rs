//! Pointer-drag controllers: horizontal scroll strips and the split-pane
//! divider.

use crate::constants::{
    DRAG_SCROLL_SENSITIVITY, SPLIT_DEFAULT_PERCENT, SPLIT_MAX_PERCENT, SPLIT_MIN_PERCENT,
};
use crate::device::DeviceClass;

/// Live drag state between a drag-start and its end/cancel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub reference_x: f64,
}

// ---------------- Scroll strips ----------------

/// One horizontally scrollable strip.
///
/// Tracking is incremental: each move scrolls by the distance since the
/// previous move, scaled by the sensitivity. The offset is clamped to the
/// strip's scroll range once extents are known.
#[derive(Clone, Debug)]
pub struct ScrollStrip {
    sensitivity: f64,
    session: Option<DragSession>,
    offset: f64,
    content_width: f64,
    viewport_width: f64,
}

impl Default for ScrollStrip {
    fn default() -> Self {
        Self::new(DRAG_SCROLL_SENSITIVITY)
    }
}

impl ScrollStrip {
    pub fn new(sensitivity: f64) -> Self {
        Self {
            sensitivity,
            session: None,
            offset: 0.0,
            content_width: f64::INFINITY,
            viewport_width: 0.0,
        }
    }

    pub fn on_drag_start(&mut self, x: f64) {
        self.session = Some(DragSession { reference_x: x });
    }

    /// Returns the new offset, or `None` when no drag is active.
    pub fn on_drag_move(&mut self, x: f64) -> Option<f64> {
        let session = self.session.as_mut()?;
        let delta = session.reference_x - x;
        session.reference_x = x;
        self.scroll_to(self.offset + delta * self.sensitivity);
        Some(self.offset)
    }

    /// Pointer-up, pointer-leave and teardown all end the session; later
    /// moves are ignored. No momentum is applied.
    pub fn on_drag_end(&mut self) {
        self.session = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Record the measured strip extents and re-clamp the offset.
    pub fn set_extent(&mut self, content_width: f64, viewport_width: f64) {
        self.content_width = content_width.max(0.0);
        self.viewport_width = viewport_width.max(0.0);
        self.scroll_to(self.offset);
    }

    pub fn max_offset(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    pub fn scroll_to(&mut self, offset: f64) {
        if offset.is_finite() {
            self.offset = offset.clamp(0.0, self.max_offset());
        }
    }

    /// Scroll so an item sits in the middle of the viewport.
    pub fn center_on(&mut self, item_left: f64, item_width: f64) {
        self.scroll_to(item_left - self.viewport_width / 2.0 + item_width / 2.0);
    }

    pub fn is_scrollable(&self) -> bool {
        self.max_offset() > 0.0
    }

    pub fn can_scroll_left(&self) -> bool {
        self.offset > 0.0
    }

    pub fn can_scroll_right(&self) -> bool {
        self.offset < self.max_offset()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StripId {
    Categories,
    Items,
}

/// The mobile menu's two strips, each with its own isolated session.
#[derive(Clone, Debug, Default)]
pub struct DragScrollController {
    categories: ScrollStrip,
    items: ScrollStrip,
}

impl DragScrollController {
    pub fn new(sensitivity: f64) -> Self {
        Self {
            categories: ScrollStrip::new(sensitivity),
            items: ScrollStrip::new(sensitivity),
        }
    }

    pub fn strip(&self, id: StripId) -> &ScrollStrip {
        match id {
            StripId::Categories => &self.categories,
            StripId::Items => &self.items,
        }
    }

    pub fn strip_mut(&mut self, id: StripId) -> &mut ScrollStrip {
        match id {
            StripId::Categories => &mut self.categories,
            StripId::Items => &mut self.items,
        }
    }

    pub fn on_drag_start(&mut self, id: StripId, x: f64) {
        self.strip_mut(id).on_drag_start(x);
    }

    pub fn on_drag_move(&mut self, id: StripId, x: f64) -> Option<f64> {
        self.strip_mut(id).on_drag_move(x)
    }

    pub fn on_drag_end(&mut self, id: StripId) {
        self.strip_mut(id).on_drag_end();
    }

    /// Teardown: cancel both sessions.
    pub fn cancel_all(&mut self) {
        self.categories.on_drag_end();
        self.items.on_drag_end();
    }
}

// ---------------- Split pane ----------------

/// Clamp a pointer position to a split percentage.
#[inline]
pub fn split_percent(pointer_x: f64, viewport_width: f64) -> Option<f64> {
    if viewport_width.is_nan() || viewport_width <= 0.0 || !pointer_x.is_finite() {
        return None;
    }
    let raw = pointer_x / viewport_width * 100.0;
    Some(raw.clamp(SPLIT_MIN_PERCENT, SPLIT_MAX_PERCENT))
}

/// Desktop-only divider between the scene and the menu pane.
#[derive(Clone, Debug)]
pub struct SplitResizeController {
    percent: f64,
    dragging: bool,
}

impl Default for SplitResizeController {
    fn default() -> Self {
        Self {
            percent: SPLIT_DEFAULT_PERCENT,
            dragging: false,
        }
    }
}

impl SplitResizeController {
    /// Begin a resize. Ignored outside the desktop layout; returns whether a
    /// drag actually started.
    pub fn on_drag_start(&mut self, class: DeviceClass) -> bool {
        self.dragging = class == DeviceClass::Desktop;
        self.dragging
    }

    /// Returns the new percentage while a drag is active.
    pub fn on_drag_move(&mut self, pointer_x: f64, viewport_width: f64) -> Option<f64> {
        if !self.dragging {
            return None;
        }
        self.percent = split_percent(pointer_x, viewport_width)?;
        Some(self.percent)
    }

    pub fn on_drag_end(&mut self) {
        self.dragging = false;
    }

    /// Leaving the desktop layout drops any in-flight drag.
    pub fn on_device_change(&mut self, class: DeviceClass) {
        if class != DeviceClass::Desktop {
            self.dragging = false;
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }
}
