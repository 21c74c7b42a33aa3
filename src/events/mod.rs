pub mod activity;
pub mod menu;
pub mod pointer;
pub mod viewport;

use crate::camera::JsOrbitControls;
use crate::dom;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use viewer_core::{
    time_until, ActivityTimer, DeviceWatcher, DragScrollController, SelectionController,
    SplitResizeController, Store,
};

pub use activity::{teardown_activity, wire_activity};
pub use menu::wire_menus;
pub use pointer::{wire_split_divider, wire_strips};
pub use viewport::{teardown_viewport, wire_viewport};

/// Shared handles captured by every event closure.
#[derive(Clone)]
pub struct ShellWiring {
    pub store: Rc<RefCell<Store>>,
    pub selection: Rc<RefCell<SelectionController>>,
    pub device: Rc<RefCell<DeviceWatcher>>,
    pub activity: Rc<RefCell<ActivityTimer>>,
    pub activity_timeout: TimeoutSlot,
    pub orientation_timeout: TimeoutSlot,
    pub strips: Rc<RefCell<DragScrollController>>,
    pub split: Rc<RefCell<SplitResizeController>>,
    pub orbit: Rc<RefCell<Option<JsOrbitControls>>>,
}

/// Timer handle slot shared between a scheduler and its teardown.
pub type TimeoutSlot = Rc<Cell<Option<i32>>>;

/// Cancel whatever timer `slot` currently holds.
pub(crate) fn cancel_timeout(slot: &TimeoutSlot) {
    if let Some(handle) = slot.take() {
        dom::clear_timeout(handle);
    }
}

/// Run `callback` once `deadline` has passed. Timers may fire slightly
/// before `Instant` agrees they are due, so an early wake-up re-arms. `slot`
/// always holds the live handle, so [`cancel_timeout`] stops a re-armed wait.
pub(crate) fn at_deadline(deadline: Instant, slot: &TimeoutSlot, callback: impl FnOnce() + 'static) {
    let Some(wait) = time_until(deadline, Instant::now()) else {
        slot.set(None);
        callback();
        return;
    };
    let rearm_slot = slot.clone();
    let handle = dom::set_timeout(wait, move || {
        at_deadline(deadline, &rearm_slot, callback);
    });
    slot.set(handle);
}
