use super::{at_deadline, cancel_timeout, ShellWiring};
use crate::constants::SCENE_REGION_ID;
use crate::{dom, overlay};
use instant::Instant;
use viewer_core::ActivityEvent;

/// Show the floating controls on any input over the scene and hide them after
/// the quiet window.
pub fn wire_activity(w: &ShellWiring) {
    let Some(region) = dom::element_by_id(SCENE_REGION_ID) else {
        log::warn!("[activity] missing #{}", SCENE_REGION_ID);
        return;
    };
    for kind in ActivityEvent::ALL {
        let w = w.clone();
        dom::add_listener(&region, kind.dom_name(), move |_| {
            w.activity.borrow_mut().record_activity(Instant::now());
            overlay::set_controls_visible(true);
            schedule_hide(&w);
        });
    }
    w.activity.borrow_mut().on_mount(Instant::now());
    overlay::set_controls_visible(true);
    schedule_hide(w);
}

fn schedule_hide(w: &ShellWiring) {
    cancel_timeout(&w.activity_timeout);
    let Some(deadline) = w.activity.borrow().hide_deadline() else {
        return;
    };
    let w2 = w.clone();
    at_deadline(deadline, &w.activity_timeout, move || {
        let changed = w2.activity.borrow_mut().poll(Instant::now());
        if changed {
            overlay::set_controls_visible(false);
        }
    });
}

pub fn teardown_activity(w: &ShellWiring) {
    cancel_timeout(&w.activity_timeout);
    w.activity.borrow_mut().teardown();
}
