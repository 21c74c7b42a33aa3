use super::{at_deadline, cancel_timeout, ShellWiring};
use crate::dom;
use instant::Instant;
use viewer_core::{DeviceClass, LayoutMode};
use web_sys as web;

pub fn wire_viewport(w: &ShellWiring) {
    let Some(window) = web::window() else {
        return;
    };
    apply_layout(w.device.borrow().class());

    let w_resize = w.clone();
    dom::add_listener(&window, "resize", move |_| {
        let changed = w_resize.device.borrow_mut().on_resize(&dom::device_signals());
        if let Some(class) = changed {
            on_class_change(&w_resize, class);
        }
    });

    let w_orient = w.clone();
    dom::add_listener(&window, "orientationchange", move |_| {
        let deadline = {
            let mut device = w_orient.device.borrow_mut();
            device.on_orientation_change(Instant::now());
            device.reclassify_at()
        };
        let Some(deadline) = deadline else {
            return;
        };
        // A newer rotation restarts the settle wait.
        cancel_timeout(&w_orient.orientation_timeout);
        let w_settled = w_orient.clone();
        at_deadline(deadline, &w_orient.orientation_timeout, move || {
            let changed = w_settled
                .device
                .borrow_mut()
                .poll(Instant::now(), &dom::device_signals());
            if let Some(class) = changed {
                on_class_change(&w_settled, class);
            }
        });
    });
}

pub fn teardown_viewport(w: &ShellWiring) {
    cancel_timeout(&w.orientation_timeout);
}

fn on_class_change(w: &ShellWiring, class: DeviceClass) {
    w.split.borrow_mut().on_device_change(class);
    w.strips.borrow_mut().cancel_all();
    apply_layout(class);
}

fn apply_layout(class: DeviceClass) {
    let device = match class {
        DeviceClass::Mobile => "mobile",
        DeviceClass::Tablet => "tablet",
        DeviceClass::Desktop => "desktop",
    };
    let layout = match LayoutMode::for_class(class) {
        LayoutMode::Overlay => "overlay",
        LayoutMode::Split => "split",
    };
    dom::set_body_attribute("data-device", device);
    dom::set_body_attribute("data-layout", layout);
}
