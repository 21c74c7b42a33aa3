//! Store changes delivered to the page and to renderer callbacks.
//!
//! The store observer only records into a queue. Event handlers call
//! [`flush`] after their `RefCell` borrows are dropped, so JS callbacks can
//! read the store or register further callbacks.

use crate::constants::CUBE_COLOR_CSS_VAR;
use crate::dom;
use crate::events::ShellWiring;
use js_sys::Function;
use std::cell::RefCell;
use std::thread::LocalKey;
use viewer_core::{Mutation, PendingChanges, Snapshot};
use wasm_bindgen::JsValue;

thread_local! {
    static PENDING: RefCell<PendingChanges> = RefCell::new(PendingChanges::default());
    static APPEARANCE_LISTENERS: RefCell<Vec<Function>> = const { RefCell::new(Vec::new()) };
    static SETTING_LISTENERS: RefCell<Vec<Function>> = const { RefCell::new(Vec::new()) };
}

/// Store observer. Must not touch the store or call into JS.
pub fn record(mutation: &Mutation) {
    PENDING.with(|p| p.borrow_mut().record(mutation));
}

/// Reflect appearance on `<body>` for CSS.
pub fn apply_appearance(snapshot: &Snapshot) {
    dom::set_body_css_var(CUBE_COLOR_CSS_VAR, &snapshot.cube_color);
    dom::set_body_attribute("data-environment", &snapshot.environment_preset);
}

fn call_each(listeners: &'static LocalKey<RefCell<Vec<Function>>>, a: &JsValue, b: &JsValue) {
    // Cloned so a callback may register another listener.
    let listeners = listeners.with(|l| l.borrow().clone());
    for cb in &listeners {
        if let Err(e) = cb.call2(&JsValue::NULL, a, b) {
            log::warn!("[store] listener threw: {:?}", e);
        }
    }
}

fn call_appearance(cb: &Function, cube_color: &str, environment: &str) {
    let color = JsValue::from_str(cube_color);
    let environment = JsValue::from_str(environment);
    if let Err(e) = cb.call2(&JsValue::NULL, &color, &environment) {
        log::warn!("[store] appearance listener threw: {:?}", e);
    }
}

/// Deliver queued changes. Callers must not hold a borrow of `w.store`.
pub fn flush(w: &ShellWiring) {
    let changes = PENDING.with(|p| p.borrow_mut().take());
    if changes.is_empty() {
        return;
    }
    if changes.appearance_changed() {
        let (color, environment) = {
            let store = w.store.borrow();
            apply_appearance(store.snapshot());
            (store.cube_color().to_string(), store.environment_preset().to_string())
        };
        call_each(
            &APPEARANCE_LISTENERS,
            &JsValue::from_str(&color),
            &JsValue::from_str(&environment),
        );
    }
    for (key, value) in changes.toggles() {
        log::debug!("[store] {} -> {}", key, value);
        call_each(&SETTING_LISTENERS, &JsValue::from_str(key), &JsValue::from_bool(*value));
    }
}

/// Register for `(cubeColor, environmentPreset)`; fires once immediately.
pub fn add_appearance_listener(w: &ShellWiring, callback: Function) {
    let (color, environment) = {
        let store = w.store.borrow();
        (store.cube_color().to_string(), store.environment_preset().to_string())
    };
    APPEARANCE_LISTENERS.with(|l| l.borrow_mut().push(callback.clone()));
    call_appearance(&callback, &color, &environment);
}

/// Register for `(key, enabled)`; fires once per catalog setting immediately.
pub fn add_setting_listener(w: &ShellWiring, callback: Function) {
    let current: Vec<(&'static str, bool)> = {
        let store = w.store.borrow();
        let selection = w.selection.borrow();
        selection
            .catalog()
            .setting_keys()
            .map(|key| (key, store.get_toggle_state(key)))
            .collect()
    };
    SETTING_LISTENERS.with(|l| l.borrow_mut().push(callback.clone()));
    for (key, value) in current {
        if let Err(e) = callback.call2(&JsValue::NULL, &JsValue::from_str(key), &JsValue::from_bool(value)) {
            log::warn!("[store] setting listener threw: {:?}", e);
        }
    }
}
