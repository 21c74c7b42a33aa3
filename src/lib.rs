#![cfg(target_arch = "wasm32")]
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use viewer_core::{
    apply_view_action, ActivityTimer, Catalog, DeviceWatcher, DragScrollController,
    SelectionController, Snapshot, SplitResizeController, Store, ViewAction,
};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod markup;
mod menu_view;
mod notify;
mod overlay;
mod share;
mod storage;

use camera::JsOrbitControls;
use constants::{
    HELP_BUTTON_ID, RESET_VIEW_BUTTON_ID, SHARE_BUTTON_ID,
    SHOWCASE_VIEW_BUTTON_ID,
};
use events::ShellWiring;

thread_local! {
    static SHELL: RefCell<Option<ShellWiring>> = const { RefCell::new(None) };
}

fn with_shell<R>(f: impl FnOnce(&ShellWiring) -> R) -> Option<R> {
    // Cloned out so JS reached from `f` can call back into these exports.
    let shell = SHELL.with(|s| s.borrow().clone())?;
    Some(f(&shell))
}

fn build_shell() -> ShellWiring {
    let mut store = Store::open(
        Box::new(storage::LocalStorage::open()),
        Snapshot::standard(),
    );
    store.subscribe(|mutation, _| notify::record(mutation));
    notify::apply_appearance(store.snapshot());

    let signals = dom::device_signals();
    let device = DeviceWatcher::new(&signals);
    log::info!(
        "[device] {:?} ({}x{}, touch={})",
        device.class(),
        signals.viewport_width,
        signals.viewport_height,
        signals.has_touch
    );

    ShellWiring {
        store: Rc::new(RefCell::new(store)),
        selection: Rc::new(RefCell::new(SelectionController::new(Catalog::standard()))),
        device: Rc::new(RefCell::new(device)),
        activity: Rc::new(RefCell::new(ActivityTimer::default())),
        activity_timeout: Rc::new(Cell::new(None)),
        orientation_timeout: Rc::new(Cell::new(None)),
        strips: Rc::new(RefCell::new(DragScrollController::default())),
        split: Rc::new(RefCell::new(SplitResizeController::default())),
        orbit: Rc::new(RefCell::new(None)),
    }
}

fn wire_floating_controls(w: &ShellWiring) {
    for (id, action) in [
        (RESET_VIEW_BUTTON_ID, ViewAction::Reset),
        (SHOWCASE_VIEW_BUTTON_ID, ViewAction::Showcase),
    ] {
        let orbit = w.orbit.clone();
        dom::add_click_listener(id, move || match orbit.borrow_mut().as_mut() {
            Some(controls) => apply_view_action(controls, action),
            None => log::warn!("[camera] no orbit controls registered"),
        });
    }
    dom::add_click_listener(SHARE_BUTTON_ID, share::share_current_page);
    dom::add_click_listener(HELP_BUTTON_ID, || {
        let shown = overlay::toggle_tooltips();
        log::debug!("[help] tooltips {}", if shown { "on" } else { "off" });
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("viewer-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    document
        .get_element_by_id(constants::SCENE_REGION_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::SCENE_REGION_ID))?;

    let shell = build_shell();
    events::wire_viewport(&shell);
    events::wire_menus(&shell);
    events::wire_strips(&shell);
    events::wire_split_divider(&shell);
    wire_floating_controls(&shell);

    // Controls start their visibility countdown once the scene is on screen.
    let shell_loaded = shell.clone();
    frame::start_loading_loop(move || events::wire_activity(&shell_loaded));

    SHELL.with(|s| *s.borrow_mut() = Some(shell));
    Ok(())
}

/// Called by the renderer once its orbit controls exist.
#[wasm_bindgen]
pub fn register_orbit_controls(handle: JsValue) {
    let registered = with_shell(|w| {
        *w.orbit.borrow_mut() = Some(JsOrbitControls::new(handle));
    });
    if registered.is_none() {
        log::warn!("[camera] controls registered before the shell started");
    }
}

/// Subscribe the renderer to `(cubeColor, environmentPreset)` changes. The
/// callback fires immediately with the current values.
#[wasm_bindgen]
pub fn on_appearance_change(callback: js_sys::Function) {
    if with_shell(|w| notify::add_appearance_listener(w, callback)).is_none() {
        log::warn!("[store] appearance listener registered before the shell started");
    }
}

/// Subscribe the renderer to `(key, enabled)` toggle changes such as
/// `auto-rotate`. Fires once per known setting right away.
#[wasm_bindgen]
pub fn on_setting_change(callback: js_sys::Function) {
    if with_shell(|w| notify::add_setting_listener(w, callback)).is_none() {
        log::warn!("[store] setting listener registered before the shell started");
    }
}

/// Persisted toggle state for `key` (e.g. `auto-rotate`, `show-grid`).
#[wasm_bindgen]
pub fn setting_enabled(key: &str) -> bool {
    with_shell(|w| w.store.borrow().get_toggle_state(key)).unwrap_or(false)
}

/// Cancel pending timers and drags before the page view goes away.
#[wasm_bindgen]
pub fn teardown() {
    with_shell(|w| {
        events::teardown_activity(w);
        events::teardown_viewport(w);
        w.strips.borrow_mut().cancel_all();
        w.split.borrow_mut().on_drag_end();
        log::info!("[shell] torn down");
    });
}
