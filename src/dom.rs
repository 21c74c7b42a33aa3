use std::time::Duration;
use viewer_core::DeviceSignals;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element_by_id(id: &str) -> Option<web::HtmlElement> {
    window_document()?
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlElement>()
        .ok()
}

/// Attach a long-lived listener; the closure is leaked like every other
/// page-lifetime handler in this crate.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn add_click_listener(element_id: &str, mut handler: impl FnMut() + 'static) {
    match element_by_id(element_id) {
        Some(el) => add_listener(&el, "click", move |_| handler()),
        None => log::warn!("[dom] missing #{}", element_id),
    }
}

/// One-shot timer. Returns the handle for `clear_timeout`.
pub fn set_timeout(delay: Duration, callback: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let closure = Closure::once_into_js(callback);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref(),
            delay.as_millis().min(i32::MAX as u128) as i32,
        )
        .ok()
}

#[inline]
pub fn clear_timeout(handle: i32) {
    if let Some(w) = web::window() {
        w.clear_timeout_with_handle(handle);
    }
}

fn js_number(value: Result<JsValue, JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

/// Current viewport and input-capability signals for the device classifier.
pub fn device_signals() -> DeviceSignals {
    let Some(window) = web::window() else {
        return DeviceSignals::default();
    };
    let navigator = window.navigator();
    let has_touch = js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart"))
        .unwrap_or(false)
        || navigator.max_touch_points() > 0;
    DeviceSignals {
        viewport_width: js_number(window.inner_width()),
        viewport_height: js_number(window.inner_height()),
        user_agent: navigator.user_agent().unwrap_or_default(),
        has_touch,
    }
}

#[inline]
pub fn viewport_width() -> f64 {
    web::window().map_or(0.0, |w| js_number(w.inner_width()))
}

#[inline]
pub fn set_body_css_var(name: &str, value: &str) {
    if let Some(body) = window_document().and_then(|d| d.body()) {
        _ = body.style().set_property(name, value);
    }
}

#[inline]
pub fn set_body_attribute(name: &str, value: &str) {
    if let Some(body) = window_document().and_then(|d| d.body()) {
        _ = body.set_attribute(name, value);
    }
}

/// Nearest ancestor (or self) of the event target carrying `attribute`.
pub fn closest_with_attribute(ev: &web::Event, attribute: &str) -> Option<web::Element> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    target.closest(&format!("[{}]", attribute)).ok().flatten()
}
