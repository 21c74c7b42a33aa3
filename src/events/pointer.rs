use super::ShellWiring;
use crate::constants::{CATEGORY_STRIP_ID, ITEM_STRIP_ID, SPLIT_CSS_VAR, SPLIT_DIVIDER_ID};
use crate::dom;
use glam::Vec2;
use viewer_core::{ScrollStrip, StripId};
use wasm_bindgen::JsCast;
use web_sys as web;

// ---------------- Pointer helpers ----------------
/// Client-space position of a mouse/pointer event or the first active touch.
#[inline]
pub fn event_client_pos(ev: &web::Event) -> Option<Vec2> {
    if let Some(touch_ev) = ev.dyn_ref::<web::TouchEvent>() {
        let touch = touch_ev.touches().get(0)?;
        return Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32));
    }
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| Vec2::new(m.client_x() as f32, m.client_y() as f32))
}

fn sync_indicators(el: &web::HtmlElement, strip: &ScrollStrip) {
    _ = el.set_attribute("data-scrollable", &strip.is_scrollable().to_string());
    _ = el.set_attribute("data-can-scroll-left", &strip.can_scroll_left().to_string());
    _ = el.set_attribute("data-can-scroll-right", &strip.can_scroll_right().to_string());
}

/// Measure a strip element and copy the clamped offset back to it.
pub fn sync_strip(w: &ShellWiring, id: StripId) {
    let element_id = match id {
        StripId::Categories => CATEGORY_STRIP_ID,
        StripId::Items => ITEM_STRIP_ID,
    };
    let Some(el) = dom::element_by_id(element_id) else {
        return;
    };
    let mut strips = w.strips.borrow_mut();
    let strip = strips.strip_mut(id);
    strip.set_extent(el.scroll_width() as f64, el.client_width() as f64);
    el.set_scroll_left(strip.offset().round() as i32);
    sync_indicators(&el, strip);
}

// ---------------- Scroll strips ----------------
pub fn wire_strips(w: &ShellWiring) {
    wire_strip(w, StripId::Categories, CATEGORY_STRIP_ID);
    wire_strip(w, StripId::Items, ITEM_STRIP_ID);
}

fn wire_strip(w: &ShellWiring, id: StripId, element_id: &str) {
    let Some(el) = dom::element_by_id(element_id) else {
        log::warn!("[strip] missing #{}", element_id);
        return;
    };

    for event in ["mousedown", "touchstart"] {
        let w = w.clone();
        let el_start = el.clone();
        dom::add_listener(&el, event, move |ev| {
            let Some(pos) = event_client_pos(&ev) else {
                return;
            };
            let mut strips = w.strips.borrow_mut();
            let strip = strips.strip_mut(id);
            strip.set_extent(el_start.scroll_width() as f64, el_start.client_width() as f64);
            strip.scroll_to(el_start.scroll_left() as f64);
            strip.on_drag_start(pos.x as f64);
        });
    }

    for event in ["mousemove", "touchmove"] {
        let w = w.clone();
        let el_move = el.clone();
        dom::add_listener(&el, event, move |ev| {
            let Some(pos) = event_client_pos(&ev) else {
                return;
            };
            let mut strips = w.strips.borrow_mut();
            let strip = strips.strip_mut(id);
            if let Some(offset) = strip.on_drag_move(pos.x as f64) {
                el_move.set_scroll_left(offset.round() as i32);
                sync_indicators(&el_move, strip);
            }
        });
    }

    for event in ["mouseup", "mouseleave", "touchend", "touchcancel"] {
        let w = w.clone();
        dom::add_listener(&el, event, move |_| {
            w.strips.borrow_mut().on_drag_end(id);
        });
    }

    // Native scrolling (wheel, keyboard) keeps the model in sync.
    let w_scroll = w.clone();
    let el_scroll = el.clone();
    dom::add_listener(&el, "scroll", move |_| {
        let mut strips = w_scroll.strips.borrow_mut();
        let strip = strips.strip_mut(id);
        if !strip.is_dragging() {
            strip.scroll_to(el_scroll.scroll_left() as f64);
        }
        sync_indicators(&el_scroll, strip);
    });
}

// ---------------- Split divider ----------------
pub fn wire_split_divider(w: &ShellWiring) {
    let Some(divider) = dom::element_by_id(SPLIT_DIVIDER_ID) else {
        log::warn!("[split] missing #{}", SPLIT_DIVIDER_ID);
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    dom::set_body_css_var(SPLIT_CSS_VAR, &format!("{}%", w.split.borrow().percent()));

    let w_down = w.clone();
    let divider_down = divider.clone();
    dom::add_listener(&divider, "pointerdown", move |ev| {
        let class = w_down.device.borrow().class();
        if !w_down.split.borrow_mut().on_drag_start(class) {
            return;
        }
        if let Some(pev) = ev.dyn_ref::<web::PointerEvent>() {
            _ = divider_down.set_pointer_capture(pev.pointer_id());
        }
        ev.prevent_default();
        log::debug!("[split] begin resize");
    });

    let w_move = w.clone();
    dom::add_listener(&window, "pointermove", move |ev| {
        let Some(pos) = event_client_pos(&ev) else {
            return;
        };
        let percent = w_move
            .split
            .borrow_mut()
            .on_drag_move(pos.x as f64, dom::viewport_width());
        if let Some(p) = percent {
            dom::set_body_css_var(SPLIT_CSS_VAR, &format!("{:.2}%", p));
        }
    });

    for event in ["pointerup", "pointercancel"] {
        let w_up = w.clone();
        dom::add_listener(&window, event, move |_| {
            w_up.split.borrow_mut().on_drag_end();
        });
    }
}
