use super::pointer::sync_strip;
use super::ShellWiring;
use crate::constants::{
    CATEGORY_STRIP_ID, DATA_CATEGORY, DATA_ITEM, DESKTOP_MENU_ID, ITEM_STRIP_ID,
};
use crate::{dom, menu_view, notify};
use viewer_core::StripId;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_menus(w: &ShellWiring) {
    // Strip category taps (mobile/tablet)
    if let Some(strip) = dom::element_by_id(CATEGORY_STRIP_ID) {
        let w = w.clone();
        dom::add_listener(&strip, "click", move |ev| {
            let Some(button) = dom::closest_with_attribute(&ev, DATA_CATEGORY) else {
                return;
            };
            let Some(id) = button.get_attribute(DATA_CATEGORY) else {
                return;
            };
            w.selection
                .borrow_mut()
                .on_main_option_click(&mut w.store.borrow_mut(), &id);
            refresh(&w);
            center_active_category(&w);
            notify::flush(&w);
        });
    }

    // Submenu item taps (mobile/tablet)
    if let Some(strip) = dom::element_by_id(ITEM_STRIP_ID) {
        let w = w.clone();
        dom::add_listener(&strip, "click", move |ev| {
            if activate_item(&w, &ev) {
                refresh(&w);
                notify::flush(&w);
            }
        });
    }

    // Desktop accordion: item clicks first, then section headers
    if let Some(menu) = dom::element_by_id(DESKTOP_MENU_ID) {
        let w = w.clone();
        dom::add_listener(&menu, "click", move |ev| {
            if !activate_item(&w, &ev) {
                let Some(header) = dom::closest_with_attribute(&ev, DATA_CATEGORY) else {
                    return;
                };
                if let Some(id) = header.get_attribute(DATA_CATEGORY) {
                    w.selection.borrow_mut().toggle_expanded(&id);
                }
            }
            refresh(&w);
            notify::flush(&w);
        });
    }

    refresh(w);
}

fn activate_item(w: &ShellWiring, ev: &web::Event) -> bool {
    let Some(button) = dom::closest_with_attribute(ev, DATA_ITEM) else {
        return false;
    };
    let (Some(category), Some(label)) = (
        button.get_attribute(DATA_CATEGORY),
        button.get_attribute(DATA_ITEM),
    ) else {
        return false;
    };
    let selection = w.selection.borrow();
    let Some(item) = selection.catalog().item(&category, &label) else {
        log::warn!("[menu] unknown item {}/{}", category, label);
        return false;
    };
    selection.on_item_activate(&mut w.store.borrow_mut(), &category, item);
    true
}

fn refresh(w: &ShellWiring) {
    menu_view::render(&w.selection.borrow(), &w.store.borrow());
    sync_strip(w, StripId::Categories);
    sync_strip(w, StripId::Items);
}

fn center_active_category(w: &ShellWiring) {
    let Some(active) = w.selection.borrow().active_category() else {
        return;
    };
    let Some(strip) = dom::element_by_id(CATEGORY_STRIP_ID) else {
        return;
    };
    let selector = format!("[{}='{}']", DATA_CATEGORY, active);
    let Some(button) = strip
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|b| b.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let mut strips = w.strips.borrow_mut();
    let strip_model = strips.strip_mut(StripId::Categories);
    strip_model.center_on(button.offset_left() as f64, button.offset_width() as f64);
    strip.set_scroll_left(strip_model.offset().round() as i32);
}
