use crate::constants::{
    FLOATING_UI_ID, LOADING_FADE_DELAY_MS, LOADING_FADE_MS, LOADING_ID, NOTICE_ID,
    NOTICE_VISIBLE_MS,
};
use crate::dom;
use std::cell::Cell;
use std::time::Duration;
use viewer_core::LoadingProgress;

thread_local! {
    static NOTICE_TIMER: Cell<Option<i32>> = const { Cell::new(None) };
}

#[inline]
fn set_class_state(id: &str, on: &str, off: &str) {
    if let Some(el) = dom::element_by_id(id) {
        let cl = el.class_list();
        _ = cl.add_1(on);
        _ = cl.remove_1(off);
    }
}

/// Show or hide the floating camera/share controls.
#[inline]
pub fn set_controls_visible(visible: bool) {
    if visible {
        set_class_state(FLOATING_UI_ID, "visible", "hidden");
    } else {
        set_class_state(FLOATING_UI_ID, "hidden", "visible");
    }
}

/// Flip the help tooltips on the floating controls. Returns the new state.
pub fn toggle_tooltips() -> bool {
    let Some(el) = dom::element_by_id(FLOATING_UI_ID) else {
        return false;
    };
    let show = el.get_attribute("data-tooltips").as_deref() != Some("1");
    _ = el.set_attribute("data-tooltips", if show { "1" } else { "0" });
    show
}

/// Brief user-visible message; replaces any notice still on screen.
pub fn show_notice(message: &str) {
    let Some(el) = dom::element_by_id(NOTICE_ID) else {
        log::info!("[notice] {}", message);
        return;
    };
    el.set_text_content(Some(message));
    _ = el.class_list().add_1("visible");
    NOTICE_TIMER.with(|slot| {
        if let Some(handle) = slot.take() {
            dom::clear_timeout(handle);
        }
        let handle = dom::set_timeout(Duration::from_millis(NOTICE_VISIBLE_MS as u64), || {
            NOTICE_TIMER.with(|s| s.set(None));
            if let Some(el) = dom::element_by_id(NOTICE_ID) {
                _ = el.class_list().remove_1("visible");
            }
        });
        slot.set(handle);
    });
}

/// Render loading progress. Returns false once the screen has started to
/// fade out and no further frames are needed.
pub fn update_loading(progress: &LoadingProgress) -> bool {
    let Some(el) = dom::element_by_id(LOADING_ID) else {
        return false;
    };
    _ = el.set_attribute("data-stage", progress.stage.caption());
    _ = el
        .style()
        .set_property("--progress", &format!("{}%", progress.percent));
    el.set_text_content(Some(&format!(
        "{} {}%",
        progress.stage.caption(),
        progress.display_percent()
    )));
    if !progress.is_complete() {
        return true;
    }
    dom::set_timeout(Duration::from_millis(LOADING_FADE_DELAY_MS as u64), || {
        set_class_state(LOADING_ID, "fading", "visible");
        dom::set_timeout(Duration::from_millis(LOADING_FADE_MS as u64), || {
            if let Some(el) = dom::element_by_id(LOADING_ID) {
                _ = el.set_attribute("hidden", "");
            }
        });
    });
    false
}
