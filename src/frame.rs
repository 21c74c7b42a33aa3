use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::LoadingProgress;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &FrameCallback) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive the loading screen from requestAnimationFrame until it completes,
/// then call `on_complete` once.
pub fn start_loading_loop(on_complete: impl FnOnce() + 'static) {
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let mut progress = LoadingProgress::default();
    let mut on_complete = Some(on_complete);
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        progress = progress.step();
        if overlay::update_loading(&progress) {
            request_frame(&tick_clone);
            return;
        }
        if let Some(done) = on_complete.take() {
            log::info!("[loading] complete");
            done();
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
