use crate::constants::{SHARE_TEXT, SHARE_TITLE};
use crate::overlay;
use js_sys::{Function, Object, Promise, Reflect};
use viewer_core::{share_or_copy, ShareError, ShareHost, ShareRequest};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// navigator.share / navigator.clipboard, looked up dynamically so missing
/// APIs degrade to `ShareError::Unsupported` instead of throwing.
pub struct WebShareHost {
    navigator: web::Navigator,
}

fn rejected(e: JsValue) -> ShareError {
    ShareError::Rejected(format!("{:?}", e))
}

fn method(target: &JsValue, name: &str) -> Result<Function, ShareError> {
    Reflect::get(target, &JsValue::from_str(name))
        .map_err(rejected)?
        .dyn_into::<Function>()
        .map_err(|_| ShareError::Unsupported)
}

async fn await_promise(value: JsValue) -> Result<(), ShareError> {
    let promise = value
        .dyn_into::<Promise>()
        .map_err(|_| ShareError::Unsupported)?;
    JsFuture::from(promise).await.map(|_| ()).map_err(rejected)
}

impl ShareHost for WebShareHost {
    async fn native_share(&self, request: &ShareRequest) -> Result<(), ShareError> {
        let share = method(&self.navigator, "share")?;
        let data = Object::new();
        for (key, value) in [
            ("url", &request.url),
            ("title", &request.title),
            ("text", &request.text),
        ] {
            Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value))
                .map_err(rejected)?;
        }
        await_promise(share.call1(&self.navigator, &data).map_err(rejected)?).await
    }

    async fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError> {
        let clipboard =
            Reflect::get(&self.navigator, &JsValue::from_str("clipboard")).map_err(rejected)?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(ShareError::Unsupported);
        }
        let write_text = method(&clipboard, "writeText")?;
        await_promise(
            write_text
                .call1(&clipboard, &JsValue::from_str(text))
                .map_err(rejected)?,
        )
        .await
    }

    fn notify(&self, message: &str) {
        overlay::show_notice(message);
    }
}

/// Share the current page; completes in the background.
pub fn share_current_page() {
    let Some(window) = web::window() else {
        return;
    };
    let url = window.location().href().unwrap_or_default();
    let host = WebShareHost {
        navigator: window.navigator(),
    };
    let request = ShareRequest {
        url,
        title: SHARE_TITLE.to_string(),
        text: SHARE_TEXT.to_string(),
    };
    spawn_local(async move {
        let outcome = share_or_copy(&host, &request).await;
        log::info!("[share] {:?}", outcome);
    });
}
