//! Video modal for static pages: trigger buttons open a YouTube embed in a
//! modal dialog; clicking the backdrop stops playback and hides it.

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod model;
pub mod session;
pub mod util;

pub use config::ModalConfig;
pub use error::{ModalError, Result};
pub use model::{ModalState, VideoRef};
pub use session::VideoModal;

use std::cell::RefCell;
use util::{cerror, cwarn};
use wasm_bindgen::prelude::*;
use web_sys::Window;

thread_local! {
    static SESSION: RefCell<Option<VideoModal>> = const { RefCell::new(None) };
}

impl From<ModalError> for JsValue {
    fn from(err: ModalError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn config_or_default(parsed: Result<ModalConfig>) -> ModalConfig {
    parsed.unwrap_or_else(|e| {
        cwarn(&format!("ignoring video modal config: {e}"));
        ModalConfig::default()
    })
}

/// Builds a session and makes it the active one. The previous session, if
/// any, is dropped and its listeners removed.
pub fn install(config: Option<ModalConfig>) -> Result<()> {
    let document = dom::document()?;
    let config = match config {
        Some(c) => c,
        None => config_or_default(dom::read_config(&document)),
    };
    let session = VideoModal::attach(&document, config)?;
    let previous = SESSION.with(|s| s.borrow_mut().replace(session));
    drop(previous);
    Ok(())
}

/// Drops the active session, if any.
pub fn teardown() -> bool {
    let previous = SESSION.with(|s| s.borrow_mut().take());
    previous.is_some()
}

/// Runs `f` against the active session, if there is one.
pub fn with_active<R>(f: impl FnOnce(&VideoModal) -> R) -> Option<R> {
    SESSION.with(|s| s.borrow().as_ref().map(f))
}

fn with_session(f: impl FnOnce(&VideoModal)) {
    if with_active(f).is_none() {
        cwarn("video modal is not initialized");
    }
}

fn install_or_report() {
    if let Err(e) = install(None) {
        cerror(&format!("video modal disabled: {e}"));
    }
}

/// Publishes the exports as `window` properties so inline handlers such as
/// `onclick="closeVideoModal()"` resolve. The closures live for the page.
pub fn expose_globals(window: &Window) -> Result<()> {
    let globals: [(&str, JsValue); 4] = [
        (
            "openVideoModal",
            Closure::<dyn Fn(String, String)>::new(open_video_modal).into_js_value(),
        ),
        (
            "closeVideoModal",
            Closure::<dyn Fn()>::new(close_video_modal).into_js_value(),
        ),
        (
            "initVideoModal",
            Closure::<dyn Fn(Option<String>) -> std::result::Result<(), JsValue>>::new(
                init_video_modal,
            )
            .into_js_value(),
        ),
        (
            "destroyVideoModal",
            Closure::<dyn Fn() -> bool>::new(destroy_video_modal).into_js_value(),
        ),
    ];
    for (name, func) in globals {
        js_sys::Reflect::set(window, &JsValue::from_str(name), &func)?;
    }
    Ok(())
}

/// Installs once the document structure is available.
pub fn start() {
    let located = dom::window().and_then(|w| {
        let document = w.document().ok_or(ModalError::NoDocument)?;
        Ok((w, document))
    });
    let (window, document) = match located {
        Ok(pair) => pair,
        Err(e) => {
            cerror(&format!("video modal disabled: {e}"));
            return;
        }
    };
    if let Err(e) = expose_globals(&window) {
        cwarn(&format!("video modal globals unavailable: {e}"));
    }
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(install_or_report);
        if let Err(e) =
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            cerror(&format!("video modal disabled: {}", error::js_message(&e)));
        }
    } else {
        install_or_report();
    }
}

#[wasm_bindgen(js_name = openVideoModal)]
pub fn open_video_modal(video_id: String, title: String) {
    with_session(|s| s.open(VideoRef::new(video_id, title)));
}

#[wasm_bindgen(js_name = closeVideoModal)]
pub fn close_video_modal() {
    with_session(|s| s.close());
}

/// Re-initializes with an explicit JSON config, or the page's config block
/// when none is given. Malformed JSON falls back to the defaults.
#[wasm_bindgen(js_name = initVideoModal)]
pub fn init_video_modal(config_json: Option<String>) -> std::result::Result<(), JsValue> {
    let config = config_json
        .as_deref()
        .map(|raw| config_or_default(ModalConfig::from_json(raw)));
    install(config)?;
    Ok(())
}

#[wasm_bindgen(js_name = destroyVideoModal)]
pub fn destroy_video_modal() -> bool {
    teardown()
}
