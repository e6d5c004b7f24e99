//! web-sys side of the modal: element lookup, rendering and event wiring.

pub mod listener;
pub mod modal;
pub mod triggers;

pub use listener::Listener;
pub use modal::DomModal;

use crate::config::{CONFIG_ELEMENT_ID, ModalConfig};
use crate::error::{ModalError, Result};
use web_sys::{Document, Window};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(ModalError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(ModalError::NoDocument)
}

/// Config from the page's JSON block, or the defaults when there is none.
pub fn read_config(document: &Document) -> Result<ModalConfig> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(raw) => ModalConfig::from_json(&raw),
        None => Ok(ModalConfig::default()),
    }
}
