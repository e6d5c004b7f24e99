use crate::config::ModalConfig;
use crate::controller::ModalView;
use crate::error::{ModalError, Result};
use crate::model::ModalState;
use crate::util::embed_url;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlIFrameElement};

/// The host page's modal markup.
pub struct DomModal {
    backdrop: HtmlElement,
    title: Element,
    frame: HtmlIFrameElement,
    body: HtmlElement,
}

fn require(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ModalError::MissingElement { id: id.to_string() })
}

fn require_as<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T> {
    require(document, id)?
        .dyn_into::<T>()
        .map_err(|_| ModalError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}

impl DomModal {
    pub fn locate(document: &Document, config: &ModalConfig) -> Result<Self> {
        let backdrop = require_as::<HtmlElement>(document, &config.modal_id, "HTML element")?;
        let title = require(document, &config.title_id)?;
        let frame = require_as::<HtmlIFrameElement>(document, &config.frame_id, "<iframe>")?;
        let body = document.body().ok_or(ModalError::NoBody)?;
        Ok(Self {
            backdrop,
            title,
            frame,
            body,
        })
    }

    pub fn backdrop(&self) -> &HtmlElement {
        &self.backdrop
    }

    /// Identity check, not containment: a click inside the content box has
    /// the content (or a descendant) as its target.
    pub fn is_backdrop(&self, target: Option<&EventTarget>) -> bool {
        let backdrop: &JsValue = self.backdrop.as_ref();
        target.is_some_and(|t| AsRef::<JsValue>::as_ref(t) == backdrop)
    }
}

impl ModalView for DomModal {
    fn render(&self, state: &ModalState) {
        let style = self.backdrop.style();
        let body_style = self.body.style();
        match state.current() {
            Some(video) if state.is_open() => {
                self.title.set_text_content(Some(&video.title));
                self.frame.set_src(&embed_url(&video.id));
                let _ = style.set_property("display", "block");
                let _ = body_style.set_property("overflow", "hidden");
            }
            _ => {
                // Clearing the source is what stops playback.
                self.frame.set_src("");
                let _ = style.set_property("display", "none");
                let _ = body_style.set_property("overflow", "auto");
            }
        }
    }
}
