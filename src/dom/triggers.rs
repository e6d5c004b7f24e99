use crate::config::ModalConfig;
use crate::error::{ModalError, Result, js_message};
use crate::model::VideoRef;
use crate::util::{clog, thumbnail_background};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// Every element matching `selector` at call time.
pub fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| ModalError::InvalidSelector {
            selector: selector.to_string(),
            message: js_message(&e),
        })?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// First match for `selector` inside `scope`. An invalid selector counts as
/// no match since every caller treats the element as optional.
pub fn select_within(scope: &Element, selector: &str) -> Option<Element> {
    scope.query_selector(selector).ok().flatten()
}

fn attribute(el: &Element, name: &str) -> Result<String> {
    el.get_attribute(name)
        .ok_or_else(|| ModalError::MissingAttribute {
            attribute: name.to_string(),
        })
}

/// Reads the video reference carried by a trigger element.
pub fn read_video(trigger: &Element, config: &ModalConfig) -> Result<VideoRef> {
    let id = attribute(trigger, &config.id_attribute)?;
    let title = attribute(trigger, &config.title_attribute)?;
    Ok(VideoRef { id, title })
}

/// Points the trigger's thumbnail at the video's preview image, if it has one.
pub fn apply_thumbnail(trigger: &Element, video: &VideoRef, config: &ModalConfig) -> bool {
    let Some(thumb) = select_within(trigger, &config.thumbnail_selector)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };
    let applied = thumb
        .style()
        .set_property("background-image", &thumbnail_background(&video.id))
        .is_ok();
    if applied {
        clog(&format!("thumbnail set for {}", video.id));
    }
    applied
}
