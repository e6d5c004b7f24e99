// URL helpers and console logging.

use std::cell::Cell;
use wasm_bindgen::JsValue;

const THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";
const EMBED_BASE: &str = "https://www.youtube.com/embed";

/// High quality thumbnail for a YouTube video id.
pub fn thumbnail_url(id: &str) -> String {
    format!("{THUMBNAIL_BASE}/{id}/hqdefault.jpg")
}

/// Embed URL that autoplays and suppresses related videos from other channels.
pub fn embed_url(id: &str) -> String {
    format!("{EMBED_BASE}/{id}?autoplay=1&rel=0")
}

/// CSS `background-image` value pointing at the thumbnail.
pub fn thumbnail_background(id: &str) -> String {
    format!("url('{}')", thumbnail_url(id))
}

thread_local! {
    static DEBUG: Cell<bool> = const { Cell::new(false) };
}

pub fn set_debug(enabled: bool) {
    DEBUG.with(|d| d.set(enabled));
}

pub fn debug_enabled() -> bool {
    DEBUG.with(|d| d.get())
}

/// Debug log, silent unless enabled through the config.
pub fn clog(msg: &str) {
    if debug_enabled() {
        web_sys::console::log_1(&JsValue::from_str(msg));
    }
}

pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

pub fn cerror(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_url_is_bit_exact() {
        assert_eq!(
            thumbnail_url("dQw4w9WgXcQ"),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
    }

    #[test]
    fn embed_url_is_bit_exact() {
        assert_eq!(
            embed_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&rel=0"
        );
    }

    #[test]
    fn urls_are_deterministic() {
        for id in ["", "x", "has space", "dQw4w9WgXcQ"] {
            assert_eq!(thumbnail_url(id), thumbnail_url(id));
            assert_eq!(embed_url(id), embed_url(id));
        }
    }

    #[test]
    fn malformed_id_is_passed_through() {
        assert_eq!(embed_url("a/b"), "https://www.youtube.com/embed/a/b?autoplay=1&rel=0");
    }

    #[test]
    fn background_wraps_thumbnail_in_css_url() {
        assert_eq!(
            thumbnail_background("abc"),
            "url('https://img.youtube.com/vi/abc/hqdefault.jpg')"
        );
    }

    #[test]
    fn debug_flag_toggles() {
        assert!(!debug_enabled());
        set_debug(true);
        assert!(debug_enabled());
        set_debug(false);
        assert!(!debug_enabled());
    }
}
