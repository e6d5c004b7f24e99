//! Host page contract: which elements and attributes the modal binds to.
//!
//! Every field has a default matching the stock markup, so a page only needs a
//! config block when it deviates:
//!
//! ```html
//! <script type="application/json" id="video-modal-config">
//!   { "triggerSelector": ".clip", "debug": true }
//! </script>
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "video-modal-config";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalConfig {
    /// Modal container; also the backdrop for outside-click dismissal.
    pub modal_id: String,
    pub title_id: String,
    pub frame_id: String,
    pub trigger_selector: String,
    /// Looked up inside each trigger.
    pub thumbnail_selector: String,
    pub id_attribute: String,
    pub title_attribute: String,
    /// Looked up inside the modal. `None` disables close-button binding.
    pub close_selector: Option<String>,
    pub debug: bool,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            modal_id: "videoModal".into(),
            title_id: "modalTitle".into(),
            frame_id: "videoIframe".into(),
            trigger_selector: ".video-button".into(),
            thumbnail_selector: ".video-thumbnail".into(),
            id_attribute: "data-video-id".into(),
            title_attribute: "data-video-title".into(),
            close_selector: Some(".close".into()),
            debug: false,
        }
    }
}

impl ModalConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}
