use crate::config::ModalConfig;
use crate::controller::ModalController;
use crate::dom::{DomModal, Listener, triggers};
use crate::error::Result;
use crate::model::VideoRef;
use crate::util::{clog, cwarn, set_debug};
use std::rc::Rc;
use web_sys::{Document, Event};

/// One initialization of the modal on a page.
///
/// Owns every listener it registers. Dropping the session closes the modal,
/// then unbinds the triggers, the close button and the outside-click observer.
pub struct VideoModal {
    controller: Rc<ModalController<DomModal>>,
    listeners: Vec<Listener>,
    bound_triggers: usize,
    config: ModalConfig,
}

impl VideoModal {
    /// Locates the modal markup and binds every trigger present right now.
    /// Triggers inserted later are not picked up.
    pub fn attach(document: &Document, config: ModalConfig) -> Result<Self> {
        set_debug(config.debug);
        let modal = DomModal::locate(document, &config)?;
        let controller = Rc::new(ModalController::new(modal));
        let mut listeners = Vec::new();

        // Outside-click dismissal
        {
            let controller = controller.clone();
            listeners.push(Listener::new(document, "click", move |e: Event| {
                let target = e.target();
                let hit = controller.view().is_backdrop(target.as_ref());
                controller.dismiss_if_backdrop(hit);
            })?);
        }

        if let Some(selector) = &config.close_selector {
            let backdrop = controller.view().backdrop();
            if let Some(button) = triggers::select_within(backdrop, selector) {
                let controller = controller.clone();
                listeners.push(Listener::new(&button, "click", move |_e: Event| {
                    controller.close();
                })?);
            }
        }

        let mut bound_triggers = 0;
        for trigger in triggers::select_all(document, &config.trigger_selector)? {
            let video = match triggers::read_video(&trigger, &config) {
                Ok(v) => v,
                Err(e) => {
                    cwarn(&format!("skipping video trigger: {e}"));
                    continue;
                }
            };
            triggers::apply_thumbnail(&trigger, &video, &config);
            let controller = controller.clone();
            listeners.push(Listener::new(&trigger, "click", move |_e: Event| {
                controller.open(video.clone());
            })?);
            bound_triggers += 1;
        }
        clog(&format!("video modal ready, {bound_triggers} trigger(s) bound"));

        Ok(Self {
            controller,
            listeners,
            bound_triggers,
            config,
        })
    }

    pub fn open(&self, video: VideoRef) {
        self.controller.open(video);
    }

    pub fn close(&self) {
        self.controller.close();
    }

    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    pub fn current(&self) -> Option<VideoRef> {
        self.controller.state().current().cloned()
    }

    pub fn bound_triggers(&self) -> usize {
        self.bound_triggers
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn config(&self) -> &ModalConfig {
        &self.config
    }
}

impl Drop for VideoModal {
    /// Closes the modal before the listeners are removed.
    fn drop(&mut self) {
        self.controller.close();
        clog(&format!("video modal torn down, {} listener(s) removed", self.listeners.len()));
    }
}
