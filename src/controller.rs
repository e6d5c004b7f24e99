use crate::model::{ModalAction, ModalState, VideoRef};
use crate::util::clog;
use std::cell::RefCell;
use std::rc::Rc;
use yew::Reducible;

/// Whatever actually shows the modal. Rendering must be idempotent.
pub trait ModalView {
    fn render(&self, state: &ModalState);
}

/// Owns the modal state; `open` and `close` are its only mutators.
pub struct ModalController<V: ModalView> {
    state: RefCell<Rc<ModalState>>,
    view: V,
}

impl<V: ModalView> ModalController<V> {
    pub fn new(view: V) -> Self {
        Self {
            state: RefCell::new(Rc::new(ModalState::default())),
            view,
        }
    }

    pub fn state(&self) -> Rc<ModalState> {
        self.state.borrow().clone()
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn open(&self, video: VideoRef) {
        clog(&format!("open video {} ({})", video.id, video.title));
        self.dispatch(ModalAction::Open(video));
    }

    pub fn close(&self) {
        clog("close video modal");
        self.dispatch(ModalAction::Close);
    }

    /// Outside-click dismissal. Only a click whose target is the backdrop
    /// itself closes; clicks that land in the content are ignored.
    pub fn dismiss_if_backdrop(&self, target_is_backdrop: bool) -> bool {
        if target_is_backdrop {
            self.close();
        }
        target_is_backdrop
    }

    fn dispatch(&self, action: ModalAction) {
        let next = {
            let current = self.state.borrow().clone();
            current.reduce(action)
        };
        let changed = !Rc::ptr_eq(&next, &self.state.borrow());
        *self.state.borrow_mut() = next.clone();
        // Close re-renders even when the state is unchanged.
        if changed || !next.is_open() {
            self.view.render(&next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        frames: RefCell<Vec<ModalState>>,
    }

    impl Recorder {
        fn last(&self) -> Option<ModalState> {
            self.frames.borrow().last().cloned()
        }
        fn count(&self) -> usize {
            self.frames.borrow().len()
        }
    }

    impl ModalView for Recorder {
        fn render(&self, state: &ModalState) {
            self.frames.borrow_mut().push(state.clone());
        }
    }

    fn demo() -> VideoRef {
        VideoRef::new("dQw4w9WgXcQ", "Demo")
    }

    #[test]
    fn starts_closed_without_rendering() {
        let c = ModalController::new(Recorder::default());
        assert!(!c.is_open());
        assert_eq!(c.view().count(), 0);
    }

    #[test]
    fn open_renders_the_video() {
        let c = ModalController::new(Recorder::default());
        c.open(demo());
        assert!(c.is_open());
        let frame = c.view().last().unwrap();
        assert!(frame.open);
        assert_eq!(frame.current, Some(demo()));
    }

    #[test]
    fn repeated_open_renders_once() {
        let c = ModalController::new(Recorder::default());
        c.open(demo());
        c.open(demo());
        assert_eq!(c.view().count(), 1);
    }

    #[test]
    fn open_then_close_restores_closed_state() {
        let c = ModalController::new(Recorder::default());
        c.open(demo());
        c.close();
        assert!(!c.is_open());
        assert_eq!(c.view().last(), Some(ModalState::default()));
    }

    #[test]
    fn close_is_idempotent_from_any_state() {
        let c = ModalController::new(Recorder::default());
        c.close();
        c.close();
        assert_eq!(c.view().last(), Some(ModalState::default()));
        c.open(demo());
        c.close();
        c.close();
        assert_eq!(*c.state(), ModalState::default());
    }

    #[test]
    fn backdrop_click_closes() {
        let c = ModalController::new(Recorder::default());
        c.open(demo());
        assert!(c.dismiss_if_backdrop(true));
        assert!(!c.is_open());
    }

    #[test]
    fn content_click_keeps_modal_open() {
        let c = ModalController::new(Recorder::default());
        c.open(demo());
        assert!(!c.dismiss_if_backdrop(false));
        assert!(c.is_open());
        assert_eq!(c.view().count(), 1);
    }

    #[test]
    fn switching_videos_overwrites_current() {
        let c = ModalController::new(Recorder::default());
        c.open(demo());
        c.open(VideoRef::new("other", "Other"));
        assert_eq!(c.state().current().map(|v| v.title.as_str()), Some("Other"));
        assert_eq!(c.view().count(), 2);
    }
}
