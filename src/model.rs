//! Core data models for the video modal.
//! The modal is either closed or showing exactly one video.

use std::rc::Rc;
use yew::Reducible;

/// One selectable video as read from a trigger element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoRef {
    /// Opaque YouTube video id. Not validated; a bad id yields a dead URL.
    pub id: String,
    pub title: String,
}

impl VideoRef {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
    /// Video loaded in the embed frame. `Some` iff `open`.
    pub current: Option<VideoRef>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Open(VideoRef),
    Close,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current(&self) -> Option<&VideoRef> {
        self.current.as_ref()
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ModalAction::*;
        match action {
            Open(video) => {
                if self.open && self.current.as_ref() == Some(&video) {
                    return self;
                }
                Rc::new(ModalState {
                    open: true,
                    current: Some(video),
                })
            }
            Close => {
                if !self.open && self.current.is_none() {
                    return self;
                }
                Rc::new(ModalState::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> VideoRef {
        VideoRef::new("dQw4w9WgXcQ", "Demo")
    }

    #[test]
    fn default_state_is_closed() {
        let s = ModalState::default();
        assert!(!s.is_open());
        assert!(s.current().is_none());
    }

    #[test]
    fn open_sets_current_video() {
        let s = Rc::new(ModalState::default()).reduce(ModalAction::Open(demo()));
        assert!(s.is_open());
        assert_eq!(s.current(), Some(&demo()));
    }

    #[test]
    fn reopening_same_video_is_a_noop() {
        let s = Rc::new(ModalState::default()).reduce(ModalAction::Open(demo()));
        let again = s.clone().reduce(ModalAction::Open(demo()));
        assert!(Rc::ptr_eq(&s, &again));
    }

    #[test]
    fn opening_another_video_replaces_current() {
        let s = Rc::new(ModalState::default())
            .reduce(ModalAction::Open(demo()))
            .reduce(ModalAction::Open(VideoRef::new("abc123", "Other")));
        assert!(s.is_open());
        assert_eq!(s.current().map(|v| v.id.as_str()), Some("abc123"));
    }

    #[test]
    fn close_resets_state_and_is_idempotent() {
        let closed = Rc::new(ModalState::default())
            .reduce(ModalAction::Open(demo()))
            .reduce(ModalAction::Close);
        assert_eq!(*closed, ModalState::default());
        let again = closed.clone().reduce(ModalAction::Close);
        assert!(Rc::ptr_eq(&closed, &again));
    }
}
