use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum ModalError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("required element #{id} not found")]
    MissingElement { id: String },
    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },
    #[error("trigger is missing the `{attribute}` attribute")]
    MissingAttribute { attribute: String },
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("javascript error: {0}")]
    Js(String),
}

pub type Result<T, E = ModalError> = std::result::Result<T, E>;

/// Best-effort message for a thrown `JsValue`.
pub fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl From<JsValue> for ModalError {
    fn from(value: JsValue) -> Self {
        ModalError::Js(js_message(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_item() {
        let e = ModalError::MissingElement {
            id: "videoModal".into(),
        };
        assert_eq!(e.to_string(), "required element #videoModal not found");
        let e = ModalError::MissingAttribute {
            attribute: "data-video-id".into(),
        };
        assert!(e.to_string().contains("data-video-id"));
    }

    #[test]
    fn config_errors_convert_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e: ModalError = err.into();
        assert!(matches!(e, ModalError::Config(_)));
    }
}
