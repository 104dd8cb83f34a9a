use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("document has no {0}")]
    Missing(&'static str),
    #[error("element #{0} is not a {1}")]
    WrongElement(String, &'static str),
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the page's document, if running in a browser.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Write a raw line to the browser console, bypassing the logger.
pub fn console_marker(message: &str) {
    web_sys::console::log_1(&JsValue::from(message));
}
