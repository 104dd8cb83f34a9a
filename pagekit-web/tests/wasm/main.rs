#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::wasm_bindgen_test_configure;

wasm_bindgen_test_configure!(run_in_browser);

mod contact_tests;
mod theme_tests;

use web_sys::{Document, Element};

use pagekit_web::dom;

pub fn document() -> Document {
    dom::document().expect("document")
}

/// Remove anything a previous test left in `<body>` and reset storage.
pub fn reset_page() -> Element {
    let doc = document();
    let body = doc.body().expect("document body");
    body.set_inner_html("");
    if let Some(root) = doc.document_element() {
        let _ = root.remove_attribute("style");
    }
    if let Some(storage) = dom::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.clear();
    }
    body.into()
}
