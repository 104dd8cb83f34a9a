use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement, HtmlSelectElement};

use pagekit_core::constants::{STORAGE_KEY, THEME_SWITCHER_ID};
use pagekit_core::{ColorScheme, PreferenceStore};
use pagekit_web::storage::LocalStorage;
use pagekit_web::theme_switcher;

use super::{document, reset_page};

fn rendered_scheme() -> String {
    document()
        .document_element()
        .expect("root")
        .unchecked_into::<HtmlElement>()
        .style()
        .get_property_value("color-scheme")
        .expect("style value")
}

fn switcher() -> HtmlSelectElement {
    document()
        .get_element_by_id(THEME_SWITCHER_ID)
        .expect("switcher injected")
        .unchecked_into()
}

#[wasm_bindgen_test]
fn control_is_injected_as_first_body_child() {
    let body = reset_page();
    body.set_inner_html("<main>content</main>");
    theme_switcher::install(&document()).expect("install");
    let first = body.first_element_child().expect("first child");
    assert_eq!(first.tag_name(), "LABEL");
    assert_eq!(first.class_name(), "color-scheme");
    assert_eq!(switcher().length(), 3);
}

#[wasm_bindgen_test]
fn default_scheme_applied_without_saved_value() {
    reset_page();
    theme_switcher::install(&document()).expect("install");
    assert_eq!(rendered_scheme(), "light dark");
    assert_eq!(switcher().value(), "light dark");
    let storage = LocalStorage::open().expect("storage");
    assert_eq!(
        storage.get_item(STORAGE_KEY).unwrap().as_deref(),
        Some("light dark")
    );
}

#[wasm_bindgen_test]
fn saved_scheme_is_restored_on_load() {
    reset_page();
    let storage = LocalStorage::open().expect("storage");
    storage.set_item(STORAGE_KEY, "dark").unwrap();
    let selector = theme_switcher::install(&document()).expect("install");
    assert_eq!(selector.saved_preference().unwrap(), Some(ColorScheme::Dark));
    assert_eq!(rendered_scheme(), "dark");
    assert_eq!(switcher().value(), "dark");
}

#[wasm_bindgen_test]
fn input_event_persists_selection() {
    reset_page();
    theme_switcher::install(&document()).expect("install");
    let select = switcher();
    select.set_value("light");
    let event = Event::new("input").expect("event");
    select.dispatch_event(&event).expect("dispatch");

    let storage = LocalStorage::open().expect("storage");
    assert_eq!(storage.get_item(STORAGE_KEY).unwrap().as_deref(), Some("light"));
    assert_eq!(rendered_scheme(), "light");
}
