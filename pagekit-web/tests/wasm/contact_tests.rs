use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlFormElement};

use pagekit_core::MailtoAdapter;
use pagekit_core::memory::RecordingNavigator;
use pagekit_web::contact::{self, ContactForm, ContactSubmission, form_fields};

use super::{document, reset_page};

fn mount_contact_form() -> HtmlFormElement {
    let body = reset_page();
    body.set_inner_html(
        r#"<form id="contactForm" action="mailto:test@example.com">
             <input name="name" value="Jo Doe">
             <input name="email" value="jo@x.com">
           </form>"#,
    );
    document()
        .get_element_by_id("contactForm")
        .expect("form mounted")
        .unchecked_into()
}

fn submit_event() -> Event {
    let init = EventInit::new();
    init.set_cancelable(true);
    Event::new_with_event_init_dict("submit", &init).expect("submit event")
}

#[wasm_bindgen_test]
fn missing_form_is_skipped() {
    reset_page();
    assert!(ContactForm::find(&document()).is_none());
    assert!(!contact::install(&document()).expect("install"));
}

#[wasm_bindgen_test]
fn fields_are_read_in_document_order() {
    let form = mount_contact_form();
    let fields = form_fields(&form).expect("fields");
    let pairs: Vec<_> = fields.iter().collect();
    assert_eq!(pairs, vec![("name", "Jo Doe"), ("email", "jo@x.com")]);
}

#[wasm_bindgen_test]
fn submission_builds_mailto_and_cancels_default() {
    let form = mount_contact_form();
    let adapter = MailtoAdapter::new(RecordingNavigator::default());
    let event = submit_event();
    let address = adapter
        .handle_submit(&ContactSubmission::new(event.clone(), form))
        .expect("navigate");
    assert_eq!(
        address.as_str(),
        "mailto:test@example.com?name=Jo%20Doe&email=jo%40x.com"
    );
    assert!(event.default_prevented());
}

#[wasm_bindgen_test]
fn dispatched_submit_is_intercepted() {
    let form = mount_contact_form();
    let adapter = Rc::new(MailtoAdapter::new(RecordingNavigator::default()));
    assert!(adapter.attach(ContactForm::find(&document()).as_ref()));

    let event = submit_event();
    form.dispatch_event(&event).expect("dispatch");

    assert!(event.default_prevented());
    assert_eq!(
        adapter.navigator().visited(),
        vec!["mailto:test@example.com?name=Jo%20Doe&email=jo%40x.com".to_string()]
    );
}
